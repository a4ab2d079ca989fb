//! View-authorization resolver.
//!
//! Pure functions over a Restricted profile's scope string (e.g. `"CVS"`,
//! `"CVS,CNS"` or `"ALL"`). Nothing here talks to the backend: the backend
//! enforces the scope, this module only adapts what the UI offers.

/// A recognized scope token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeTag {
    Cvs,
    Cns,
    Pur,
    Hosp,
    Commercial,
    All,
}

impl ScopeTag {
    /// Choices offered by the admin forms, in display order.
    pub const ALL: [ScopeTag; 6] = [
        ScopeTag::Cvs,
        ScopeTag::Cns,
        ScopeTag::Pur,
        ScopeTag::Hosp,
        ScopeTag::Commercial,
        ScopeTag::All,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ScopeTag::Cvs => "CVS",
            ScopeTag::Cns => "CNS",
            ScopeTag::Pur => "PUR",
            ScopeTag::Hosp => "HOSP",
            ScopeTag::Commercial => "COMMERCIAL",
            ScopeTag::All => "ALL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScopeTag::All => "ALL",
            other => other.code(),
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.code().eq_ignore_ascii_case(token.trim()))
    }
}

/// Individual tokens of a scope string. Tokens are separated by commas,
/// semicolons, pipes or whitespace.
pub fn scope_tokens(scope: &str) -> impl Iterator<Item = &str> {
    scope
        .split(|c: char| c == ',' || c == ';' || c == '|' || c.is_whitespace())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// True iff the scope is `ALL` or contains `ALL` as one of its tokens
/// (case-insensitive).
pub fn has_unrestricted_view(scope: Option<&str>) -> bool {
    let Some(scope) = scope else {
        return false;
    };
    scope.trim().eq_ignore_ascii_case("ALL")
        || scope_tokens(scope).any(|t| t.eq_ignore_ascii_case("ALL"))
}

/// Only unrestricted users get a business-unit filter control.
pub fn business_unit_filter_enabled(scope: Option<&str>) -> bool {
    has_unrestricted_view(scope)
}

/// Display label for a scope string. Unknown tokens are kept as they are.
pub fn format_scope_label(scope: &str) -> String {
    scope_tokens(scope)
        .map(|token| match ScopeTag::parse(token) {
            Some(tag) => tag.label().to_string(),
            None => token.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_view() {
        assert!(has_unrestricted_view(Some("ALL")));
        assert!(has_unrestricted_view(Some("all")));
        assert!(has_unrestricted_view(Some("CVS,ALL")));
        assert!(has_unrestricted_view(Some(" cns ; All ")));
        assert!(!has_unrestricted_view(Some("CVS")));
        assert!(!has_unrestricted_view(Some("CVS,CNS")));
        assert!(!has_unrestricted_view(Some("")));
        assert!(!has_unrestricted_view(None));
        // ALL must be a whole token
        assert!(!has_unrestricted_view(Some("SMALL")));
    }

    #[test]
    fn test_filter_enabled_matches_unrestricted_view() {
        for scope in [Some("ALL"), Some("CVS"), Some("HOSP, all"), Some("PUR"), None] {
            assert_eq!(
                business_unit_filter_enabled(scope),
                has_unrestricted_view(scope),
                "{scope:?}"
            );
        }
    }

    #[test]
    fn test_format_scope_label() {
        assert_eq!(format_scope_label("CVS"), "CVS");
        assert_eq!(format_scope_label("cvs,hosp"), "CVS, HOSP");
        assert_eq!(format_scope_label("CVS,ONCO"), "CVS, ONCO");
        assert_eq!(format_scope_label(""), "");
    }

    #[test]
    fn test_scope_tag_parse() {
        assert_eq!(ScopeTag::parse(" commercial "), Some(ScopeTag::Commercial));
        assert_eq!(ScopeTag::parse("ONCO"), None);
    }
}
