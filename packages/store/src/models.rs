//! # Domain models
//!
//! The types shared by every layer of the client. They are `Serialize +
//! Deserialize` and use the backend's field names on the wire, so the `api`
//! crate decodes responses straight into them.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | Closed set of account roles (`A`, `D`, `R` on the wire). |
//! | [`BusinessUnit`] | The five business units a record is tagged with. |
//! | [`InformationType`] | The five information categories, keyed by their wire label. |
//! | [`Profile`] | The authenticated user. `display_name` and `initial` are derived from the email every time a profile is built or decoded. |
//! | [`InformationRecord`] | One submitted market-intelligence record (read-only on the client). |
//! | [`UserAccount`] | An account as listed in the admin user management view. |

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Account role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "A")]
    Admin,
    #[serde(rename = "D")]
    Delegate,
    #[serde(rename = "R")]
    Restricted,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Delegate, Role::Admin, Role::Restricted];

    /// Single-letter wire code.
    pub fn code(self) -> &'static str {
        match self {
            Role::Admin => "A",
            Role::Delegate => "D",
            Role::Restricted => "R",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Role::Admin),
            "D" => Some(Role::Delegate),
            "R" => Some(Role::Restricted),
            _ => None,
        }
    }

    /// Short badge label.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Delegate => "Délégué",
            Role::Restricted => "Responsable",
        }
    }

    /// Long label used in the role selectors of the admin forms.
    pub fn long_label(self) -> &'static str {
        match self {
            Role::Admin => "Administrateur",
            Role::Delegate => "Délégué",
            Role::Restricted => "Responsable (Lecture seule)",
        }
    }
}

/// Business unit a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BusinessUnit {
    Cvs,
    Cns,
    Pur,
    Hosp,
    Commercial,
}

impl BusinessUnit {
    pub const ALL: [BusinessUnit; 5] = [
        BusinessUnit::Cvs,
        BusinessUnit::Cns,
        BusinessUnit::Pur,
        BusinessUnit::Hosp,
        BusinessUnit::Commercial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BusinessUnit::Cvs => "CVS",
            BusinessUnit::Cns => "CNS",
            BusinessUnit::Pur => "PUR",
            BusinessUnit::Hosp => "HOSP",
            BusinessUnit::Commercial => "COMMERCIAL",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|bu| bu.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Information category of a record.
///
/// The backend stores the French label verbatim, so [`InformationType::label`]
/// is also the wire value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InformationType {
    ProductIntel,
    MedicalActivity,
    EventCampaign,
    CommercialWatch,
    Recommendation,
}

impl InformationType {
    pub const ALL: [InformationType; 5] = [
        InformationType::ProductIntel,
        InformationType::MedicalActivity,
        InformationType::EventCampaign,
        InformationType::CommercialWatch,
        InformationType::Recommendation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InformationType::ProductIntel => "Produit concurrent",
            InformationType::MedicalActivity => "Activités médicales",
            InformationType::EventCampaign => "Événements & campagnes",
            InformationType::CommercialWatch => "Veille commerciale",
            InformationType::Recommendation => "Vos recommandations",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// Recommendations carry a comment only; lab and product do not apply.
    pub fn is_recommendation(self) -> bool {
        self == InformationType::Recommendation
    }
}

/// The authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProfileSnapshot", into = "ProfileSnapshot")]
pub struct Profile {
    pub email: String,
    /// Local part of the email.
    pub display_name: String,
    /// First letter of `display_name`, uppercased.
    pub initial: String,
    pub role: Role,
    pub user_id: String,
    /// Authorized business units for [`Role::Restricted`], e.g. `"CVS"` or `"ALL"`.
    pub authorized_scope: Option<String>,
}

impl Profile {
    pub fn new(
        email: impl Into<String>,
        role: Role,
        user_id: impl Into<String>,
        authorized_scope: Option<String>,
    ) -> Self {
        let email = email.into();
        let display_name = email.split('@').next().unwrap_or_default().to_string();
        let initial = display_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_default();
        Self {
            email,
            display_name,
            initial,
            role,
            user_id: user_id.into(),
            authorized_scope: authorized_scope.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Persisted form of a [`Profile`]: derived fields are never stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ProfileSnapshot {
    email: String,
    role: Role,
    user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    view: Option<String>,
}

impl From<ProfileSnapshot> for Profile {
    fn from(s: ProfileSnapshot) -> Self {
        Profile::new(s.email, s.role, s.user_id, s.view)
    }
}

impl From<Profile> for ProfileSnapshot {
    fn from(p: Profile) -> Self {
        ProfileSnapshot {
            email: p.email,
            role: p.role,
            user_id: p.user_id,
            view: p.authorized_scope,
        }
    }
}

/// Email of the account that submitted a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submitter {
    pub email: String,
}

/// A submitted market-intelligence record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationRecord {
    pub id: i64,
    #[serde(rename = "type_bu")]
    pub business_unit: String,
    #[serde(rename = "type_info")]
    pub information_type: String,
    #[serde(rename = "laboratoire", default)]
    pub lab: Option<String>,
    #[serde(rename = "produit_concurent", default)]
    pub competing_product: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub info_date: Option<String>,
    #[serde(rename = "users", default)]
    pub submitted_by: Option<Submitter>,
}

impl InformationRecord {
    pub fn lab(&self) -> &str {
        self.lab.as_deref().unwrap_or_default()
    }

    pub fn competing_product(&self) -> &str {
        self.competing_product.as_deref().unwrap_or_default()
    }

    pub fn comment(&self) -> &str {
        self.comment.as_deref().unwrap_or_default()
    }

    pub fn submitter_email(&self) -> Option<&str> {
        self.submitted_by.as_ref().map(|s| s.email.as_str())
    }

    pub fn kind(&self) -> Option<InformationType> {
        InformationType::from_label(&self.information_type)
    }

    pub fn is_recommendation(&self) -> bool {
        self.kind().is_some_and(InformationType::is_recommendation)
    }
}

/// An account as seen by administrators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    /// Login secret.
    #[serde(rename = "user_code")]
    pub access_code: String,
    pub role: Role,
    #[serde(rename = "view", default)]
    pub authorized_scope: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Accept identifiers sent either as JSON strings or as integers.
pub fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }
    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Render a backend timestamp as `dd/mm/yyyy hh:mm`.
///
/// Accepts RFC 3339 and offset-less ISO timestamps; anything else is returned
/// unchanged.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%d/%m/%Y %H:%M";
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    raw.to_string()
}
