//! Views of the signed-in shell and the role rules that gate them.
//!
//! Admin-only and Restricted-only views are never offered to other roles.
//! This is advisory: the backend enforces authorization on its own.

use store::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    /// The submission wizard.
    Home,
    MySubmissions,
    AllSubmissions,
    UserManagement,
    AuthorizedView,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Accueil",
            View::MySubmissions => "Mes informations",
            View::AllSubmissions => "Toutes les informations",
            View::UserManagement => "Gestion des utilisateurs",
            View::AuthorizedView => "Vue autorisée",
        }
    }
}

/// Navigation entries offered to `role`, in display order.
pub fn nav_entries(role: Role) -> &'static [View] {
    match role {
        Role::Admin => &[
            View::UserManagement,
            View::AllSubmissions,
            View::Home,
            View::MySubmissions,
        ],
        Role::Delegate => &[View::Home, View::MySubmissions],
        Role::Restricted => &[View::AuthorizedView],
    }
}

/// Landing view after sign-in.
pub fn default_view(role: Role) -> View {
    match role {
        Role::Admin | Role::Delegate => View::Home,
        Role::Restricted => View::AuthorizedView,
    }
}

pub fn can_access(role: Role, view: View) -> bool {
    nav_entries(role).contains(&view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_reachable() {
        for role in Role::ALL {
            assert!(can_access(role, default_view(role)), "{role:?}");
        }
    }

    #[test]
    fn test_role_gates() {
        assert!(can_access(Role::Admin, View::UserManagement));
        assert!(can_access(Role::Admin, View::AllSubmissions));
        assert!(!can_access(Role::Admin, View::AuthorizedView));

        assert!(!can_access(Role::Delegate, View::UserManagement));
        assert!(!can_access(Role::Delegate, View::AllSubmissions));
        assert!(!can_access(Role::Delegate, View::AuthorizedView));

        assert_eq!(nav_entries(Role::Restricted), &[View::AuthorizedView]);
        assert!(!can_access(Role::Restricted, View::Home));
    }
}
