//! Admin forms for creating and editing accounts.

use api::{NewUserAccount, UserUpdate};
use store::{Role, UserAccount};

use crate::error::ValidationError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAccountForm {
    pub email: String,
    pub access_code: String,
    pub role: Role,
    pub scope: String,
}

impl Default for NewAccountForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            access_code: String::new(),
            role: Role::Delegate,
            scope: String::new(),
        }
    }
}

impl NewAccountForm {
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        if role != Role::Restricted {
            self.scope.clear();
        }
    }

    /// Request body. The scope is only sent for Restricted accounts.
    pub fn to_request(&self) -> Result<NewUserAccount, ValidationError> {
        let email = self.email.trim();
        let access_code = self.access_code.trim();
        if email.is_empty() || access_code.is_empty() {
            return Err(ValidationError::MissingAccountFields);
        }
        Ok(NewUserAccount {
            email: email.to_string(),
            user_code: access_code.to_string(),
            role: self.role,
            view: scope_for(self.role, &self.scope)?,
        })
    }
}

/// Edits role and scope of an existing account. The email is immutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditAccountForm {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub scope: String,
}

impl EditAccountForm {
    pub fn from_account(account: &UserAccount) -> Self {
        Self {
            id: account.id.clone(),
            email: account.email.clone(),
            role: account.role,
            scope: account.authorized_scope.clone().unwrap_or_default(),
        }
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        if role != Role::Restricted {
            self.scope.clear();
        }
    }

    pub fn to_update(&self) -> Result<UserUpdate, ValidationError> {
        Ok(UserUpdate {
            role: self.role,
            view: scope_for(self.role, &self.scope)?,
        })
    }
}

fn scope_for(role: Role, scope: &str) -> Result<Option<String>, ValidationError> {
    match role {
        Role::Restricted if scope.trim().is_empty() => Err(ValidationError::MissingScope),
        Role::Restricted => Ok(Some(scope.trim().to_string())),
        Role::Admin | Role::Delegate => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_requires_email_and_code() {
        let mut form = NewAccountForm::default();
        assert_eq!(form.role, Role::Delegate);
        form.email = "d@labo.fr".into();
        assert_eq!(form.to_request(), Err(ValidationError::MissingAccountFields));
        form.access_code = "D-001".into();
        let req = form.to_request().unwrap();
        assert_eq!(req.user_code, "D-001");
        assert_eq!(req.view, None);
    }

    #[test]
    fn test_restricted_requires_scope() {
        let mut form = NewAccountForm {
            email: "r@labo.fr".into(),
            access_code: "R-1".into(),
            ..Default::default()
        };
        form.set_role(Role::Restricted);
        assert_eq!(form.to_request(), Err(ValidationError::MissingScope));
        form.scope = "CVS".into();
        assert_eq!(form.to_request().unwrap().view.as_deref(), Some("CVS"));

        form.set_role(Role::Admin);
        assert_eq!(form.scope, "");
        assert_eq!(form.to_request().unwrap().view, None);
    }

    #[test]
    fn test_edit_form_clears_scope_when_leaving_restricted() {
        let account = UserAccount {
            id: "5".into(),
            email: "r@labo.fr".into(),
            access_code: "R-5".into(),
            role: Role::Restricted,
            authorized_scope: Some("ALL".into()),
            created_at: String::new(),
        };
        let mut form = EditAccountForm::from_account(&account);
        assert_eq!(form.to_update().unwrap().view.as_deref(), Some("ALL"));
        form.set_role(Role::Delegate);
        let update = form.to_update().unwrap();
        assert_eq!(update.role, Role::Delegate);
        assert_eq!(update.view, None);
        form.set_role(Role::Restricted);
        assert_eq!(form.to_update(), Err(ValidationError::MissingScope));
    }
}
