use serde::{Deserialize, Serialize};

use crate::entities::Role;
use crate::error::StoreError;
use crate::password;

/// Input for creating an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub username: String,
    /// `None` falls back to the placeholder default password
    pub password: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl NewAccount {
    /// A regular account with the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
            role: Role::User,
        }
    }

    /// Check the shell-owned business rules for the username.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the username is malformed.
    pub fn validate(&self) -> Result<(), StoreError> {
        password::validate_username(&self.username).map_err(StoreError::Validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_user_role() {
        let account = NewAccount::new("ana", "secret-pw");
        assert_eq!(account.role, Role::User);
        assert!(account.validate().is_ok());
    }

    #[test]
    fn test_empty_username_rejected() {
        let account = NewAccount::new("", "secret-pw");
        assert!(account.validate().is_err());
    }
}
