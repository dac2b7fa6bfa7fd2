use crate::auth::{
    MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};
use crate::error::Error;
use crate::utils::text;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `LoginUser` command is used to exchange user credentials for a token
/// pair. It has additional payload:
/// - `username` - username, must be between 3 and 50 characters long.
/// - `password` - password, must be between 3 and 100 characters long.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginUser {
    /// Username, must be between 3 and 50 characters long.
    pub username: String,
    /// Password, must be between 3 and 100 characters long.
    pub password: String,
}

impl Default for LoginUser {
    fn default() -> Self {
        LoginUser {
            username: "user".to_string(),
            password: "secret".to_string(),
        }
    }
}

impl Validatable<Error> for LoginUser {
    fn validate(&self) -> Result<(), Error> {
        if self.username.is_empty()
            || self.username.len() > MAX_USERNAME_LENGTH
            || self.username.len() < MIN_USERNAME_LENGTH
        {
            return Err(Error::InvalidUsername);
        }

        if !text::is_resource_name_valid(&self.username) {
            return Err(Error::InvalidUsername);
        }

        if self.password.is_empty()
            || self.password.len() > MAX_PASSWORD_LENGTH
            || self.password.len() < MIN_PASSWORD_LENGTH
        {
            return Err(Error::InvalidPassword);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_valid_credentials() {
        let command = LoginUser::default();
        assert!(command.validate().is_ok());
    }

    #[test]
    fn should_reject_short_username() {
        let command = LoginUser {
            username: "ab".to_string(),
            ..Default::default()
        };
        assert!(matches!(command.validate(), Err(Error::InvalidUsername)));
    }

    #[test]
    fn should_reject_short_password() {
        let command = LoginUser {
            password: "ab".to_string(),
            ..Default::default()
        };
        assert!(matches!(command.validate(), Err(Error::InvalidPassword)));
    }
}
