use crate::auth::{
    MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};
use crate::error::Error;
use crate::utils::text;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `RegisterUser` command is used to create a new account. It has additional
/// payload:
/// - `username` - username, must be between 3 and 50 characters long.
/// - `email` - email address of the account.
/// - `password` - password, must be between 3 and 100 characters long.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Validatable<Error> for RegisterUser {
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

        if !text::is_email_valid(&self.email) {
            return Err(Error::InvalidEmail);
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

    fn command() -> RegisterUser {
        RegisterUser {
            username: "ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn should_accept_valid_registration() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn should_reject_invalid_email() {
        let command = RegisterUser {
            email: "not-an-email".to_string(),
            ..command()
        };
        assert!(matches!(command.validate(), Err(Error::InvalidEmail)));
    }
}
