use crate::error::Error;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum InviteResponseStatus {
    Accepted,
    Declined,
}

impl FromStr for InviteResponseStatus {
    type Err = Error;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "accepted" => Ok(InviteResponseStatus::Accepted),
            "declined" => Ok(InviteResponseStatus::Declined),
            _ => Err(Error::InvalidInviteStatus),
        }
    }
}

impl Display for InviteResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InviteResponseStatus::Accepted => write!(f, "accepted"),
            InviteResponseStatus::Declined => write!(f, "declined"),
        }
    }
}

/// `RespondToInvite` command accepts or declines an invitation identified by
/// the single-use token from the invite link.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RespondToInvite {
    #[serde(skip)]
    pub invite_token: String,
    pub status: InviteResponseStatus,
}

impl Validatable<Error> for RespondToInvite {
    fn validate(&self) -> Result<(), Error> {
        if self.invite_token.trim().is_empty() {
            return Err(Error::InvalidInviteToken);
        }

        Ok(())
    }
}
