use crate::error::Error;
use crate::invites::MAX_INVITE_EXPIRY_HOURS;
use crate::models::event::EventId;
use crate::models::user_info::UserId;
use crate::utils::text;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `SendInvites` command invites people to an event, by email address or by
/// existing account id. At least one recipient list must be non-empty.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SendInvites {
    #[serde(skip)]
    pub event_id: EventId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<UserId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_hours: Option<u32>,
}

impl Validatable<Error> for SendInvites {
    fn validate(&self) -> Result<(), Error> {
        let has_emails = self
            .emails
            .as_ref()
            .is_some_and(|emails| !emails.is_empty());
        let has_user_ids = self
            .user_ids
            .as_ref()
            .is_some_and(|user_ids| !user_ids.is_empty());
        if !has_emails && !has_user_ids {
            return Err(Error::InvalidInviteRecipients);
        }

        if let Some(emails) = &self.emails {
            if emails.iter().any(|email| !text::is_email_valid(email)) {
                return Err(Error::InvalidEmail);
            }
        }

        if let Some(expires_in_hours) = self.expires_in_hours {
            if expires_in_hours == 0 || expires_in_hours > MAX_INVITE_EXPIRY_HOURS {
                return Err(Error::InvalidInviteExpiry);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_email_invites() {
        let command = SendInvites {
            event_id: 1,
            emails: Some(vec!["ann@example.com".to_string()]),
            ..Default::default()
        };
        assert!(command.validate().is_ok());
    }

    #[test]
    fn should_reject_invites_without_recipients() {
        let command = SendInvites {
            event_id: 1,
            emails: Some(vec![]),
            ..Default::default()
        };
        assert!(matches!(
            command.validate(),
            Err(Error::InvalidInviteRecipients)
        ));
    }

    #[test]
    fn should_reject_out_of_range_expiry() {
        let command = SendInvites {
            event_id: 1,
            user_ids: Some(vec![7]),
            expires_in_hours: Some(MAX_INVITE_EXPIRY_HOURS + 1),
            ..Default::default()
        };
        assert!(matches!(
            command.validate(),
            Err(Error::InvalidInviteExpiry)
        ));
    }
}
