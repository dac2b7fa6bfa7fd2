use crate::error::Error;
use crate::models::event::EventId;
use crate::polls::{MAX_OPTION_LABEL_LENGTH, MAX_QUESTION_LENGTH};
use crate::validatable::Validatable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `CreatePoll` command opens a poll on an event. It has additional payload:
/// - `question` - the question asked, must be between 1 and 500 characters long.
/// - `allows_multiple` - whether voters may pick several options.
/// - `opens_at` / `closes_at` - optional voting window.
/// - `options` - the candidate answers, at least one.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreatePoll {
    #[serde(skip)]
    pub event_id: EventId,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_multiple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opens_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closes_at: Option<DateTime<Utc>>,
    pub options: Vec<NewPollOption>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct NewPollOption {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl Validatable<Error> for CreatePoll {
    fn validate(&self) -> Result<(), Error> {
        if self.question.trim().is_empty() || self.question.len() > MAX_QUESTION_LENGTH {
            return Err(Error::InvalidPollQuestion);
        }

        if self.options.is_empty() {
            return Err(Error::InvalidPollOptions);
        }

        for option in &self.options {
            if option.label.trim().is_empty() || option.label.len() > MAX_OPTION_LABEL_LENGTH {
                return Err(Error::InvalidPollOptions);
            }
        }

        Ok(())
    }
}
