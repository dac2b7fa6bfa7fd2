use crate::error::Error;
use crate::models::contribution::Contribution;
use crate::models::custom_field::CustomFieldValue;
use crate::models::event::EventId;
use crate::models::user_info::UserInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl FromStr for RsvpStatus {
    type Err = Error;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "pending" => Ok(RsvpStatus::Pending),
            "accepted" => Ok(RsvpStatus::Accepted),
            "declined" => Ok(RsvpStatus::Declined),
            _ => Err(Error::InvalidRsvpStatus),
        }
    }
}

impl Display for RsvpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RsvpStatus::Pending => write!(f, "pending"),
            RsvpStatus::Accepted => write!(f, "accepted"),
            RsvpStatus::Declined => write!(f, "declined"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participation {
    pub id: u64,
    pub event: EventId,
    pub user: UserInfo,
    pub rsvp_status: RsvpStatus,
    #[serde(default)]
    pub plus_one_count: Option<u32>,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub dresscode_visible: Option<bool>,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
    #[serde(default)]
    pub custom_field_values: Vec<CustomFieldValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
