use crate::models::event::EventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub id: u64,
    pub event: EventId,
    pub participation: u64,
    pub item_name: String,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
