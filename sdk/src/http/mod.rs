pub mod auth;
pub mod client;
pub mod config;
pub mod contributions;
pub mod custom_fields;
pub mod events;
pub mod invites;
pub mod participations;
pub mod polls;
