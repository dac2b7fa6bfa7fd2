pub mod auth;
pub mod client;
pub mod contributions;
pub mod custom_fields;
pub mod error;
pub mod events;
pub mod http;
pub mod invites;
pub mod models;
pub mod participations;
pub mod polls;
pub mod session;
pub mod utils;
pub mod validatable;
