pub mod auth_tokens;
pub mod contribution;
pub mod custom_field;
pub mod event;
pub mod pagination;
pub mod participation;
pub mod poll;
pub mod user_info;
