use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot parse URL")]
    CannotParseUrl,
    #[error("Request error")]
    RequestError(#[from] reqwest::Error),
    #[error("Request middleware error")]
    RequestMiddlewareError(#[from] reqwest_middleware::Error),
    #[error("HTTP response error, status: {0}: {1}")]
    HttpResponseError(u16, String),
    #[error("Invalid response")]
    InvalidResponse,
    #[error("Missing refresh token")]
    MissingRefreshToken,
    #[error("Refresh token exchange failed: {reason}")]
    RefreshFailed { status: Option<u16>, reason: String },
    #[error("Invalid token payload")]
    InvalidTokenPayload,
    #[error("Invalid username")]
    InvalidUsername,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Invalid event title")]
    InvalidEventTitle,
    #[error("Invalid event location")]
    InvalidEventLocation,
    #[error("Empty update")]
    EmptyUpdate,
    #[error("Invalid item name")]
    InvalidItemName,
    #[error("Invalid quantity")]
    InvalidQuantity,
    #[error("Invalid poll question")]
    InvalidPollQuestion,
    #[error("Invalid poll options")]
    InvalidPollOptions,
    #[error("Invalid vote")]
    InvalidVote,
    #[error("Invalid rsvp status")]
    InvalidRsvpStatus,
    #[error("Invalid field key")]
    InvalidFieldKey,
    #[error("Invalid field label")]
    InvalidFieldLabel,
    #[error("Invalid field type")]
    InvalidFieldType,
    #[error("Invalid field options")]
    InvalidFieldOptions,
    #[error("Invalid invite recipients")]
    InvalidInviteRecipients,
    #[error("Invalid invite expiry")]
    InvalidInviteExpiry,
    #[error("Invalid invite token")]
    InvalidInviteToken,
    #[error("Invalid invite status")]
    InvalidInviteStatus,
}
