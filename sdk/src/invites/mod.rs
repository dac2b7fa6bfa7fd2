pub mod respond_to_invite;
pub mod send_invites;

// The server caps invite expiry at 90 days.
const MAX_INVITE_EXPIRY_HOURS: u32 = 24 * 90;
