pub mod create_event;
pub mod get_event;
pub mod get_events;
pub mod get_participants;
pub mod update_event;

const MAX_TITLE_LENGTH: usize = 200;
const MAX_LOCATION_LENGTH: usize = 200;
