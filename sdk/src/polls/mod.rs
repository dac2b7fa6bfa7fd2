pub mod create_poll;
pub mod get_poll_results;
pub mod get_polls;
pub mod vote_poll;

const MAX_QUESTION_LENGTH: usize = 500;
const MAX_OPTION_LABEL_LENGTH: usize = 200;
