pub mod create_custom_field;
pub mod get_custom_fields;

const MAX_KEY_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 200;
