use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RESOURCE_NAME_REGEX: Regex = Regex::new(r"^[\w\.\-\s]+$").unwrap();
    static ref FIELD_KEY_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_\-]+$").unwrap();
}

pub fn is_resource_name_valid(value: &str) -> bool {
    RESOURCE_NAME_REGEX.is_match(value)
}

pub fn is_field_key_valid(value: &str) -> bool {
    FIELD_KEY_REGEX.is_match(value)
}

pub fn is_email_valid(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.split('.').count() > 1 && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_valid_emails() {
        assert!(is_email_valid("ann@example.com"));
        assert!(is_email_valid("a.b+c@mail.example.org"));
    }

    #[test]
    fn should_reject_invalid_emails() {
        assert!(!is_email_valid("ann"));
        assert!(!is_email_valid("ann@"));
        assert!(!is_email_valid("@example.com"));
        assert!(!is_email_valid("ann@example"));
        assert!(!is_email_valid("ann@.com"));
    }

    #[test]
    fn should_validate_field_keys() {
        assert!(is_field_key_valid("shirt_size"));
        assert!(is_field_key_valid("plus-one"));
        assert!(!is_field_key_valid("shirt size"));
        assert!(!is_field_key_valid(""));
    }
}
