use crate::utils::error::{AddressBookError, Result};
use regex::Regex;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Alphabetic}\p{N}][\p{Alphabetic}\p{N} ]*$").expect("name pattern")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("phone pattern"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]([A-Za-z0-9+_.-]*[A-Za-z0-9])?@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .expect("email pattern")
});

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Alphabetic}\p{N}]+$").expect("tag pattern"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AddressBookError::invalid_field(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(AddressBookError::invalid_field(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AddressBookError::invalid_field(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_name(field_name: &str, value: &str) -> Result<()> {
    if !NAME_PATTERN.is_match(value) {
        return Err(AddressBookError::invalid_field(
            field_name,
            value,
            "Names should only contain alphanumeric characters and spaces, and should not be blank",
        ));
    }
    Ok(())
}

pub fn validate_phone(field_name: &str, value: &str) -> Result<()> {
    if !PHONE_PATTERN.is_match(value) {
        return Err(AddressBookError::invalid_field(
            field_name,
            value,
            "Phone numbers should only contain numbers, and be at least 3 digits long",
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(AddressBookError::invalid_field(
            field_name,
            value,
            "Emails should be of the format local-part@domain",
        ));
    }
    Ok(())
}

pub fn validate_address(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if value.starts_with(char::is_whitespace) {
        return Err(AddressBookError::invalid_field(
            field_name,
            value,
            "Addresses can take any values, and should not be blank",
        ));
    }
    Ok(())
}

pub fn validate_tag(field_name: &str, value: &str) -> Result<()> {
    if !TAG_PATTERN.is_match(value) {
        return Err(AddressBookError::invalid_field(
            field_name,
            value,
            "Tag names should be alphanumeric",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_file", "contacts.toml").is_ok());
        assert!(validate_path("data_file", "").is_err());
        assert!(validate_path("data_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Alice").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Alice Pauline").is_ok());
        assert!(validate_name("name", "Captain 2nd").is_ok());
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", " Alice").is_err());
        assert!(validate_name("name", "peter*").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("phone", "911").is_ok());
        assert!(validate_phone("phone", "93121534").is_ok());
        assert!(validate_phone("phone", "91").is_err());
        assert!(validate_phone("phone", "9011p041").is_err());
        assert!(validate_phone("phone", "9312 1534").is_err());
        // Arabic-Indic digits
        assert!(validate_phone("phone", "\u{0661}\u{0662}\u{0663}").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "alice@example.com").is_ok());
        assert!(validate_email("email", "a@bc").is_ok());
        assert!(validate_email("email", "peter_jack+1190@example.com").is_ok());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "peterjackexample.com").is_err());
        assert!(validate_email("email", "peterjack@-example.com").is_err());
    }

    #[test]
    fn test_validate_address_and_tag() {
        assert!(validate_address("address", "Blk 456, Den Road, #01-355").is_ok());
        assert!(validate_address("address", "").is_err());
        assert!(validate_address("address", " ").is_err());
        assert!(validate_address("address", "\t\n").is_err());
        assert!(validate_address("address", " Den Road").is_err());

        assert!(validate_tag("tags", "friends").is_ok());
        assert!(validate_tag("tags", "owesMoney").is_ok());
        assert!(validate_tag("tags", "best friend").is_err());
        assert!(validate_tag("tags", "").is_err());
    }
}
