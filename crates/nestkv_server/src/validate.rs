//! Field validation for incoming requests.

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};

/// Checks that a request field is present and well formed, returning
/// the field text on success.
///
/// The length bounds come from the server configuration; under the
/// defaults a field must be 1 to 10 ASCII-alphanumeric characters.
/// Validation runs before the engine is invoked, so a rejected request
/// never changes the store.
pub fn required_field<'a>(
    name: &str,
    value: Option<&'a str>,
    config: &ServerConfig,
) -> ApiResult<&'a str> {
    let value = match value {
        Some(value) => value,
        None => {
            return Err(ApiError::validation(format!(
                "the '{name}' field is required"
            )))
        }
    };

    let length = value.chars().count();
    if length < config.min_field_chars || length > config.max_field_chars {
        return Err(ApiError::validation(format!(
            "the '{name}' field must be {} to {} characters long",
            config.min_field_chars, config.max_field_chars
        )));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ApiError::validation(format!(
            "the '{name}' field must contain only ASCII alphanumeric characters"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: Option<&str>) -> ApiResult<&str> {
        required_field("key", value, &ServerConfig::default())
    }

    #[test]
    fn accepts_alphanumeric_fields() {
        assert_eq!(check(Some("a")).unwrap(), "a");
        assert_eq!(check(Some("0123456789")).unwrap(), "0123456789");
        assert_eq!(check(Some("aB3z")).unwrap(), "aB3z");
    }

    #[test]
    fn rejects_missing_field() {
        let err = check(None).unwrap_err();
        assert_eq!(err.to_string(), "the 'key' field is required");
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(check(Some("")).is_err());
        assert!(check(Some("elevenchars")).is_err());

        let err = check(Some("")).unwrap_err();
        assert!(err.to_string().contains("1 to 10 characters"));
    }

    #[test]
    fn rejects_non_alphanumeric_text() {
        assert!(check(Some("a b")).is_err());
        assert!(check(Some("a-b")).is_err());
        assert!(check(Some("a_b")).is_err());
    }

    #[test]
    fn rejects_non_ascii_letters() {
        // char::is_alphanumeric would accept these; the API does not.
        assert!(check(Some("café")).is_err());
        assert!(check(Some("日本")).is_err());
    }

    #[test]
    fn custom_bounds_are_honored() {
        let config = ServerConfig::default().with_field_lengths(2, 4);
        assert!(required_field("key", Some("a"), &config).is_err());
        assert!(required_field("key", Some("abcd"), &config).is_ok());
        assert!(required_field("key", Some("abcde"), &config).is_err());
    }
}
