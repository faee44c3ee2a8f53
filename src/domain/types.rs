//! Strongly-typed value objects used by the lead pipeline.
//!
//! These wrappers enforce basic invariants (non-empty, trimmed secrets and
//! messages) so that once a value reaches the relay it can be treated as
//! trusted.
use thiserror::Error;

/// Minimum number of digits a contact phone must carry.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            /// Trims whitespace and rejects empty inputs.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }
    };
}

non_empty_string_newtype!(
    BotToken,
    "Chat bot authentication token enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    ChatId,
    "Destination chat identifier (numeric, negative for groups and channels)."
);

non_empty_string_newtype!(
    LeadMessage,
    "Pre-formatted lead text enforcing trimmed, non-empty values."
);

/// Counts the ASCII digits in `value`, ignoring every other character.
pub fn phone_digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Returns `true` when the phone contains at least [`MIN_PHONE_DIGITS`] digits.
///
/// Everything except ASCII digits is ignored, no country code or format
/// checks are performed.
pub fn validate_phone(phone: &str) -> bool {
    phone_digit_count(phone) >= MIN_PHONE_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_newtypes_trim_and_reject_blank() {
        assert_eq!(BotToken::new("  123:abc ").unwrap().as_str(), "123:abc");
        assert_eq!(ChatId::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(LeadMessage::new(""), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn phone_digit_count_strips_formatting() {
        assert_eq!(phone_digit_count("+7 (993) 772-52-52"), 11);
        assert_eq!(phone_digit_count(""), 0);
    }

    #[test]
    fn validate_phone_counts_digits_only() {
        assert!(!validate_phone(""));
        assert!(validate_phone("89937725252"));
        assert!(!validate_phone("+7 (993) 772-52"));
        assert!(validate_phone("+7 (993) 772-52-5"));
    }

    #[test]
    fn phone_digit_count_ignores_non_ascii_digits() {
        assert_eq!(phone_digit_count("٣٣٣-12"), 2);
    }
}
