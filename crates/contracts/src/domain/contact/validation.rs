//! Validation rules for contact form fields

use once_cell::sync::Lazy;
use regex::Regex;

// `\x{FEFF}` is whitespace for browsers but not for `\s`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is valid")
});

pub const NAME_ERROR: &str = "Name must be at least 2 characters long";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters long";

pub static NAME_RULES: ValidationRules = ValidationRules::min_length(2, NAME_ERROR);
pub static EMAIL_RULES: ValidationRules = ValidationRules::pattern(&EMAIL_PATTERN, EMAIL_ERROR);
pub static MESSAGE_RULES: ValidationRules = ValidationRules::min_length(10, MESSAGE_ERROR);

/// Validation rules for a field.
/// Values are trimmed before any rule is checked.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRules {
    pub min_length: Option<usize>,
    pub pattern: Option<&'static Lazy<Regex>>,
    pub error: &'static str,
}

impl ValidationRules {
    pub const fn min_length(min: usize, error: &'static str) -> Self {
        Self {
            min_length: Some(min),
            pattern: None,
            error,
        }
    }

    pub const fn pattern(pattern: &'static Lazy<Regex>, error: &'static str) -> Self {
        Self {
            min_length: None,
            pattern: Some(pattern),
            error,
        }
    }

    /// Validate a string value, returning the fixed error message on failure.
    pub fn validate(&self, value: &str) -> Result<(), &'static str> {
        let value = trim_field(value);

        // Length in UTF-16 units, as the browser reports it.
        if let Some(min) = self.min_length {
            if value.encode_utf16().count() < min {
                return Err(self.error);
            }
        }

        if let Some(pattern) = self.pattern {
            if !pattern.is_match(value) {
                return Err(self.error);
            }
        }

        Ok(())
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.validate(value).is_ok()
    }
}

/// Trim the way browsers do: Unicode whitespace plus the byte order mark.
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_RULES.is_valid(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RULES.is_valid(value)
}

pub fn is_valid_message(value: &str) -> bool {
    MESSAGE_RULES.is_valid(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  first.last@mail.example.org  "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_name_boundary() {
        assert!(is_valid_name("Al"));
        assert!(!is_valid_name("A"));
        assert!(!is_valid_name("  A  "));
        assert!(!is_valid_name(""));
        assert!(is_valid_name("Zoë"));
    }

    #[test]
    fn test_message_boundary() {
        assert!(is_valid_message("1234567890"));
        assert!(!is_valid_message("123456789"));
        assert!(!is_valid_message("   123456789   "));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(NAME_RULES.validate("x"), Err("Name must be at least 2 characters long"));
        assert_eq!(EMAIL_RULES.validate("x"), Err("Please enter a valid email address"));
        assert_eq!(
            MESSAGE_RULES.validate("x"),
            Err("Message must be at least 10 characters long")
        );
        assert_eq!(NAME_RULES.validate("Al"), Ok(()));
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(trim_field("\u{FEFF} Al \u{FEFF}"), "Al");
        assert!(!is_valid_name("\u{FEFF}A"));
        assert!(!is_valid_email("a\u{FEFF}b@c.co"));
        assert!(is_valid_email("\u{FEFF}a@b.co"));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // One astral character is two UTF-16 units.
        assert!(is_valid_name("😀"));
        assert!(!is_valid_name("é"));
        assert!(is_valid_message("😀😀😀😀😀"));
        assert!(!is_valid_message("😀😀😀😀é"));
    }
}
