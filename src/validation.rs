//! Form Validation
//!
//! Client-side checks are intentionally shallow: required fields must be
//! non-blank, and a new password must meet the minimum length. Everything
//! else is the service's call.

pub const MIN_PASSWORD_LEN: usize = 6;

/// Inline error text for a blank required field; empty string when valid.
pub fn require(value: &str, field: &str) -> String {
    if value.trim().is_empty() {
        format!("{field} is required")
    } else {
        String::new()
    }
}

/// Error text for the reset-password rules; empty string when valid.
pub fn password_rule_error(new_password: &str, confirm: &str) -> String {
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        "Password must be at least 6 characters.".to_string()
    } else if new_password != confirm {
        "Passwords do not match.".to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_field_yields_inline_error() {
        assert_eq!(require("", "Email"), "Email is required");
        assert_eq!(require("   ", "Password"), "Password is required");
        assert_eq!(require("a@b.com", "Email"), "");
    }

    #[test]
    fn password_must_be_long_enough() {
        assert_eq!(
            password_rule_error("short", "short"),
            "Password must be at least 6 characters."
        );
        assert_eq!(password_rule_error("secret", "secret"), "");
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Five characters, ten bytes
        assert_eq!(
            password_rule_error("ñññññ", "ñññññ"),
            "Password must be at least 6 characters."
        );
        assert_eq!(password_rule_error("ññññññ", "ññññññ"), "");
    }

    #[test]
    fn passwords_must_match() {
        assert_eq!(
            password_rule_error("secret1", "secret2"),
            "Passwords do not match."
        );
    }
}
