//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// E.164-like pattern: optional leading '+', first digit 1-9, 8-15 digits total
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9]\d{7,14}$").unwrap()
});

/// Check if a phone number is a valid delivery target (E.164-like format)
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for log output, keeping only the last 4 digits
///
/// Callers pass unvalidated input here, so non-ASCII strings are masked
/// whole instead of being sliced on a char boundary.
pub fn mask_phone(phone: &str) -> String {
    if !phone.is_ascii() {
        return "*".repeat(phone.chars().count());
    }
    if phone.len() <= 4 {
        return "*".repeat(phone.len());
    }

    let visible = 4;
    let last_digits = &phone[phone.len() - visible..];

    if let Some(rest) = phone.strip_prefix('+') {
        format!("+{}{}", "*".repeat(rest.len() - visible), last_digits)
    } else {
        format!("{}{}", "*".repeat(phone.len() - visible), last_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+15555555555"));
        assert!(is_valid_phone("+8613812345678"));
        assert!(is_valid_phone("+442071838750"));
        assert!(is_valid_phone("61412345678")); // leading '+' is optional

        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone("")); // empty
        assert!(!is_valid_phone("+0123456789")); // first digit must be 1-9
        assert!(!is_valid_phone("+1234567")); // 7 digits, too short
        assert!(!is_valid_phone("+1234567890123456")); // 16 digits, too long
        assert!(!is_valid_phone("+1 555 555 5555")); // no separators
        assert!(!is_valid_phone("++15555555555"));
    }

    #[test]
    fn test_boundary_lengths() {
        assert!(is_valid_phone("12345678")); // 8 digits, minimum
        assert!(is_valid_phone("123456789012345")); // 15 digits, maximum
        assert!(!is_valid_phone("1234567"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+15555555555"), "+*******5555");
        assert_eq!(mask_phone("13812345678"), "*******5678");
        assert_eq!(mask_phone("123"), "***");
    }

    #[test]
    fn test_mask_phone_non_ascii_input() {
        assert_eq!(mask_phone("☎☎☎☎☎"), "*****");
    }
}
