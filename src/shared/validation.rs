use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating recipient phone numbers
    /// Must be digits only, at least 10 of them
    /// - Valid: "081234567890", "0812345678"
    /// - Invalid: "12345", "+6281234567890", "0812-3456-7890", ""
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9]{10,}$").unwrap();

    /// Characters that cannot appear in a generated label file name
    pub static ref FILENAME_UNSAFE_REGEX: Regex = Regex::new(r#"[\\/*?:"<>|]"#).unwrap();
}

/// Replace characters that are unsafe in file names with `_`
pub fn sanitize_filename(name: &str) -> String {
    FILENAME_UNSAFE_REGEX.replace_all(name, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("081234567890"));
        assert!(PHONE_REGEX.is_match("0812345678"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("12345")); // too short
        assert!(!PHONE_REGEX.is_match("+6281234567890")); // plus sign
        assert!(!PHONE_REGEX.is_match("0812-3456-7890")); // dashes
        assert!(!PHONE_REGEX.is_match("0812 3456 7890")); // spaces
        assert!(!PHONE_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Budi"), "Budi");
        assert_eq!(sanitize_filename("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_filename(r#"x*y?"z<>|"#), "x_y__z___");
    }
}
