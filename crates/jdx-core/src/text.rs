//! Text cleaning applied to raw posting text before extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Replace newlines with spaces, collapse whitespace runs and trim.
///
/// Absent input cleans to an empty string.
pub fn clean_text(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let flattened = text.replace('\n', " ");
    WHITESPACE_RUN.replace_all(&flattened, " ").trim().to_string()
}

/// Lowercase, then clean. This is the column pass used before batch extraction.
pub fn clean_and_lower(text: Option<&str>) -> String {
    clean_text(text.map(str::to_lowercase).as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(
            clean_text(Some("  Senior\nJava   Developer\t\r\n ")),
            "Senior Java Developer"
        );
    }

    #[test]
    fn test_clean_text_absent() {
        assert_eq!(clean_text(None), "");
        assert_eq!(clean_text(Some("   \n ")), "");
    }

    #[test]
    fn test_clean_and_lower() {
        assert_eq!(
            clean_and_lower(Some("Lương  UPTO\n30TR")),
            "lương upto 30tr"
        );
    }
}
