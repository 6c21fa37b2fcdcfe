//! Required spoken-language detection.

use regex::Regex;

use crate::models::posting::{LanguageCode, RequiredLanguages};

use super::patterns::{LANG_CHINESE, LANG_ENGLISH, LANG_JAPANESE, LANG_JLPT, LANG_KOREAN};
use super::FieldExtractor;

/// Indicator patterns per language. Every pattern is checked.
fn language_rules() -> [(&'static Regex, LanguageCode); 5] {
    [
        (&*LANG_ENGLISH, LanguageCode::En),
        (&*LANG_JAPANESE, LanguageCode::Ja),
        (&*LANG_JLPT, LanguageCode::Ja),
        (&*LANG_KOREAN, LanguageCode::Ko),
        (&*LANG_CHINESE, LanguageCode::Zh),
    ]
}

/// Required language extractor.
///
/// Produces the sorted, comma-joined codes of every language mentioned, or
/// `"vi"` when the posting names no foreign language.
pub struct LanguageExtractor;

impl LanguageExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Detect the set of required languages, matching case-insensitively.
    pub fn detect(&self, text: &str) -> RequiredLanguages {
        self.detect_lowered(&text.to_lowercase())
    }

    fn detect_lowered(&self, text: &str) -> RequiredLanguages {
        language_rules()
            .into_iter()
            .filter(|(pattern, _)| pattern.is_match(text))
            .map(|(_, code)| code)
            .collect()
    }
}

impl Default for LanguageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LanguageExtractor {
    type Output = String;

    fn no_match(&self) -> Self::Output {
        RequiredLanguages::new().to_string()
    }

    fn extract_lowered(&self, text: &str) -> Self::Output {
        self.detect_lowered(text).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_languages() {
        let extractor = LanguageExtractor::new();
        assert_eq!(
            extractor.extract("Must speak English and Japanese (N2)"),
            "en,ja"
        );
        assert_eq!(
            extractor.extract("Tiếng Trung hoặc tiếng Hàn, biết tiếng Anh là lợi thế"),
            "en,ko,zh"
        );
    }

    #[test]
    fn test_jlpt_implies_japanese() {
        let extractor = LanguageExtractor::new();
        assert_eq!(extractor.extract("Yêu cầu JLPT N3 trở lên"), "ja");
        assert_eq!(extractor.extract("Communicate with JP customers"), "ja");
    }

    #[test]
    fn test_standalone_tokens_only() {
        let extractor = LanguageExtractor::new();
        // "en" and "jp" must be whole tokens.
        assert_eq!(extractor.extract("Frontend engineer, jpeg pipeline"), "vi");
        assert_eq!(extractor.extract("Docs in EN"), "en");
    }

    #[test]
    fn test_default_vietnamese() {
        let extractor = LanguageExtractor::new();
        assert_eq!(extractor.extract(""), "vi");
        assert_eq!(extractor.extract_opt(None), "vi");
        assert_eq!(extractor.extract("Môi trường năng động"), "vi");
    }

    #[test]
    fn test_detect_ignores_case() {
        let extractor = LanguageExtractor::new();
        assert_eq!(extractor.detect("Must speak English").to_string(), "en");
        assert!(extractor.detect("TIẾNG NHẬT N2").contains(LanguageCode::Ja));
    }

    #[test]
    fn test_detect_set() {
        let extractor = LanguageExtractor::new();
        let langs = extractor.detect("mandarin speakers welcome");
        assert!(langs.contains(LanguageCode::Zh));
        assert!(!langs.contains(LanguageCode::En));
    }
}
