//! Rule-based field extractors for Vietnamese/English job descriptions.

use std::borrow::Cow;
use std::str::FromStr;

pub mod amounts;
pub mod currency;
pub mod experience;
pub mod language;
mod parser;
pub mod patterns;
pub mod salary;
pub mod seniority;
pub mod skills;

pub use amounts::{normalize_amount, suffix_multiplier};
pub use currency::classify_currency;
pub use experience::{ExperienceExtractor, ExperienceRule, RuleKind};
pub use language::LanguageExtractor;
pub use parser::JobPostingParser;
pub use salary::{SalaryCandidate, SalaryExtractor, SalaryFamily};
pub use seniority::SeniorityExtractor;
pub use skills::{SKILL_VOCABULARY, SkillExtractor};

/// Trait for field extractors.
///
/// Extractors are total: absent or blank input yields [`FieldExtractor::no_match`]
/// and nothing ever panics or errors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Value reported when nothing matches.
    fn no_match(&self) -> Self::Output;

    /// Extract from text that is already lowercased.
    fn extract_lowered(&self, text: &str) -> Self::Output;

    /// Extract the field from raw text.
    fn extract(&self, text: &str) -> Self::Output {
        if text.trim().is_empty() {
            return self.no_match();
        }
        self.extract_lowered(&text.to_lowercase())
    }

    /// Extract the field from a possibly absent value.
    fn extract_opt(&self, text: Option<&str>) -> Self::Output {
        match text {
            Some(text) => self.extract(text),
            None => self.no_match(),
        }
    }
}

/// A value together with the rule that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Name of the rule that matched.
    pub rule: &'static str,
    /// Byte range of the match in the lowercased text.
    pub position: Option<(usize, usize)>,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, rule: &'static str) -> Self {
        Self {
            value,
            rule,
            position: None,
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// First code point of every run of ten Unicode decimal digits (`\p{Nd}`).
///
/// `\d` in the patterns is Unicode-aware, so captures may hold digits such as
/// "٣" or "２" that `str::parse` rejects.
const DIGIT_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0,
    0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0,
    0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    let code = u32::from(c);
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .and_then(|&zero| char::from_digit(code - zero, 10))
}

/// Rewrite decimal digits from any script as ASCII digits.
pub(crate) fn ascii_digits(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().map(|c| ascii_digit(c).unwrap_or(c)).collect())
}

/// Parse a captured number, accepting digits from any script.
pub(crate) fn parse_number<T: FromStr>(s: &str) -> Option<T> {
    ascii_digits(s).parse().ok()
}

/// Parse a decimal literal that may use `,` as the decimal separator.
pub(crate) fn parse_decimal(s: &str) -> Option<f64> {
    ascii_digits(s).replace(',', ".").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_digits() {
        assert_eq!(ascii_digits("2500"), "2500");
        assert_eq!(ascii_digits("２５００"), "2500");
        assert_eq!(ascii_digits("٣"), "3");
        assert_eq!(ascii_digits("१०"), "10");
        assert_eq!(ascii_digits("3 năm"), "3 năm");
    }

    #[test]
    fn test_parse_number_any_script() {
        assert_eq!(parse_number::<i64>("２５００"), Some(2500));
        assert_eq!(parse_number::<f64>("٣"), Some(3.0));
        assert_eq!(parse_number::<i64>("x1"), None);
        assert_eq!(parse_decimal("２,５"), Some(2.5));
    }
}
