//! Years-of-experience extraction.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use super::patterns::{
    EXP_AT_LEAST, EXP_AT_LEAST_EXPERIENCE, EXP_FROM_EXPERIENCE, EXP_FROM_TO, EXP_MORE_THAN,
    EXP_PLUS, EXP_RANGE, EXP_SINGLE,
};
use super::{ExtractionMatch, FieldExtractor, parse_number};

/// How a matched experience rule turns its captures into years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Two bounds, reported as their mean.
    Range,
    /// A floor, reported as the lower bound.
    AtLeast,
    /// A single stated number.
    Single,
}

impl RuleKind {
    fn years(&self, caps: &Captures<'_>) -> Option<f64> {
        match self {
            RuleKind::Range => {
                let low: f64 = parse_number(&caps[1])?;
                let high: f64 = parse_number(&caps[2])?;
                Some((low + high) / 2.0)
            }
            RuleKind::AtLeast | RuleKind::Single => parse_number(&caps[1]),
        }
    }
}

/// One entry of the ordered experience rule list.
pub struct ExperienceRule {
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub kind: RuleKind,
}

impl ExperienceRule {
    /// Apply this rule alone to lowercased text.
    pub fn apply(&self, text: &str) -> Option<ExtractionMatch<f64>> {
        let caps = self.pattern.captures(text)?;
        let years = self.kind.years(&caps)?;
        let full_match = caps.get(0)?;
        Some(
            ExtractionMatch::new(years, self.name)
                .with_position(full_match.start(), full_match.end()),
        )
    }
}

lazy_static! {
    /// Experience rules in priority order. The first rule matching anywhere wins.
    pub static ref EXPERIENCE_RULES: Vec<ExperienceRule> = vec![
        ExperienceRule { name: "range", pattern: &*EXP_RANGE, kind: RuleKind::Range },
        ExperienceRule { name: "from_to", pattern: &*EXP_FROM_TO, kind: RuleKind::Range },
        ExperienceRule { name: "plus", pattern: &*EXP_PLUS, kind: RuleKind::AtLeast },
        ExperienceRule { name: "more_than", pattern: &*EXP_MORE_THAN, kind: RuleKind::AtLeast },
        ExperienceRule { name: "at_least", pattern: &*EXP_AT_LEAST, kind: RuleKind::AtLeast },
        ExperienceRule {
            name: "at_least_experience",
            pattern: &*EXP_AT_LEAST_EXPERIENCE,
            kind: RuleKind::AtLeast,
        },
        ExperienceRule {
            name: "from_experience",
            pattern: &*EXP_FROM_EXPERIENCE,
            kind: RuleKind::AtLeast,
        },
        ExperienceRule { name: "single", pattern: &*EXP_SINGLE, kind: RuleKind::Single },
    ];
}

/// Years-of-experience extractor.
pub struct ExperienceExtractor;

impl ExperienceExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Run the rule list and report which rule produced the value.
    pub fn extract_match(&self, text: &str) -> Option<ExtractionMatch<f64>> {
        if text.trim().is_empty() {
            return None;
        }
        let lowered = text.to_lowercase();

        let found = EXPERIENCE_RULES.iter().find_map(|rule| rule.apply(&lowered));
        if let Some(m) = &found {
            debug!("Experience rule '{}' matched: {} years", m.rule, m.value);
        }
        found
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ExperienceExtractor {
    type Output = Option<f64>;

    fn no_match(&self) -> Self::Output {
        None
    }

    fn extract_lowered(&self, text: &str) -> Self::Output {
        self.extract_match(text).map(|m| m.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static ExperienceRule {
        EXPERIENCE_RULES.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_range_is_averaged() {
        let extractor = ExperienceExtractor::new();
        assert_eq!(extractor.extract("3-5 năm"), Some(4.0));
        assert_eq!(extractor.extract("03–08 năm kinh nghiệm"), Some(5.5));
        assert_eq!(extractor.extract("From 3 to 5 years"), Some(4.0));
        assert_eq!(extractor.extract("từ 2 đến 3 năm"), Some(2.5));
    }

    #[test]
    fn test_floor_phrasing() {
        let extractor = ExperienceExtractor::new();
        assert_eq!(extractor.extract("5+ years"), Some(5.0));
        assert_eq!(extractor.extract("more than 3 years in backend"), Some(3.0));
        assert_eq!(extractor.extract("Tối thiểu 2 năm"), Some(2.0));
        assert_eq!(
            extractor.extract("at least 1 year experience with Python"),
            Some(1.0)
        );
        assert_eq!(
            extractor.extract("From 2 year of experience in Java"),
            Some(2.0)
        );
    }

    #[test]
    fn test_single() {
        let extractor = ExperienceExtractor::new();
        assert_eq!(extractor.extract("5 years experience required"), Some(5.0));
        assert_eq!(extractor.extract("Có 2 năm kinh nghiệm"), Some(2.0));
    }

    #[test]
    fn test_no_match() {
        let extractor = ExperienceExtractor::new();
        assert_eq!(extractor.extract("no mention"), None);
        assert_eq!(extractor.extract(""), None);
        assert_eq!(extractor.extract_opt(None), None);
        // "year" alone is only accepted inside an experience sentence
        assert_eq!(extractor.extract("1 year contract"), None);
    }

    #[test]
    fn test_first_rule_wins() {
        let extractor = ExperienceExtractor::new();

        // The range rule outranks a later bare number.
        let m = extractor.extract_match("10 years company, need 2-4 years").unwrap();
        assert_eq!(m.rule, "range");
        assert_eq!(m.value, 3.0);

        // A floor outranks a bare number appearing earlier in the text.
        let m = extractor.extract_match("founded 20 years ago, 3+ years python").unwrap();
        assert_eq!(m.rule, "plus");
        assert_eq!(m.value, 3.0);
    }

    #[test]
    fn test_rules_in_isolation() {
        assert!(rule("range").apply("3-5 năm").is_some());
        assert!(rule("from_to").apply("3-5 năm").is_none());
        assert!(rule("at_least").apply("at least 4 years").is_some());
        assert!(rule("at_least").apply("at least 1 year experience").is_none());
        assert!(rule("at_least_experience").apply("at least 1 year experience").is_some());
        assert!(rule("single").apply("năm 2024").is_none());
    }

    #[test]
    fn test_match_position() {
        let extractor = ExperienceExtractor::new();
        let m = extractor.extract_match("Yêu cầu 3 năm").unwrap();
        let (start, end) = m.position.unwrap();
        assert_eq!(&"yêu cầu 3 năm"[start..end], "3 năm");
    }

    #[test]
    fn test_non_ascii_digits() {
        let extractor = ExperienceExtractor::new();
        assert_eq!(extractor.extract("٣ năm, 2 năm"), Some(3.0));
        assert_eq!(extractor.extract("３-５ years"), Some(4.0));
    }

    #[test]
    fn test_deterministic() {
        let extractor = ExperienceExtractor::new();
        let text = "Ít nhất 3 năm kinh nghiệm";
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }
}
