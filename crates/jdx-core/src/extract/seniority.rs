//! Seniority level classification.

use regex::Regex;
use tracing::debug;

use crate::models::posting::SeniorityLevel;

use super::experience::ExperienceExtractor;
use super::patterns::{
    LEVEL_ARCHITECT, LEVEL_DIRECTOR, LEVEL_FRESHER, LEVEL_JUNIOR, LEVEL_LEAD, LEVEL_MANAGER,
    LEVEL_MID, LEVEL_SENIOR,
};
use super::{ExtractionMatch, FieldExtractor};

/// Rule name reported when the level was inferred from experience.
pub const EXPERIENCE_FALLBACK_RULE: &str = "experience";

/// Keyword rules in priority order; the first match wins.
fn level_rules() -> [(&'static Regex, SeniorityLevel); 8] {
    [
        (&*LEVEL_FRESHER, SeniorityLevel::Fresher),
        (&*LEVEL_JUNIOR, SeniorityLevel::Junior),
        (&*LEVEL_MID, SeniorityLevel::Mid),
        (&*LEVEL_SENIOR, SeniorityLevel::Senior),
        (&*LEVEL_LEAD, SeniorityLevel::Lead),
        (&*LEVEL_ARCHITECT, SeniorityLevel::Architect),
        (&*LEVEL_MANAGER, SeniorityLevel::Manager),
        (&*LEVEL_DIRECTOR, SeniorityLevel::Director),
    ]
}

/// Seniority extractor.
///
/// Explicit level keywords take precedence; otherwise the level is inferred
/// from the years of experience the text asks for.
pub struct SeniorityExtractor {
    experience: ExperienceExtractor,
}

impl SeniorityExtractor {
    pub fn new() -> Self {
        Self {
            experience: ExperienceExtractor::new(),
        }
    }

    /// Classify and report the keyword (or the experience fallback) that decided.
    pub fn extract_match(&self, text: &str) -> Option<ExtractionMatch<SeniorityLevel>> {
        if text.trim().is_empty() {
            return None;
        }
        let lowered = text.to_lowercase();

        for (pattern, level) in level_rules() {
            if let Some(m) = pattern.find(&lowered) {
                debug!("Seniority keyword '{}' matched", m.as_str());
                return Some(
                    ExtractionMatch::new(level, level.as_str()).with_position(m.start(), m.end()),
                );
            }
        }

        self.experience.extract_match(&lowered).map(|years| {
            let level = SeniorityLevel::from_years(years.value);
            debug!("Seniority inferred from {} years: {}", years.value, level);
            let m = ExtractionMatch::new(level, EXPERIENCE_FALLBACK_RULE);
            match years.position {
                Some((start, end)) => m.with_position(start, end),
                None => m,
            }
        })
    }
}

impl Default for SeniorityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SeniorityExtractor {
    type Output = SeniorityLevel;

    fn no_match(&self) -> Self::Output {
        SeniorityLevel::Unknown
    }

    fn extract_lowered(&self, text: &str) -> Self::Output {
        self.extract_match(text)
            .map(|m| m.value)
            .unwrap_or(SeniorityLevel::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        let extractor = SeniorityExtractor::new();
        assert_eq!(extractor.extract("Senior Backend Engineer"), SeniorityLevel::Senior);
        assert_eq!(extractor.extract("Fresher PHP"), SeniorityLevel::Fresher);
        assert_eq!(extractor.extract("Mid-level QA"), SeniorityLevel::Mid);
        assert_eq!(extractor.extract("Tech Lead (Java)"), SeniorityLevel::Lead);
        assert_eq!(extractor.extract("Solution Architect"), SeniorityLevel::Architect);
        assert_eq!(extractor.extract("Project Manager"), SeniorityLevel::Manager);
        assert_eq!(extractor.extract("Engineering Director"), SeniorityLevel::Director);
    }

    #[test]
    fn test_priority_order() {
        let extractor = SeniorityExtractor::new();
        // Junior is listed before senior, regardless of position in the text.
        assert_eq!(
            extractor.extract("Senior or Junior Developer"),
            SeniorityLevel::Junior
        );
        // "leader" is a manager keyword, not a lead one.
        assert_eq!(extractor.extract("Team leader"), SeniorityLevel::Manager);
        // A senior architect is still senior.
        assert_eq!(
            extractor.extract("Senior Software Architect"),
            SeniorityLevel::Senior
        );
    }

    #[test]
    fn test_experience_fallback() {
        let extractor = SeniorityExtractor::new();
        assert_eq!(
            extractor.extract("5 years experience required"),
            SeniorityLevel::Senior
        );
        assert_eq!(extractor.extract("1-2 năm kinh nghiệm"), SeniorityLevel::Junior);
        assert_eq!(extractor.extract("3+ years Golang"), SeniorityLevel::Mid);
        assert_eq!(extractor.extract("10 years in banking"), SeniorityLevel::Lead);

        let m = extractor.extract_match("2-4 years").unwrap();
        assert_eq!(m.rule, EXPERIENCE_FALLBACK_RULE);
        assert_eq!(m.value, SeniorityLevel::Mid);
    }

    #[test]
    fn test_unknown() {
        let extractor = SeniorityExtractor::new();
        assert_eq!(extractor.extract(""), SeniorityLevel::Unknown);
        assert_eq!(extractor.extract_opt(None), SeniorityLevel::Unknown);
        assert_eq!(extractor.extract("Backend Engineer"), SeniorityLevel::Unknown);
    }
}
