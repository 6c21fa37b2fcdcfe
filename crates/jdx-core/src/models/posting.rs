//! Value types produced by the job posting extractors.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Currency inferred from indicator tokens in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Vnd,
    Jpy,
    Unknown,
}

impl CurrencyCode {
    /// ISO-style code.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Vnd => "VND",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Seniority level of a position.
///
/// Variants are declared in rank order, so `Ord` compares seniority.
/// `Unknown` sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeniorityLevel {
    Fresher,
    Junior,
    Mid,
    Senior,
    Lead,
    Architect,
    Manager,
    Director,
    #[default]
    Unknown,
}

impl SeniorityLevel {
    /// All known levels in rank order.
    pub const RANKED: [SeniorityLevel; 8] = [
        SeniorityLevel::Fresher,
        SeniorityLevel::Junior,
        SeniorityLevel::Mid,
        SeniorityLevel::Senior,
        SeniorityLevel::Lead,
        SeniorityLevel::Architect,
        SeniorityLevel::Manager,
        SeniorityLevel::Director,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeniorityLevel::Fresher => "fresher",
            SeniorityLevel::Junior => "junior",
            SeniorityLevel::Mid => "mid",
            SeniorityLevel::Senior => "senior",
            SeniorityLevel::Lead => "lead",
            SeniorityLevel::Architect => "architect",
            SeniorityLevel::Manager => "manager",
            SeniorityLevel::Director => "director",
            SeniorityLevel::Unknown => "unknown",
        }
    }

    /// Infer a level from years of experience.
    pub fn from_years(years: f64) -> Self {
        if years < 2.0 {
            SeniorityLevel::Junior
        } else if years < 4.0 {
            SeniorityLevel::Mid
        } else if years < 7.0 {
            SeniorityLevel::Senior
        } else {
            SeniorityLevel::Lead
        }
    }
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeniorityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "unknown" {
            return Ok(SeniorityLevel::Unknown);
        }
        SeniorityLevel::RANKED
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown seniority level: {}", s))
    }
}

/// Spoken language a posting may require.
///
/// Declared in code order so sets of codes sort alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Ja,
    Ko,
    Vi,
    Zh,
}

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Ja => "ja",
            LanguageCode::Ko => "ko",
            LanguageCode::Vi => "vi",
            LanguageCode::Zh => "zh",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of languages required by a posting.
///
/// An empty set means no explicit foreign-language requirement and renders
/// as Vietnamese.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredLanguages(BTreeSet<LanguageCode>);

impl RequiredLanguages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: LanguageCode) {
        self.0.insert(code);
    }

    pub fn contains(&self, code: LanguageCode) -> bool {
        self.0.contains(&code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Codes in sorted order, defaulting to Vietnamese when none were found.
    pub fn codes(&self) -> Vec<LanguageCode> {
        if self.0.is_empty() {
            vec![LanguageCode::Vi]
        } else {
            self.0.iter().copied().collect()
        }
    }
}

impl fmt::Display for RequiredLanguages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.codes().iter().map(LanguageCode::as_str).collect();
        f.write_str(&joined.join(","))
    }
}

impl FromIterator<LanguageCode> for RequiredLanguages {
    fn from_iter<I: IntoIterator<Item = LanguageCode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// All fields extracted from a single job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFields {
    /// Years of experience asked for.
    pub years_experience: Option<f64>,

    /// Highest implied monthly salary in USD.
    pub salary_usd: Option<i64>,

    /// Matched skill vocabulary entries, sorted.
    pub skills: Vec<String>,

    /// Seniority level.
    pub level: SeniorityLevel,

    /// Comma-joined language codes, e.g. "en,ja" or "vi".
    pub languages: String,
}

impl Default for JobFields {
    fn default() -> Self {
        Self {
            years_experience: None,
            salary_usd: None,
            skills: Vec::new(),
            level: SeniorityLevel::Unknown,
            languages: LanguageCode::Vi.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_rank_order() {
        assert!(SeniorityLevel::Fresher < SeniorityLevel::Junior);
        assert!(SeniorityLevel::Senior < SeniorityLevel::Lead);
        assert!(SeniorityLevel::Manager < SeniorityLevel::Director);
    }

    #[test]
    fn test_seniority_from_years() {
        assert_eq!(SeniorityLevel::from_years(0.5), SeniorityLevel::Junior);
        assert_eq!(SeniorityLevel::from_years(2.0), SeniorityLevel::Mid);
        assert_eq!(SeniorityLevel::from_years(3.9), SeniorityLevel::Mid);
        assert_eq!(SeniorityLevel::from_years(4.0), SeniorityLevel::Senior);
        assert_eq!(SeniorityLevel::from_years(7.0), SeniorityLevel::Lead);
    }

    #[test]
    fn test_seniority_parse() {
        assert_eq!("Senior".parse::<SeniorityLevel>(), Ok(SeniorityLevel::Senior));
        assert_eq!("unknown".parse::<SeniorityLevel>(), Ok(SeniorityLevel::Unknown));
        assert!("intern".parse::<SeniorityLevel>().is_err());
    }

    #[test]
    fn test_seniority_serde() {
        let json = serde_json::to_string(&SeniorityLevel::Architect).unwrap();
        assert_eq!(json, r#""architect""#);
    }

    #[test]
    fn test_required_languages_display() {
        assert_eq!(RequiredLanguages::new().to_string(), "vi");

        let langs: RequiredLanguages = [LanguageCode::Ja, LanguageCode::En].into_iter().collect();
        assert_eq!(langs.to_string(), "en,ja");
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(CurrencyCode::Vnd.to_string(), "VND");
        assert_eq!(serde_json::to_string(&CurrencyCode::Usd).unwrap(), r#""USD""#);
    }
}
