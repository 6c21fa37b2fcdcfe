//! Job posting parser combining all field extractors.

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::posting::JobFields;
use crate::text::clean_text;

use super::{
    ExperienceExtractor, FieldExtractor, LanguageExtractor, SalaryExtractor, SeniorityExtractor,
    SkillExtractor,
};

/// Runs every extractor over one job description.
///
/// The parser holds no per-call state, so one instance can be shared across
/// threads.
pub struct JobPostingParser {
    experience: ExperienceExtractor,
    salary: SalaryExtractor,
    skills: SkillExtractor,
    seniority: SeniorityExtractor,
    languages: LanguageExtractor,
    /// Normalise whitespace before extraction.
    clean_input: bool,
}

impl JobPostingParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            experience: ExperienceExtractor::new(),
            salary: SalaryExtractor::new(),
            skills: SkillExtractor::new(),
            seniority: SeniorityExtractor::new(),
            languages: LanguageExtractor::new(),
            clean_input: true,
        }
    }

    /// Create a parser from the extraction section of the config.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_vnd_per_usd(config.vnd_per_usd)
            .with_cleaning(config.clean_input)
    }

    /// Set the VND to USD conversion rate.
    pub fn with_vnd_per_usd(mut self, vnd_per_usd: u32) -> Self {
        self.salary = self.salary.with_vnd_per_usd(vnd_per_usd);
        self
    }

    /// Set whether whitespace is normalised before extraction.
    pub fn with_cleaning(mut self, clean_input: bool) -> Self {
        self.clean_input = clean_input;
        self
    }

    pub fn vnd_per_usd(&self) -> u32 {
        self.salary.vnd_per_usd()
    }

    pub fn clean_input(&self) -> bool {
        self.clean_input
    }

    /// The lowercased text every extractor sees, cleaned when cleaning is on.
    pub fn prepare(&self, text: &str) -> String {
        if self.clean_input {
            clean_text(Some(text)).to_lowercase()
        } else {
            text.to_lowercase()
        }
    }

    /// Extract all fields from a job description.
    pub fn parse(&self, text: &str) -> JobFields {
        let lowered = self.prepare(text);

        if lowered.trim().is_empty() {
            debug!("Empty job description, reporting defaults");
            return JobFields::default();
        }

        info!("Parsing job description from {} characters of text", lowered.len());

        let fields = JobFields {
            years_experience: self.experience.extract_lowered(&lowered),
            salary_usd: self.salary.extract_lowered(&lowered),
            skills: self.skills.extract_lowered(&lowered),
            level: self.seniority.extract_lowered(&lowered),
            languages: self.languages.extract_lowered(&lowered),
        };

        debug!(
            "Extracted level={} years={:?} salary={:?} skills={} languages={}",
            fields.level,
            fields.years_experience,
            fields.salary_usd,
            fields.skills.len(),
            fields.languages
        );

        fields
    }

    /// Extract all fields from a possibly absent value.
    pub fn parse_opt(&self, text: Option<&str>) -> JobFields {
        match text {
            Some(text) => self.parse(text),
            None => JobFields::default(),
        }
    }
}

impl Default for JobPostingParser {
    fn default() -> Self {
        Self::new()
    }
}
