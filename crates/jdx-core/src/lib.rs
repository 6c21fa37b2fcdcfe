//! Core library for job description field extraction.
//!
//! This crate provides:
//! - Rule-based extractors for Vietnamese/English job postings
//!   (experience, salary, skills, seniority, required languages)
//! - Amount normalisation and currency detection helpers
//! - Text cleaning for raw posting text
//! - Posting data models and configuration

pub mod error;
pub mod extract;
pub mod models;
pub mod text;

pub use error::{JdxError, Result};
pub use extract::{
    ExperienceExtractor, FieldExtractor, JobPostingParser, LanguageExtractor, SalaryExtractor,
    SeniorityExtractor, SkillExtractor,
};
pub use models::config::{ConfigKey, JdxConfig};
pub use models::posting::{CurrencyCode, JobFields, LanguageCode, RequiredLanguages, SeniorityLevel};
pub use text::{clean_and_lower, clean_text};
