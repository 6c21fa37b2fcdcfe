//! Data models for job posting extraction.

pub mod config;
pub mod posting;
