//! Common regex patterns for job description extraction.
//!
//! All patterns run against lowercased text. `regex` is Unicode-aware by
//! default, so `\b` treats Vietnamese letters with diacritics as word
//! characters.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Amount literal with an optional fused suffix: "30tr", "2,5m", "300k"
    pub static ref AMOUNT_TOKEN: Regex = Regex::new(
        r"^(\d+(?:[.,]\d+)?)([a-zà-ỹ]*)"
    ).unwrap();

    // Bare magnitude with a Vietnamese suffix and no currency symbol
    pub static ref MAGNITUDE_SUFFIX: Regex = Regex::new(
        r"\b\d+\s*(?:m|tr|triệu|k|nghìn|ngàn|tỷ|ty)\b"
    ).unwrap();

    // Experience ranges: "3-5 năm", "03–08 năm", "from 3 to 5 years"
    pub static ref EXP_RANGE: Regex = Regex::new(
        r"(\d+)\s*[-–]\s*(\d+)\s*(?:năm|years)\b"
    ).unwrap();

    pub static ref EXP_FROM_TO: Regex = Regex::new(
        r"(?:from|từ)\s*(\d+)\s*(?:to|đến|-|–)\s*(\d+)\s*(?:năm|years)\b"
    ).unwrap();

    // "5+ years", "3+ năm", "over 5+ years"
    pub static ref EXP_PLUS: Regex = Regex::new(
        r"(?:more than|over|>\s*)?(\d+)\s*\+\s*(?:years|năm)\b"
    ).unwrap();

    pub static ref EXP_MORE_THAN: Regex = Regex::new(
        r"(?:more than|over)\s*(\d+)\s*(?:years|năm)\b"
    ).unwrap();

    pub static ref EXP_AT_LEAST: Regex = Regex::new(
        r"(?:ít nhất|tối thiểu|at least)\s*(\d+)\s*(?:năm|years)\b"
    ).unwrap();

    // "at least 1 year experience with ...", with or without diacritics
    pub static ref EXP_AT_LEAST_EXPERIENCE: Regex = Regex::new(
        r"(?:at\s*least|ít\s*nhất|it\s*nhat|tối\s*thiểu|toi\s*thieu)\s*(\d+)\s*(?:year|years|năm)\s*(?:of\s+)?(?:experience|exp)"
    ).unwrap();

    // "from 2 year of experience ..." without a "to" bound
    pub static ref EXP_FROM_EXPERIENCE: Regex = Regex::new(
        r"\bfrom\s*(\d+)\s*(?:year|years|năm)\s*(?:of\s+)?(?:experience|exp)"
    ).unwrap();

    pub static ref EXP_SINGLE: Regex = Regex::new(
        r"\b(\d+)\s*(?:năm|years)\b"
    ).unwrap();

    // USD literals, 2-5 digits to skip phone numbers and dates
    pub static ref USD_DOLLAR_PREFIX: Regex = Regex::new(
        r"\$\s*(\d{2,5})\b"
    ).unwrap();

    pub static ref USD_DOLLAR_SUFFIX: Regex = Regex::new(
        r"\b(\d{2,5})\s*\$"
    ).unwrap();

    pub static ref USD_CODE_SUFFIX: Regex = Regex::new(
        r"\b(\d{2,5})\s*usd\b"
    ).unwrap();

    pub static ref USD_CODE_PREFIX: Regex = Regex::new(
        r"\busd\s*(\d{2,5})\b"
    ).unwrap();

    pub static ref USD_APPROX: Regex = Regex::new(
        r"~\s*\$?\s*(\d{2,5})\b"
    ).unwrap();

    // "upto $2500", "lên đến 2000 usd"
    pub static ref USD_UP_TO: Regex = Regex::new(
        r"(?:up\s*to|upto|đến|len\s*den|lên\s*đến)\s*(?:\$\s*(\d{2,5})\b|(\d{2,5})\s*(?:usd\b|\$))"
    ).unwrap();

    // "1200 - 1500 usd", unit only after the upper bound
    pub static ref USD_RANGE: Regex = Regex::new(
        r"\b(\d{2,5})\s*[-–]\s*(\d{2,5})\s*(?:usd\b|\$)"
    ).unwrap();

    // VND amounts in millions
    pub static ref VND_RANGE: Regex = Regex::new(
        r"\b(\d+(?:[.,]\d+)?)\s*[-–]\s*(\d+(?:[.,]\d+)?)\s*(?:m|tr|triệu|trieu)\b"
    ).unwrap();

    pub static ref VND_UP_TO: Regex = Regex::new(
        r"(?:up\s*to|upto|đến|len\s*den|lên\s*đến)\s*(\d+(?:[.,]\d+)?)\s*(?:m|tr|triệu|trieu)\b"
    ).unwrap();

    pub static ref VND_SINGLE: Regex = Regex::new(
        r"\b(\d+(?:[.,]\d+)?)\s*(?:m|tr|triệu|trieu)\b"
    ).unwrap();

    // Seniority keywords
    pub static ref LEVEL_FRESHER: Regex = Regex::new(r"\bfresher\b").unwrap();
    pub static ref LEVEL_JUNIOR: Regex = Regex::new(r"\bjunior\b").unwrap();
    pub static ref LEVEL_MID: Regex = Regex::new(r"\bmid(?:-level)?\b").unwrap();
    pub static ref LEVEL_SENIOR: Regex = Regex::new(r"\bsenior\b").unwrap();
    pub static ref LEVEL_LEAD: Regex = Regex::new(
        r"\b(?:team\s*lead|tech\s*lead|lead)\b"
    ).unwrap();
    pub static ref LEVEL_ARCHITECT: Regex = Regex::new(
        r"\b(?:solution|technical|software)\s+architect\b"
    ).unwrap();
    pub static ref LEVEL_MANAGER: Regex = Regex::new(
        r"\b(?:manager|leader|project\s*manager)\b"
    ).unwrap();
    pub static ref LEVEL_DIRECTOR: Regex = Regex::new(r"\bdirector\b").unwrap();

    // Spoken language indicators
    pub static ref LANG_ENGLISH: Regex = Regex::new(
        r"\b(?:english|tiếng anh|en)\b"
    ).unwrap();
    pub static ref LANG_JAPANESE: Regex = Regex::new(
        r"\b(?:japanese|tiếng nhật|jp)\b"
    ).unwrap();
    // JLPT levels
    pub static ref LANG_JLPT: Regex = Regex::new(r"\b(?:n1|n2|n3)\b").unwrap();
    pub static ref LANG_KOREAN: Regex = Regex::new(
        r"\b(?:korean|tiếng hàn)\b"
    ).unwrap();
    pub static ref LANG_CHINESE: Regex = Regex::new(
        r"\b(?:chinese|mandarin|tiếng trung)\b"
    ).unwrap();
}
