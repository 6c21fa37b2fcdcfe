//! Monthly salary extraction, normalised to USD.

use tracing::debug;

use crate::models::config::DEFAULT_VND_PER_USD;

use super::{parse_decimal, parse_number};
use super::patterns::{
    USD_APPROX, USD_CODE_PREFIX, USD_CODE_SUFFIX, USD_DOLLAR_PREFIX, USD_DOLLAR_SUFFIX, USD_RANGE,
    USD_UP_TO, VND_RANGE, VND_SINGLE, VND_UP_TO,
};
use super::FieldExtractor;

/// Pattern family a salary candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalaryFamily {
    /// "$N", "N$", "N usd", "usd N", "~$N".
    UsdLiteral,
    /// "up to $N", "lên đến N usd".
    UsdUpTo,
    /// "1200-1500 usd".
    UsdRange,
    /// "15-20 tr".
    VndRange,
    /// "up to 30tr".
    VndUpTo,
    /// "30 tr", "30 triệu".
    VndSingle,
}

impl SalaryFamily {
    pub fn is_vnd(&self) -> bool {
        matches!(
            self,
            SalaryFamily::VndRange | SalaryFamily::VndUpTo | SalaryFamily::VndSingle
        )
    }
}

/// One salary value found in the text, already converted to USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryCandidate {
    pub usd: i64,
    pub family: SalaryFamily,
}

/// Salary extractor.
///
/// Every pattern family is scanned independently and all hits form one
/// candidate pool; the result is the pool's maximum. Duplicates across
/// families are kept.
pub struct SalaryExtractor {
    vnd_per_usd: u32,
}

impl SalaryExtractor {
    /// Create a salary extractor with the default conversion rate.
    pub fn new() -> Self {
        Self {
            vnd_per_usd: DEFAULT_VND_PER_USD,
        }
    }

    /// Set how many VND make one USD. Zero falls back to the default.
    pub fn with_vnd_per_usd(mut self, vnd_per_usd: u32) -> Self {
        self.vnd_per_usd = if vnd_per_usd == 0 {
            DEFAULT_VND_PER_USD
        } else {
            vnd_per_usd
        };
        self
    }

    pub fn vnd_per_usd(&self) -> u32 {
        self.vnd_per_usd
    }

    /// Convert an amount in millions of VND to whole USD.
    pub fn millions_vnd_to_usd(&self, millions: f64) -> i64 {
        (millions * 1_000_000.0 / f64::from(self.vnd_per_usd)).round() as i64
    }

    /// Collect every salary candidate in the text, matching case-insensitively.
    pub fn candidates(&self, text: &str) -> Vec<SalaryCandidate> {
        self.candidates_lowered(&text.to_lowercase())
    }

    fn candidates_lowered(&self, text: &str) -> Vec<SalaryCandidate> {
        let mut results = Vec::new();

        for pattern in [
            &*USD_DOLLAR_PREFIX,
            &*USD_DOLLAR_SUFFIX,
            &*USD_CODE_SUFFIX,
            &*USD_CODE_PREFIX,
            &*USD_APPROX,
        ] {
            for caps in pattern.captures_iter(text) {
                if let Some(value) = parse_number(&caps[1]) {
                    results.push(SalaryCandidate {
                        usd: value,
                        family: SalaryFamily::UsdLiteral,
                    });
                }
            }
        }

        // Either alternative of the "up to" pattern carries the number.
        for caps in USD_UP_TO.captures_iter(text) {
            if let Some(value) = caps
                .get(1)
                .or_else(|| caps.get(2))
                .and_then(|m| parse_number(m.as_str()))
            {
                results.push(SalaryCandidate {
                    usd: value,
                    family: SalaryFamily::UsdUpTo,
                });
            }
        }

        for caps in USD_RANGE.captures_iter(text) {
            for group in [1, 2] {
                if let Some(value) = parse_number(&caps[group]) {
                    results.push(SalaryCandidate {
                        usd: value,
                        family: SalaryFamily::UsdRange,
                    });
                }
            }
        }

        for (pattern, groups, family) in [
            (&*VND_RANGE, &[1, 2][..], SalaryFamily::VndRange),
            (&*VND_UP_TO, &[1][..], SalaryFamily::VndUpTo),
            (&*VND_SINGLE, &[1][..], SalaryFamily::VndSingle),
        ] {
            for caps in pattern.captures_iter(text) {
                for &group in groups {
                    if let Some(millions) = parse_decimal(&caps[group]) {
                        results.push(SalaryCandidate {
                            usd: self.millions_vnd_to_usd(millions),
                            family,
                        });
                    }
                }
            }
        }

        results
    }
}

impl Default for SalaryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SalaryExtractor {
    type Output = Option<i64>;

    fn no_match(&self) -> Self::Output {
        None
    }

    fn extract_lowered(&self, text: &str) -> Self::Output {
        let candidates = self.candidates_lowered(text);
        let best = candidates.iter().map(|c| c.usd).max();
        debug!(
            "Salary: {} candidates, max {:?} USD (rate {})",
            candidates.len(),
            best,
            self.vnd_per_usd
        );
        best
    }
}
