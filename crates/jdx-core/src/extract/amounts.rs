//! Amount normalisation for Vietnamese/English magnitude suffixes.

use super::parse_decimal;
use super::patterns::AMOUNT_TOKEN;

/// Magnitude suffixes and the multiplier each one stands for.
pub const SUFFIX_MULTIPLIERS: &[(&str, f64)] = &[
    ("m", 1_000_000.0),
    ("tr", 1_000_000.0),
    ("triệu", 1_000_000.0),
    ("k", 1_000.0),
    ("nghìn", 1_000.0),
    ("ngàn", 1_000.0),
    ("tỷ", 1_000_000_000.0),
    ("ty", 1_000_000_000.0),
];

/// Look up the multiplier for a suffix, case-insensitively.
pub fn suffix_multiplier(suffix: &str) -> Option<f64> {
    let suffix = suffix.trim().to_lowercase();
    SUFFIX_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == suffix)
        .map(|(_, multiplier)| *multiplier)
}

/// Normalise an amount token such as "30", "30tr", "2,5m" or "300k".
///
/// A separately found `unit` (e.g. "triệu" in "30 triệu") overrides any
/// suffix fused to the digits. Unknown or missing suffixes leave the number
/// as written, truncated to an integer; the currency of such a bare number
/// is left for the caller to decide from context.
///
/// Returns `None` when the token does not start with a number.
pub fn normalize_amount(token: &str, unit: Option<&str>) -> Option<i64> {
    let token = token.trim().to_lowercase();
    let caps = AMOUNT_TOKEN.captures(&token)?;

    let value = parse_decimal(&caps[1])?;
    let suffix = match unit {
        Some(unit) => unit.trim().to_lowercase(),
        None => caps[2].to_string(),
    };

    let amount = match suffix_multiplier(&suffix) {
        Some(multiplier) => value * multiplier,
        None => value,
    };

    Some(amount as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fused_suffix() {
        assert_eq!(normalize_amount("30tr", None), Some(30_000_000));
        assert_eq!(normalize_amount("300k", None), Some(300_000));
        assert_eq!(normalize_amount("2tỷ", None), Some(2_000_000_000));
        assert_eq!(normalize_amount("30M", None), Some(30_000_000));
    }

    #[test]
    fn test_explicit_unit_overrides() {
        assert_eq!(normalize_amount("30", Some("triệu")), Some(30_000_000));
        assert_eq!(normalize_amount("30k", Some("Triệu")), Some(30_000_000));
        assert_eq!(normalize_amount("300", Some("nghìn")), Some(300_000));
    }

    #[test]
    fn test_decimal_separators() {
        assert_eq!(normalize_amount("2,5m", None), Some(2_500_000));
        assert_eq!(normalize_amount("1.5 ", Some("tr")), Some(1_500_000));
    }

    #[test]
    fn test_bare_and_unknown_suffix() {
        assert_eq!(normalize_amount("2500", None), Some(2500));
        assert_eq!(normalize_amount("12.9usd", None), Some(12));
        assert_eq!(normalize_amount("  45  ", Some("")), Some(45));
    }

    #[test]
    fn test_no_number() {
        assert_eq!(normalize_amount("", None), None);
        assert_eq!(normalize_amount("tr30", None), None);
        assert_eq!(normalize_amount("thỏa thuận", Some("triệu")), None);
    }

    #[test]
    fn test_suffix_multiplier() {
        assert_eq!(suffix_multiplier("NGHÌN"), Some(1_000.0));
        assert_eq!(suffix_multiplier("usd"), None);
    }
}
