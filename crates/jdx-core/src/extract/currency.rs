//! Currency detection from indicator tokens.

use crate::models::posting::CurrencyCode;

use super::patterns::MAGNITUDE_SUFFIX;

/// Indicator tokens per currency, checked in this order.
const CURRENCY_SYMBOLS: &[(CurrencyCode, &[&str])] = &[
    (CurrencyCode::Usd, &["$", "usd", "us$"]),
    (CurrencyCode::Jpy, &["yên", "yen", "¥", "jpy"]),
    (CurrencyCode::Vnd, &["vnd", "vnđ", "đ", "đồng"]),
];

/// Classify the currency a lowercased text talks about.
///
/// Indicators may co-occur, so the first currency in USD > JPY > VND order
/// wins. Without any symbol, a number with a Vietnamese magnitude suffix
/// ("30tr", "500k") implies VND.
pub fn classify_currency(text: &str) -> CurrencyCode {
    let text = text.to_lowercase();

    for (code, symbols) in CURRENCY_SYMBOLS {
        if symbols.iter().any(|sym| text.contains(sym)) {
            return *code;
        }
    }

    if MAGNITUDE_SUFFIX.is_match(&text) {
        return CurrencyCode::Vnd;
    }

    CurrencyCode::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_symbols() {
        assert_eq!(classify_currency("upto $2500"), CurrencyCode::Usd);
        assert_eq!(classify_currency("1500 USD gross"), CurrencyCode::Usd);
    }

    #[test]
    fn test_priority_when_symbols_cooccur() {
        assert_eq!(classify_currency("$1000 hoặc 25 triệu đồng"), CurrencyCode::Usd);
        assert_eq!(classify_currency("300000 yen, đóng bảo hiểm"), CurrencyCode::Jpy);
    }

    #[test]
    fn test_vnd_symbols() {
        assert_eq!(classify_currency("15.000.000 VNĐ"), CurrencyCode::Vnd);
        assert_eq!(classify_currency("lương 20 triệu đồng"), CurrencyCode::Vnd);
    }

    #[test]
    fn test_suffix_fallback() {
        assert_eq!(classify_currency("30tr - 40tr"), CurrencyCode::Vnd);
        assert_eq!(classify_currency("up to 500k"), CurrencyCode::Vnd);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify_currency("negotiable"), CurrencyCode::Unknown);
        assert_eq!(classify_currency(""), CurrencyCode::Unknown);
    }
}
