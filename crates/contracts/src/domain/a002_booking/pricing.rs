//! Client-side price arithmetic. Single currency, cosmetic only.

use crate::shared::error::BookingError;

pub const CURRENCY_SYMBOL: &str = "$";

/// Parse a listing price such as "1,200" or "89.50".
///
/// Thousands separators are stripped; anything that is not then a finite,
/// non-negative decimal is rejected.
pub fn parse_price(price: &str) -> Result<f64, BookingError> {
    let cleaned: String = price.trim().chars().filter(|c| *c != ',').collect();
    let valid_chars = !cleaned.is_empty()
        && cleaned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && cleaned.chars().filter(|c| *c == '.').count() <= 1;
    if !valid_chars {
        return Err(BookingError::MalformedPrice(price.to_string()));
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| BookingError::MalformedPrice(price.to_string()))
}

pub fn total_price(price: &str, days: i64) -> Result<f64, BookingError> {
    Ok(parse_price(price)? * days as f64)
}

/// Total as "$<amount>" with two decimals, e.g. "$3600.00"
pub fn format_total(price: &str, days: i64) -> Result<String, BookingError> {
    Ok(format!("{}{:.2}", CURRENCY_SYMBOL, total_price(price, days)?))
}

/// Amount with thousands separators re-inserted, e.g. "$3,600.00"
pub fn format_money_grouped(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{}{}.{}", CURRENCY_SYMBOL, grouped, decimal_part)
}

/// Per-day rate as listed, e.g. "$1,200/day"
pub fn format_rate(price: &str) -> String {
    format!("{}{}/day", CURRENCY_SYMBOL, price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_total() {
        assert_eq!(format_total("1,200", 3).unwrap(), "$3600.00");
        assert_eq!(format_total("89.5", 2).unwrap(), "$179.00");
    }

    #[test]
    fn test_format_money_grouped() {
        assert_eq!(format_money_grouped(3600.0), "$3,600.00");
        assert_eq!(format_money_grouped(1234567.891), "$1,234,567.89");
        assert_eq!(format_money_grouped(999.0), "$999.00");
        assert_eq!(format_money_grouped(0.0), "$0.00");
    }

    #[test]
    fn test_malformed_price_rejected() {
        for bad in ["", "abc", "12abc", "1.2.3", "-5", "$100"] {
            assert_eq!(
                parse_price(bad),
                Err(BookingError::MalformedPrice(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_price_strips_separators() {
        assert_eq!(parse_price("1,200").unwrap(), 1200.0);
        assert_eq!(parse_price("12,345.50").unwrap(), 12345.5);
    }

    #[test]
    fn test_format_rate_keeps_listing_text() {
        assert_eq!(format_rate("1,200"), "$1,200/day");
    }
}
