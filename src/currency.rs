//! Price formatting for the album table, fixed to the de-DE locale in euros:
//! "." groups thousands, "," separates cents, the symbol trails after a space.

use rust_decimal::{Decimal, RoundingStrategy};

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const SYMBOL: &str = "€";

/// Formats a price, rendering a missing value as "NaN €".
pub fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(value) => format_eur(value),
        None => format!("NaN {}", SYMBOL),
    }
}

/// Cents are rounded half away from zero; a negative value keeps its sign even
/// when it rounds to zero.
pub fn format_eur(value: Decimal) -> String {
    let mut cents = value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    cents.rescale(2);

    let digits = cents.to_string();
    let (units, fraction) = match digits.split_once('.') {
        Some((units, fraction)) => (units, fraction),
        None => (digits.as_str(), "00"),
    };
    let sign = if value.is_sign_negative() { "-" } else { "" };

    format!(
        "{}{}{}{} {}",
        sign,
        group_thousands(units),
        DECIMAL_SEPARATOR,
        fraction,
        SYMBOL
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn eur(value: &str) -> String {
        format_eur(Decimal::from_str(value).unwrap())
    }

    #[test]
    fn formats_two_decimals_with_comma() {
        assert_eq!(eur("19.99"), "19,99 €");
        assert_eq!(eur("17"), "17,00 €");
        assert_eq!(eur("0.5"), "0,50 €");
    }

    #[test]
    fn rounds_half_cents_away_from_zero() {
        assert_eq!(eur("1.005"), "1,01 €");
        assert_eq!(eur("10.005"), "10,01 €");
        assert_eq!(eur("2.675"), "2,68 €");
        assert_eq!(eur("1.004"), "1,00 €");
        assert_eq!(eur("56.999"), "57,00 €");
        assert_eq!(eur("-1.005"), "-1,01 €");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(eur("1234.5"), "1.234,50 €");
        assert_eq!(eur("1234567"), "1.234.567,00 €");
        assert_eq!(eur("999"), "999,00 €");
    }

    #[test]
    fn large_values_keep_exact_digits() {
        let value = Decimal::from_scientific("1e21").unwrap();
        assert_eq!(format_eur(value), "1.000.000.000.000.000.000.000,00 €");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(eur("-5.25"), "-5,25 €");
        assert_eq!(eur("-0.001"), "-0,00 €");
        assert_eq!(eur("0.004"), "0,00 €");
    }

    #[test]
    fn missing_price_is_nan() {
        assert_eq!(format_price(None), "NaN €");
        assert_eq!(format_price(Some(Decimal::from_str("3.1").unwrap())), "3,10 €");
    }
}
