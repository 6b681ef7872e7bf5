use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Server-side identifier, sent either as a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AlbumId {
    Number(json::Number),
    Text(String),
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AlbumId::Number(n) => write!(f, "{}", n),
            AlbumId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Album price. `None` stands for a value that is not a number; one bad price
/// does not reject the whole listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(pub Option<Decimal>);

impl Price {
    pub fn value(&self) -> Option<Decimal> {
        self.0
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(json::Number),
            Text(String),
            Other(IgnoredAny),
        }

        let value = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => parse_exact(&n.to_string()),
            Raw::Text(s) => parse_leading_decimal(&s),
            Raw::Other(_) => None,
        };
        Ok(Price(value))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: Price,
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(id={}, title={}, artist={})", self.id, self.title, self.artist)
    }
}

/// Reads the longest numeric prefix of `s`, ignoring leading whitespace.
/// "12.5abc" is 12.5, "abc" is `None`.
pub fn parse_leading_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim_start();
    let numeric_end = s
        .find(|c: char| !(c.is_ascii_digit() || "+-.eE".contains(c)))
        .unwrap_or_else(|| s.len());
    let numeric = &s[..numeric_end];

    (1..=numeric.len())
        .rev()
        .find_map(|end| parse_exact(&numeric[..end]))
}

fn parse_exact(s: &str) -> Option<Decimal> {
    let (sign, digits) = match s.chars().next() {
        Some('+') | Some('-') => s.split_at(1),
        _ => ("", s),
    };
    if digits.is_empty() || digits.starts_with(|c: char| c == '+' || c == '-') {
        return None;
    }
    // ".5" reads as 0.5
    let s = if digits.starts_with('.') {
        format!("{}0{}", sign, digits)
    } else {
        s.to_owned()
    };

    Decimal::from_str(&s)
        .or_else(|_| Decimal::from_scientific(&s))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn decodes_string_and_number_fields() {
        let albums: Vec<Album> = json::from_str(
            r#"[
                {"id":1,"title":"Abbey Road","artist":"The Beatles","price":"19.99"},
                {"id":"2","title":"Jeru","artist":"Gerry Mulligan","price":17.99,"year":1962}
            ]"#,
        )
        .unwrap();

        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].id.to_string(), "1");
        assert_eq!(albums[0].price, Price(Some(dec("19.99"))));
        assert_eq!(albums[1].id, AlbumId::Text("2".to_owned()));
        assert_eq!(albums[1].price.value(), Some(dec("17.99")));
    }

    #[test]
    fn number_prices_keep_their_decimal_digits() {
        let album: Album = json::from_str(
            r#"{"id":"x","title":"t","artist":"a","price":1.005}"#,
        )
        .unwrap();
        assert_eq!(album.price.value(), Some(dec("1.005")));

        let album: Album =
            json::from_str(r#"{"id":"x","title":"t","artist":"a","price":1e21}"#).unwrap();
        assert_eq!(album.price.value(), Some(dec("1000000000000000000000")));
    }

    #[test]
    fn unparsable_price_is_none() {
        let album: Album = json::from_str(
            r#"{"id":"x","title":"t","artist":"a","price":"free"}"#,
        )
        .unwrap();
        assert_eq!(album.price.value(), None);

        let album: Album =
            json::from_str(r#"{"id":"x","title":"t","artist":"a","price":null}"#).unwrap();
        assert_eq!(album.price.value(), None);

        let album: Album =
            json::from_str(r#"{"id":"x","title":"t","artist":"a","price":{"amount":1}}"#).unwrap();
        assert_eq!(album.price.value(), None);
    }

    #[test]
    fn leading_decimal_prefix() {
        assert_eq!(parse_leading_decimal("12.5abc"), Some(dec("12.5")));
        assert_eq!(parse_leading_decimal("  -3"), Some(dec("-3")));
        assert_eq!(parse_leading_decimal(".5"), Some(dec("0.5")));
        assert_eq!(parse_leading_decimal("1e3x"), Some(dec("1000")));
        assert_eq!(parse_leading_decimal("7e"), Some(dec("7")));
        assert_eq!(parse_leading_decimal("."), None);
        assert_eq!(parse_leading_decimal(""), None);
        assert_eq!(parse_leading_decimal("--5"), None);
        assert_eq!(parse_leading_decimal("€5"), None);
    }
}
