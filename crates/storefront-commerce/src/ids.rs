//! Product identifiers.
//!
//! Ids are assigned by the upstream post source and are plain integers on
//! the wire. The newtype keeps them from being mixed up with quantities,
//! prices or page numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A source-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an ID from its integer value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the integer value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    /// Parse the string form used in route parameters (`/products/:id`).
    ///
    /// Only the leading run of digits counts, after an optional `+`, so
    /// `"3abc"` and `"3.0"` both read as 3. No leading digits is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('+').unwrap_or(s);
        let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        s[..end].parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_param() {
        assert_eq!("7".parse::<ProductId>().unwrap(), ProductId::new(7));
        assert_eq!(" 12 ".parse::<ProductId>().unwrap(), ProductId::new(12));
        assert_eq!("+3".parse::<ProductId>().unwrap(), ProductId::new(3));
    }

    #[test]
    fn test_parse_reads_leading_digits() {
        assert_eq!("3abc".parse::<ProductId>().unwrap(), ProductId::new(3));
        assert_eq!("3.0".parse::<ProductId>().unwrap(), ProductId::new(3));
        assert_eq!("12 34".parse::<ProductId>().unwrap(), ProductId::new(12));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!("abc".parse::<ProductId>().is_err());
        assert!("".parse::<ProductId>().is_err());
        assert!("-3".parse::<ProductId>().is_err());
        assert!("+".parse::<ProductId>().is_err());
        assert!(".5".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&ProductId::new(5)).unwrap();
        assert_eq!(json, "5");
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_display() {
        assert_eq!(ProductId::new(9).to_string(), "9");
    }
}
