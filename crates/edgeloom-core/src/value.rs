//! Value parsers: caller-supplied conversions from raw tokens to typed values
//!
//! Any `Fn(&str) -> Result<T, Err>` whose error converts into [`BoxError`] is a
//! [`ValueParser<T>`], so closures can be passed directly:
//!
//! ```
//! use edgeloom_core::value::{from_str, ValueParser};
//!
//! let upper = |token: &str| -> Result<String, std::convert::Infallible> {
//!     Ok(token.to_uppercase())
//! };
//! assert_eq!(upper.parse_value("a").unwrap(), "A");
//! assert_eq!(from_str::<i64>().parse_value("42").unwrap(), 42);
//! ```

use std::convert::Infallible;
use std::str::FromStr;

use crate::error::BoxError;

/// Converts a raw text token into a typed value
pub trait ValueParser<T> {
    fn parse_value(&self, token: &str) -> Result<T, BoxError>;
}

impl<T, F, Err> ValueParser<T> for F
where
    F: Fn(&str) -> Result<T, Err>,
    Err: Into<BoxError>,
{
    fn parse_value(&self, token: &str) -> Result<T, BoxError> {
        self(token).map_err(Into::into)
    }
}

/// Parser backed by the type's `FromStr` implementation
pub fn from_str<T>() -> impl Fn(&str) -> Result<T, BoxError> + Clone
where
    T: FromStr,
    T::Err: Into<BoxError>,
{
    |token: &str| -> Result<T, BoxError> { token.parse::<T>().map_err(Into::into) }
}

/// Parser that keeps the token as an owned string
pub fn text() -> impl Fn(&str) -> Result<String, Infallible> + Clone {
    |token: &str| Ok(token.to_string())
}

/// Parser for graphs without edge attributes; ignores its token
pub fn unit() -> impl Fn(&str) -> Result<(), Infallible> + Clone {
    |_: &str| Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_and_rejects() {
        let parser = from_str::<i32>();
        assert_eq!(parser.parse_value("-7").unwrap(), -7);

        let err = parser.parse_value("seven").unwrap_err();
        assert_eq!(err.to_string(), "invalid digit found in string");
    }

    #[test]
    fn test_text_is_identity() {
        assert_eq!(text().parse_value("Alpha").unwrap(), "Alpha");
    }

    #[test]
    fn test_unit_ignores_token() {
        assert!(unit().parse_value("anything").is_ok());
    }

    #[test]
    fn test_custom_closure_with_string_error() {
        let positive = |token: &str| -> Result<u32, String> {
            match token.parse::<u32>() {
                Ok(0) | Err(_) => Err(format!("'{}' is not a positive integer", token)),
                Ok(n) => Ok(n),
            }
        };
        assert_eq!(positive.parse_value("3").unwrap(), 3);
        assert!(positive.parse_value("0").is_err());
    }
}
