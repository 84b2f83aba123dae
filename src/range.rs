//! Range Boundaries
//!
//! Encodes interval endpoints for the sorted-set range commands.
//!
//! ## Prefix Rules
//!
//! ```text
//!                      inclusive    exclusive    absent
//! score (ZRANGEBYSCORE)   5           (5          caller default (-inf / +inf)
//! lex   (ZRANGEBYLEX)     [a          (a          caller default (-    / +   )
//! ```
//!
//! Score ranges are inclusive unless marked with `(`. Lex ranges need an
//! explicit `[` or `(` on every bound. A wrong prefix is not rejected by the
//! server, it changes which members match.

use crate::codec::{double_to_bytes, int_to_bytes, long_to_bytes, string_to_bytes};
use crate::protocol::tokens;
use bytes::{BufMut, Bytes, BytesMut};

/// `+`, the open upper end of a lex range
pub static PLUS_BYTES: Bytes = Bytes::from_static(tokens::PLUS);

/// `-`, the open lower end of a lex range
pub static MINUS_BYTES: Bytes = Bytes::from_static(tokens::MINUS);

/// `+inf`, the open upper end of a score range
pub static POSITIVE_INFINITY_BYTES: Bytes = Bytes::from_static(tokens::POSITIVE_INFINITY);

/// `-inf`, the open lower end of a score range
pub static NEGATIVE_INFINITY_BYTES: Bytes = Bytes::from_static(tokens::NEGATIVE_INFINITY);

/// The typed value of a range endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryValue {
    /// Passed through as-is
    Bytes(Bytes),
    Double(f64),
    Long(i64),
    Integer(i32),
    Text(String),
}

impl BoundaryValue {
    /// Wire representation of the value, without any prefix.
    pub fn to_bytes(&self) -> Bytes {
        match self {
            BoundaryValue::Bytes(b) => b.clone(),
            BoundaryValue::Double(d) => double_to_bytes(*d),
            BoundaryValue::Long(l) => long_to_bytes(*l),
            BoundaryValue::Integer(i) => int_to_bytes(*i),
            BoundaryValue::Text(s) => string_to_bytes(s),
        }
    }
}

impl From<Bytes> for BoundaryValue {
    fn from(value: Bytes) -> Self {
        BoundaryValue::Bytes(value)
    }
}

impl From<Vec<u8>> for BoundaryValue {
    fn from(value: Vec<u8>) -> Self {
        BoundaryValue::Bytes(Bytes::from(value))
    }
}

impl From<&'static [u8]> for BoundaryValue {
    fn from(value: &'static [u8]) -> Self {
        BoundaryValue::Bytes(Bytes::from_static(value))
    }
}

impl From<f64> for BoundaryValue {
    fn from(value: f64) -> Self {
        BoundaryValue::Double(value)
    }
}

impl From<i64> for BoundaryValue {
    fn from(value: i64) -> Self {
        BoundaryValue::Long(value)
    }
}

impl From<i32> for BoundaryValue {
    fn from(value: i32) -> Self {
        BoundaryValue::Integer(value)
    }
}

impl From<&str> for BoundaryValue {
    fn from(value: &str) -> Self {
        BoundaryValue::Text(value.to_string())
    }
}

impl From<String> for BoundaryValue {
    fn from(value: String) -> Self {
        BoundaryValue::Text(value)
    }
}

/// One end of a range: an optional value plus an inclusive/exclusive flag.
///
/// A boundary without a value is unbounded and encodes to whatever default
/// the caller supplies.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    value: Option<BoundaryValue>,
    including: bool,
}

impl Boundary {
    /// An unbounded endpoint.
    pub fn infinite() -> Self {
        Self {
            value: None,
            including: true,
        }
    }

    pub fn including(value: impl Into<BoundaryValue>) -> Self {
        Self {
            value: Some(value.into()),
            including: true,
        }
    }

    pub fn excluding(value: impl Into<BoundaryValue>) -> Self {
        Self {
            value: Some(value.into()),
            including: false,
        }
    }

    pub fn value(&self) -> Option<&BoundaryValue> {
        self.value.as_ref()
    }

    pub fn is_including(&self) -> bool {
        self.including
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::infinite()
    }
}

/// A `[min, max]` interval built from two boundaries.
///
/// # Example
///
/// ```
/// use flashkv_convert::range::Range;
///
/// let range = Range::unbounded().gt(5).lte(10);
/// let (min, max) = range.score_args();
/// assert_eq!(&min[..], b"(5");
/// assert_eq!(&max[..], b"10");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Range {
    pub min: Boundary,
    pub max: Boundary,
}

impl Range {
    /// A range with both ends open.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Lower bound, inclusive.
    pub fn gte(mut self, value: impl Into<BoundaryValue>) -> Self {
        self.min = Boundary::including(value);
        self
    }

    /// Lower bound, exclusive.
    pub fn gt(mut self, value: impl Into<BoundaryValue>) -> Self {
        self.min = Boundary::excluding(value);
        self
    }

    /// Upper bound, inclusive.
    pub fn lte(mut self, value: impl Into<BoundaryValue>) -> Self {
        self.max = Boundary::including(value);
        self
    }

    /// Upper bound, exclusive.
    pub fn lt(mut self, value: impl Into<BoundaryValue>) -> Self {
        self.max = Boundary::excluding(value);
        self
    }

    /// `(min, max)` arguments for ZRANGEBYSCORE-style commands.
    pub fn score_args(&self) -> (Bytes, Bytes) {
        (
            encode_for_range_query(Some(&self.min), NEGATIVE_INFINITY_BYTES.clone()),
            encode_for_range_query(Some(&self.max), POSITIVE_INFINITY_BYTES.clone()),
        )
    }

    /// `(min, max)` arguments for ZRANGEBYLEX-style commands.
    pub fn lex_args(&self) -> (Bytes, Bytes) {
        (
            encode_for_lex_range_query(Some(&self.min), MINUS_BYTES.clone()),
            encode_for_lex_range_query(Some(&self.max), PLUS_BYTES.clone()),
        )
    }
}

/// Encodes a boundary for ZRANGEBYSCORE and friends (every range command
/// except the lex ones).
///
/// Inclusive boundaries carry no prefix, exclusive ones get `(`. An absent
/// boundary, or one without a value, returns `default` untouched.
pub fn encode_for_range_query(boundary: Option<&Boundary>, default: Bytes) -> Bytes {
    match boundary {
        Some(b) if b.value.is_some() => encode_boundary(b, &[], tokens::EXCLUSIVE_PREFIX),
        _ => default,
    }
}

/// Encodes a boundary for ZRANGEBYLEX: `[` when inclusive, `(` when exclusive.
pub fn encode_for_lex_range_query(boundary: Option<&Boundary>, default: Bytes) -> Bytes {
    match boundary {
        Some(b) if b.value.is_some() => encode_boundary(
            b,
            tokens::LEX_INCLUSIVE_PREFIX,
            tokens::EXCLUSIVE_PREFIX,
        ),
        _ => default,
    }
}

fn encode_boundary(boundary: &Boundary, incl_prefix: &[u8], excl_prefix: &[u8]) -> Bytes {
    let prefix = if boundary.including {
        incl_prefix
    } else {
        excl_prefix
    };
    let value = boundary
        .value
        .as_ref()
        .map(BoundaryValue::to_bytes)
        .unwrap_or_default();

    let mut buf = BytesMut::with_capacity(prefix.len() + value.len());
    buf.put_slice(prefix);
    buf.put_slice(&value);
    buf.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_bytes() -> Bytes {
        Bytes::from_static(b"DEFAULT")
    }

    #[test]
    fn test_inclusive_score_boundary_has_no_prefix() {
        let encoded = encode_for_range_query(Some(&Boundary::including(5)), default_bytes());
        assert_eq!(&encoded[..], b"5");
    }

    #[test]
    fn test_exclusive_score_boundary() {
        let encoded = encode_for_range_query(Some(&Boundary::excluding(5)), default_bytes());
        assert_eq!(&encoded[..], b"(5");
    }

    #[test]
    fn test_lex_boundaries() {
        let incl = encode_for_lex_range_query(Some(&Boundary::including("a")), default_bytes());
        let excl = encode_for_lex_range_query(Some(&Boundary::excluding("a")), default_bytes());
        assert_eq!(&incl[..], b"[a");
        assert_eq!(&excl[..], b"(a");
    }

    #[test]
    fn test_absent_boundary_returns_default() {
        assert_eq!(encode_for_range_query(None, default_bytes()), default_bytes());
        assert_eq!(encode_for_lex_range_query(None, default_bytes()), default_bytes());
    }

    #[test]
    fn test_valueless_boundary_returns_default() {
        let infinite = Boundary::infinite();
        assert_eq!(
            encode_for_range_query(Some(&infinite), default_bytes()),
            default_bytes()
        );
        assert_eq!(
            encode_for_lex_range_query(Some(&infinite), default_bytes()),
            default_bytes()
        );
    }

    #[test]
    fn test_value_variants() {
        let cases: Vec<(BoundaryValue, &[u8])> = vec![
            (BoundaryValue::from(&b"raw\x00"[..]), &b"raw\x00"[..]),
            (BoundaryValue::from(2.5), &b"2.5"[..]),
            (BoundaryValue::from(9_000_000_000i64), &b"9000000000"[..]),
            (BoundaryValue::from(-3i32), &b"-3"[..]),
            (BoundaryValue::from("text"), &b"text"[..]),
        ];
        for (value, expected) in cases {
            let encoded =
                encode_for_range_query(Some(&Boundary::excluding(value)), default_bytes());
            assert_eq!(&encoded[..1], b"(");
            assert_eq!(&encoded[1..], expected);
        }
    }

    #[test]
    fn test_range_score_args() {
        let (min, max) = Range::unbounded().score_args();
        assert_eq!(min, NEGATIVE_INFINITY_BYTES);
        assert_eq!(max, POSITIVE_INFINITY_BYTES);

        let (min, max) = Range::unbounded().gte(1.5).lt(3).score_args();
        assert_eq!(&min[..], b"1.5");
        assert_eq!(&max[..], b"(3");
    }

    #[test]
    fn test_range_lex_args() {
        let (min, max) = Range::unbounded().lex_args();
        assert_eq!(&min[..], b"-");
        assert_eq!(&max[..], b"+");

        let (min, max) = Range::unbounded().gte("aaa").lt("b").lex_args();
        assert_eq!(&min[..], b"[aaa");
        assert_eq!(&max[..], b"(b");
    }
}
