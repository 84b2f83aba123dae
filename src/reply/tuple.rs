//! Scored Members
//!
//! Sorted-set replies pair every member with a score. The transport delivers
//! them either as already-split `(member, score)` pairs or as the flat
//! `[member, score, member, score, ...]` array of a `WITHSCORES` reply.
//! Order is kept exactly as the server sent it.

use super::expect_array;
use crate::error::{ConvertError, Result};
use crate::protocol::RespValue;
use bytes::Bytes;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use tracing::trace;

/// A sorted-set member with its score.
#[derive(Debug, Clone)]
pub struct ScoredMember {
    value: Bytes,
    score: f64,
}

impl ScoredMember {
    pub fn new(value: impl Into<Bytes>, score: f64) -> Self {
        Self {
            value: value.into(),
            score,
        }
    }

    pub fn value(&self) -> &Bytes {
        &self.value
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn into_parts(self) -> (Bytes, f64) {
        (self.value, self.score)
    }
}

// Scores compare by bit pattern so that the type can live in a HashSet.
impl PartialEq for ScoredMember {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.score.to_bits() == other.score.to_bits()
    }
}

impl Eq for ScoredMember {}

impl Hash for ScoredMember {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.score.to_bits().hash(state);
    }
}

/// Converts one raw pair. `None` in gives `None` out.
pub fn to_tuple(source: Option<(Bytes, f64)>) -> Option<ScoredMember> {
    source.map(|(value, score)| ScoredMember::new(value, score))
}

/// Converts an ordered sequence of raw pairs, keeping order and `None`s.
pub fn to_tuple_list<I>(source: I) -> Vec<Option<ScoredMember>>
where
    I: IntoIterator<Item = Option<(Bytes, f64)>>,
{
    source.into_iter().map(to_tuple).collect()
}

/// Converts raw pairs into a set; duplicates collapse.
pub fn to_tuple_set<I>(source: I) -> HashSet<ScoredMember>
where
    I: IntoIterator<Item = (Bytes, f64)>,
{
    source
        .into_iter()
        .map(|(value, score)| ScoredMember::new(value, score))
        .collect()
}

/// Parses a flat `WITHSCORES` reply. A null reply is an empty result.
///
/// # Example
///
/// ```
/// use flashkv_convert::protocol::RespValue;
/// use flashkv_convert::reply::parse_scored_members;
///
/// let reply = RespValue::array(vec![
///     RespValue::bulk_string("alice"),
///     RespValue::bulk_string("12.5"),
/// ]);
/// let members = parse_scored_members(&reply).unwrap();
/// assert_eq!(members[0].score(), 12.5);
/// ```
pub fn parse_scored_members(reply: &RespValue) -> Result<Vec<ScoredMember>> {
    if reply.is_null() {
        return Ok(Vec::new());
    }

    let items = expect_array(reply)?;
    if items.len() % 2 != 0 {
        return Err(ConvertError::UnpairedElements(items.len()));
    }

    let members = items
        .chunks_exact(2)
        .map(|pair| {
            let value = match &pair[0] {
                RespValue::BulkString(b) => b.clone(),
                other => {
                    return Err(ConvertError::UnexpectedReply {
                        expected: "bulk string",
                        actual: other.type_name(),
                    })
                }
            };
            Ok(ScoredMember::new(value, parse_score(&pair[1])?))
        })
        .collect::<Result<Vec<_>>>()?;

    trace!(count = members.len(), "Parsed scored members");
    Ok(members)
}

/// Parses a score sent as text (`"1.5"`, `"inf"`, `"-inf"`) or as an integer.
pub fn parse_score(value: &RespValue) -> Result<f64> {
    match value {
        RespValue::Integer(n) => Ok(*n as f64),
        RespValue::BulkString(_) | RespValue::SimpleString(_) => {
            let text = value
                .as_str()
                .ok_or_else(|| ConvertError::InvalidScore("non UTF-8 score".to_string()))?;
            text.trim()
                .parse::<f64>()
                .map_err(|_| ConvertError::InvalidScore(text.to_string()))
        }
        other => Err(ConvertError::UnexpectedReply {
            expected: "score",
            actual: other.type_name(),
        }),
    }
}
