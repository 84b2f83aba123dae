//! SORT Parameters
//!
//! `SORT key [BY pattern] [LIMIT offset count] [GET pattern ...] [ASC|DESC] [ALPHA]`
//!
//! Every field is optional and independent. Ascending order and numeric
//! comparison are the server defaults, so `ASC` is never emitted and `ALPHA`
//! only appears when explicitly requested.

use super::CommandArgs;
use crate::codec::long_to_bytes;
use crate::options::SortOrder;
use crate::protocol::tokens;
use bytes::Bytes;

/// `LIMIT offset count`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortLimit {
    pub offset: i64,
    pub count: i64,
}

/// Optional parts of a SORT command.
///
/// # Example
///
/// ```
/// use flashkv_convert::options::SortOrder;
/// use flashkv_convert::params::{to_sort_args, SortParameters};
///
/// let params = SortParameters::new()
///     .by("weight_*")
///     .get("object_*")
///     .limit(0, 5)
///     .order(SortOrder::Desc);
/// let args = to_sort_args(Some(&params)).unwrap();
/// assert_eq!(
///     args.to_strings(),
///     vec!["BY", "weight_*", "GET", "object_*", "LIMIT", "0", "5", "DESC"]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortParameters {
    pub by_pattern: Option<Bytes>,
    pub get_patterns: Option<Vec<Bytes>>,
    pub limit: Option<SortLimit>,
    pub order: Option<SortOrder>,
    pub alphabetic: Option<bool>,
}

impl SortParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by(mut self, pattern: impl Into<Bytes>) -> Self {
        self.by_pattern = Some(pattern.into());
        self
    }

    /// Adds a GET pattern; may be called repeatedly.
    pub fn get(mut self, pattern: impl Into<Bytes>) -> Self {
        self.get_patterns
            .get_or_insert_with(Vec::new)
            .push(pattern.into());
        self
    }

    pub fn limit(mut self, offset: i64, count: i64) -> Self {
        self.limit = Some(SortLimit { offset, count });
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn alpha(mut self) -> Self {
        self.alphabetic = Some(true);
        self
    }

    pub fn numeric(mut self) -> Self {
        self.alphabetic = Some(false);
        self
    }
}

/// Builds SORT arguments. `None` in gives `None` out.
pub fn to_sort_args(params: Option<&SortParameters>) -> Option<CommandArgs> {
    let params = params?;
    let mut args = CommandArgs::new();

    if let Some(pattern) = &params.by_pattern {
        args.push_token(tokens::BY);
        args.push(pattern.clone());
    }

    if let Some(patterns) = &params.get_patterns {
        for pattern in patterns {
            args.push_token(tokens::GET);
            args.push(pattern.clone());
        }
    }

    if let Some(limit) = params.limit {
        args.push_token(tokens::LIMIT);
        args.push(long_to_bytes(limit.offset));
        args.push(long_to_bytes(limit.count));
    }

    if params.order == Some(SortOrder::Desc) {
        args.push_token(tokens::DESC);
    }

    if params.alphabetic == Some(true) {
        args.push_token(tokens::ALPHA);
    }

    Some(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_parameters() {
        assert_eq!(to_sort_args(None), None);
    }

    #[test]
    fn test_empty_parameters_build_nothing() {
        let args = to_sort_args(Some(&SortParameters::new())).unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn test_descending_only() {
        let params = SortParameters::new().order(SortOrder::Desc);
        let args = to_sort_args(Some(&params)).unwrap();
        assert_eq!(args.len(), 1);
        assert_eq!(args.to_strings(), vec!["DESC"]);
    }

    #[test]
    fn test_ascending_is_omitted() {
        let params = SortParameters::new().order(SortOrder::Asc);
        assert!(to_sort_args(Some(&params)).unwrap().is_empty());
    }

    #[test]
    fn test_alpha_only_when_true() {
        let numeric = SortParameters::new().numeric();
        assert!(to_sort_args(Some(&numeric)).unwrap().is_empty());

        let alpha = SortParameters::new().alpha();
        assert_eq!(to_sort_args(Some(&alpha)).unwrap().to_strings(), vec!["ALPHA"]);
    }

    #[test]
    fn test_multiple_get_patterns() {
        let params = SortParameters::new().get("#").get("name_*");
        assert_eq!(
            to_sort_args(Some(&params)).unwrap().to_strings(),
            vec!["GET", "#", "GET", "name_*"]
        );
    }

    #[test]
    fn test_full_parameters() {
        let params = SortParameters::new()
            .by("w_*")
            .get("#")
            .limit(10, 20)
            .order(SortOrder::Desc)
            .alpha();
        assert_eq!(
            to_sort_args(Some(&params)).unwrap().to_strings(),
            vec!["BY", "w_*", "GET", "#", "LIMIT", "10", "20", "DESC", "ALPHA"]
        );
    }
}
