//! SCAN Pages
//!
//! Every SCAN-family command answers `[cursor, [item, item, ...]]`. The cursor
//! arrives as a bulk string; `0` means the iteration is complete.

use super::{expect_array, expect_text};
use crate::error::{ConvertError, Result};
use crate::protocol::RespValue;
use bytes::Bytes;

/// One page of a cursor-based iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanIteration {
    pub cursor: u64,
    pub items: Vec<Bytes>,
}

impl ScanIteration {
    /// True once the server has returned cursor `0`.
    pub fn is_finished(&self) -> bool {
        self.cursor == 0
    }
}

pub fn parse_scan_reply(reply: &RespValue) -> Result<ScanIteration> {
    let parts = expect_array(reply)?;
    if parts.len() != 2 {
        return Err(ConvertError::WrongElementCount {
            expected: 2,
            actual: parts.len(),
        });
    }

    let cursor = match &parts[0] {
        RespValue::Integer(n) => u64::try_from(*n).map_err(|_| ConvertError::OutOfRange {
            field: "cursor",
            value: *n,
        })?,
        other => {
            let text = expect_text(other)?;
            text.parse()
                .map_err(|_| ConvertError::InvalidInteger(text.clone()))?
        }
    };

    let items = expect_array(&parts[1])?
        .iter()
        .map(|item| match item {
            RespValue::BulkString(b) => Ok(b.clone()),
            other => Err(ConvertError::UnexpectedReply {
                expected: "bulk string",
                actual: other.type_name(),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ScanIteration { cursor, items })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page() {
        let reply = RespValue::array(vec![
            RespValue::bulk_string("17"),
            RespValue::array(vec![
                RespValue::bulk_string("key:1"),
                RespValue::bulk_string("key:2"),
            ]),
        ]);
        let page = parse_scan_reply(&reply).unwrap();
        assert_eq!(page.cursor, 17);
        assert_eq!(page.items, vec![Bytes::from("key:1"), Bytes::from("key:2")]);
        assert!(!page.is_finished());
    }

    #[test]
    fn test_final_page() {
        let reply = RespValue::array(vec![RespValue::bulk_string("0"), RespValue::array(vec![])]);
        let page = parse_scan_reply(&reply).unwrap();
        assert!(page.is_finished());
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_malformed_pages() {
        let bad_cursor = RespValue::array(vec![RespValue::bulk_string("abc"), RespValue::array(vec![])]);
        assert_eq!(
            parse_scan_reply(&bad_cursor),
            Err(ConvertError::InvalidInteger("abc".to_string()))
        );

        let short = RespValue::array(vec![RespValue::bulk_string("0")]);
        assert!(matches!(
            parse_scan_reply(&short),
            Err(ConvertError::WrongElementCount { expected: 2, actual: 1 })
        ));
    }
}
