//! Command Parameter Builders
//!
//! Assembles the optional tail of compound commands from independently
//! nullable fields. Absent fields contribute nothing, not even their default,
//! because the server treats "not given" and "given as the default" as
//! different requests for some options.
//!
//! ## Modules
//!
//! - `sort`: [`SortParameters`] → `BY`, `GET`, `LIMIT`, `DESC`, `ALPHA`
//! - `scan`: [`ScanOptions`] → `MATCH`, `COUNT`
//!
//! Both produce a [`CommandArgs`], an ordered list of byte arguments the
//! dispatcher appends after the command name and key.

pub mod scan;
pub mod sort;

pub use scan::{scan_cursor_to_bytes, to_scan_args, ScanOptions, ScanOptionsBuilder};
pub use sort::{to_sort_args, SortLimit, SortParameters};

use crate::protocol::RespValue;
use bytes::Bytes;

/// An ordered list of raw command arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    args: Vec<Bytes>,
}

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one argument.
    pub fn push(&mut self, arg: impl Into<Bytes>) {
        self.args.push(arg.into());
    }

    /// Appends a fixed protocol token.
    pub fn push_token(&mut self, token: &'static [u8]) {
        self.args.push(Bytes::from_static(token));
    }

    pub fn extend<I>(&mut self, args: I)
    where
        I: IntoIterator<Item = Bytes>,
    {
        self.args.extend(args);
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bytes> {
        self.args.iter()
    }

    pub fn as_slice(&self) -> &[Bytes] {
        &self.args
    }

    pub fn into_vec(self) -> Vec<Bytes> {
        self.args
    }

    /// Lossy text view of the arguments, mostly for logging and tests.
    pub fn to_strings(&self) -> Vec<String> {
        crate::codec::to_strings(&self.args)
    }

    /// Builds a complete request frame: `command`, then `prefix` (typically
    /// the key), then these arguments, all as bulk strings.
    ///
    /// # Example
    ///
    /// ```
    /// use bytes::Bytes;
    /// use flashkv_convert::params::{to_scan_args, ScanOptions};
    ///
    /// let args = to_scan_args(&ScanOptions::builder().count(100).build());
    /// let frame = args.to_frame("SCAN", [Bytes::from("0")]);
    /// assert_eq!(frame.serialize(), b"*4\r\n$4\r\nSCAN\r\n$1\r\n0\r\n$5\r\nCOUNT\r\n$3\r\n100\r\n");
    /// ```
    pub fn to_frame<I>(&self, command: &str, prefix: I) -> RespValue
    where
        I: IntoIterator<Item = Bytes>,
    {
        let mut values = vec![RespValue::bulk_string(Bytes::copy_from_slice(
            command.as_bytes(),
        ))];
        values.extend(prefix.into_iter().map(RespValue::BulkString));
        values.extend(self.args.iter().cloned().map(RespValue::BulkString));
        RespValue::Array(values)
    }
}

impl IntoIterator for CommandArgs {
    type Item = Bytes;
    type IntoIter = std::vec::IntoIter<Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}

impl<'a> IntoIterator for &'a CommandArgs {
    type Item = &'a Bytes;
    type IntoIter = std::slice::Iter<'a, Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

impl From<Vec<Bytes>> for CommandArgs {
    fn from(args: Vec<Bytes>) -> Self {
        Self { args }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut args = CommandArgs::new();
        assert!(args.is_empty());

        args.push_token(b"LIMIT");
        args.push(Bytes::from("0"));
        args.push(Bytes::from("10"));

        assert_eq!(args.len(), 3);
        assert_eq!(args.to_strings(), vec!["LIMIT", "0", "10"]);
    }

    #[test]
    fn test_to_frame_without_args() {
        let frame = CommandArgs::new().to_frame("SORT", [Bytes::from("list")]);
        assert_eq!(
            frame,
            RespValue::array(vec![
                RespValue::bulk_string("SORT"),
                RespValue::bulk_string("list"),
            ])
        );
    }

    #[test]
    fn test_into_iter_preserves_order() {
        let args = CommandArgs::from(vec![Bytes::from("a"), Bytes::from("b")]);
        let collected: Vec<Bytes> = args.into_iter().collect();
        assert_eq!(collected, vec![Bytes::from("a"), Bytes::from("b")]);
    }
}
