//! SCAN Parameters
//!
//! `SCAN cursor [MATCH pattern] [COUNT count]`, shared by SSCAN, HSCAN and
//! ZSCAN.

use super::CommandArgs;
use crate::codec::{string_to_bytes, unsigned_long_to_bytes};
use crate::protocol::tokens;
use bytes::Bytes;

/// Optional SCAN modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Page-size hint
    pub count: Option<u64>,
    /// Glob pattern keys must match
    pub pattern: Option<String>,
}

impl ScanOptions {
    /// No modifiers at all.
    pub const NONE: ScanOptions = ScanOptions {
        count: None,
        pattern: None,
    };

    pub fn builder() -> ScanOptionsBuilder {
        ScanOptionsBuilder::default()
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Builder for ScanOptions
#[derive(Debug, Default)]
pub struct ScanOptionsBuilder {
    options: ScanOptions,
}

impl ScanOptionsBuilder {
    pub fn count(mut self, count: u64) -> Self {
        self.options.count = Some(count);
        self
    }

    /// Set the MATCH pattern
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.options.pattern = Some(pattern.into());
        self
    }

    pub fn build(self) -> ScanOptions {
        self.options
    }
}

/// Builds SCAN arguments.
///
/// [`ScanOptions::NONE`] short-circuits to an empty list. Otherwise `MATCH`
/// is added for a non-blank pattern and `COUNT` for a present count.
pub fn to_scan_args(options: &ScanOptions) -> CommandArgs {
    let mut args = CommandArgs::new();
    if options.is_none() {
        return args;
    }

    if let Some(pattern) = options.pattern.as_deref() {
        if !pattern.trim().is_empty() {
            args.push_token(tokens::MATCH);
            args.push(string_to_bytes(pattern));
        }
    }

    if let Some(count) = options.count {
        args.push_token(tokens::COUNT);
        args.push(unsigned_long_to_bytes(count));
    }

    args
}

/// Encodes a cursor for the first argument of SCAN.
pub fn scan_cursor_to_bytes(cursor: u64) -> Bytes {
    unsigned_long_to_bytes(cursor)
}
