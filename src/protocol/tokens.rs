//! Protocol Tokens
//!
//! Fixed ASCII byte sequences the store's command grammar recognises. These
//! values are a compatibility contract with the server and never change.

// Range endpoints
pub const PLUS: &[u8] = b"+";
pub const MINUS: &[u8] = b"-";
pub const POSITIVE_INFINITY: &[u8] = b"+inf";
pub const NEGATIVE_INFINITY: &[u8] = b"-inf";

// Interval prefixes
pub const EXCLUSIVE_PREFIX: &[u8] = b"(";
pub const LEX_INCLUSIVE_PREFIX: &[u8] = b"[";

// SET modifiers
pub const EX: &[u8] = b"EX";
pub const PX: &[u8] = b"PX";
pub const NX: &[u8] = b"NX";
pub const XX: &[u8] = b"XX";

// BITOP operations
pub const AND: &[u8] = b"AND";
pub const OR: &[u8] = b"OR";
pub const NOT: &[u8] = b"NOT";
pub const XOR: &[u8] = b"XOR";

// LINSERT positions
pub const BEFORE: &[u8] = b"BEFORE";
pub const AFTER: &[u8] = b"AFTER";

// SORT parameters
pub const BY: &[u8] = b"BY";
pub const GET: &[u8] = b"GET";
pub const LIMIT: &[u8] = b"LIMIT";
pub const DESC: &[u8] = b"DESC";
pub const ALPHA: &[u8] = b"ALPHA";

// SCAN parameters
pub const MATCH: &[u8] = b"MATCH";
pub const COUNT: &[u8] = b"COUNT";
