//! RESP Protocol Surface
//!
//! The two pieces of the wire protocol this crate touches directly:
//!
//! - `types`: the [`RespValue`] tree replies arrive as, and that request
//!   frames are built from
//! - `tokens`: the fixed command-modifier byte sequences (`NX`, `EX`, `(`,
//!   `+inf`, ...)
//!
//! Decoding bytes off the socket belongs to the transport; by the time a reply
//! reaches this crate it is already a [`RespValue`].

pub mod tokens;
pub mod types;

// Re-export commonly used types for convenience
pub use types::RespValue;
