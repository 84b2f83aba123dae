//! # FlashKV Convert - Command Encoding and Reply Conversion
//!
//! The conversion layer of a FlashKV / Redis-compatible client. It turns typed
//! values into the exact byte arguments the RESP command grammar expects, and
//! raw [`RespValue`] replies back into typed values.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Command Dispatch (caller)                       │
//! └───────────────┬─────────────────────────────────────────▲───────────────┘
//!                 │ typed values                            │ typed values
//!                 ▼                                         │
//! ┌───────────────────────────────────┐   ┌─────────────────┴───────────────┐
//! │  Encoders                         │   │  Reply Parsers                  │
//! │  ┌────────┐ ┌────────┐ ┌────────┐ │   │  ┌───────┐ ┌─────────┐ ┌──────┐ │
//! │  │ range  │ │options │ │ params │ │   │  │ tuple │ │ cluster │ │ scan │ │
//! │  └───┬────┘ └───┬────┘ └───┬────┘ │   │  └───────┘ └─────────┘ └──────┘ │
//! │      └──────────┼──────────┘      │   │  ┌─────────────┐ ┌────────────┐ │
//! │                 ▼                 │   │  │ client_info │ │  server    │ │
//! │            ┌────────┐             │   │  └─────────────┘ └────────────┘ │
//! │            │ codec  │             │   └─────────────────▲───────────────┘
//! │            └────────┘             │                     │ RespValue
//! └───────────────┬───────────────────┘                     │
//!                 │ bytes                                   │
//!                 ▼                                         │
//! ┌─────────────────────────────────────────────────────────┴───────────────┐
//! │                         Transport (caller)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use flashkv_convert::options::{set_command_args, Expiration, SetMode};
//! use flashkv_convert::protocol::RespValue;
//! use flashkv_convert::range::Range;
//! use flashkv_convert::reply::parse_scored_members;
//!
//! // ZRANGEBYSCORE board (10 +inf WITHSCORES
//! let (min, max) = Range::unbounded().gt(10).score_args();
//! assert_eq!((&min[..], &max[..]), (&b"(10"[..], &b"+inf"[..]));
//!
//! // SET session token PX 1500 NX
//! let args = set_command_args(Some(&Expiration::milliseconds(1500)), SetMode::IfAbsent);
//! assert_eq!(args.to_strings(), vec!["PX", "1500", "NX"]);
//!
//! // Reply: 1) "alice" 2) "12"
//! let reply = RespValue::array(vec![
//!     RespValue::bulk_string("alice"),
//!     RespValue::bulk_string("12"),
//! ]);
//! let members = parse_scored_members(&reply).unwrap();
//! assert_eq!(members[0].score(), 12.0);
//! ```
//!
//! ## Module Overview
//!
//! - [`codec`]: text and number to byte conversions
//! - [`range`]: score and lex range boundaries
//! - [`options`]: expiration, SET condition, BITOP and LINSERT tokens
//! - [`params`]: SORT and SCAN argument builders
//! - [`reply`]: scored members, cluster topology, client list, sentinel and
//!   scan reply parsers
//! - [`translate`]: client error to [`DataAccessError`] translation
//! - [`protocol`]: the RESP value model and protocol tokens
//!
//! ## Design Highlights
//!
//! ### Stateless
//!
//! Every converter is a pure function of its input. The only shared data are
//! the constant protocol tokens, so everything here can be called from any
//! number of threads without locking.
//!
//! ### Absence Is Not Failure
//!
//! A missing boundary encodes to the caller's default, a missing SORT field
//! is left out of the command, a blank CLIENT LIST gives an empty list. Only
//! replies with the wrong shape produce a [`ConvertError`].

pub mod codec;
pub mod error;
pub mod options;
pub mod params;
pub mod protocol;
pub mod range;
pub mod reply;
pub mod translate;

// Re-export commonly used types for convenience
pub use error::{ConvertError, Result};
pub use options::{BitOperation, Expiration, ListPosition, SetMode, SortOrder, TimeUnit};
pub use params::{CommandArgs, ScanOptions, SortParameters};
pub use protocol::RespValue;
pub use range::{Boundary, BoundaryValue, Range};
pub use reply::{
    ClientInfo, ClusterNode, PropertyMap, ScanIteration, ScoredMember, ServerInfo, SlotRange,
};
pub use translate::{to_data_access_error, ClientError, DataAccessError};

/// Number of hash slots in a cluster
pub const CLUSTER_SLOT_COUNT: u16 = 16384;

/// Version of FlashKV Convert
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
