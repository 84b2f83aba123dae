//! Reply Parsers
//!
//! Converts raw [`RespValue`] replies into typed domain values.
//!
//! ## Modules
//!
//! - `tuple`: scored members from ZRANGE ... WITHSCORES and friends
//! - `cluster`: slot-range/node descriptors from CLUSTER SLOTS
//! - `client_info`: CLIENT LIST text blobs
//! - `server`: SENTINEL MASTERS / SLAVES property maps
//! - `scan`: `[cursor, [items...]]` pages of the SCAN family
//! - `properties`: the field/value map behind `ClientInfo` and `ServerInfo`
//!
//! Fixed-shape replies are checked only as far as index access needs; a
//! mismatch is a [`ConvertError`] returned straight to the caller. Absent or
//! empty input yields an empty collection instead of an error.

pub mod client_info;
pub mod cluster;
pub mod properties;
pub mod scan;
pub mod server;
pub mod tuple;

pub use client_info::{to_client_info_list, ClientInfo};
pub use cluster::{to_cluster_node, to_cluster_nodes, ClusterNode, SlotRange};
pub use properties::PropertyMap;
pub use scan::{parse_scan_reply, ScanIteration};
pub use server::{server_maps_from_reply, to_server_info_list, ServerInfo};
pub use tuple::{parse_scored_members, to_tuple, to_tuple_list, to_tuple_set, ScoredMember};

use crate::error::{ConvertError, Result};
use crate::protocol::RespValue;

// ============================================================================
// Shared shape checks
// ============================================================================

fn expect_array<'a>(value: &'a RespValue) -> Result<&'a [RespValue]> {
    value.as_array().ok_or(ConvertError::UnexpectedReply {
        expected: "array",
        actual: value.type_name(),
    })
}

fn expect_integer(value: &RespValue) -> Result<i64> {
    value.as_integer().ok_or(ConvertError::UnexpectedReply {
        expected: "integer",
        actual: value.type_name(),
    })
}

/// Bulk or simple string content, decoded lossily.
fn expect_text(value: &RespValue) -> Result<String> {
    value
        .as_bytes()
        .map(|b| String::from_utf8_lossy(b).into_owned())
        .ok_or(ConvertError::UnexpectedReply {
            expected: "string",
            actual: value.type_name(),
        })
}
