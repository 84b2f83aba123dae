//! Cluster Topology
//!
//! Parses the per-range entries of a `CLUSTER SLOTS` reply:
//!
//! ```text
//! [start-slot, end-slot, [host, port, ...]]
//! ```
//!
//! A single entry parsed with [`to_cluster_node`] must have exactly three
//! elements. In a full reply, entries of clusters with replicas carry one
//! node array per replica after the master:
//!
//! ```text
//! [start-slot, end-slot, [master-host, port, ...], [replica-host, port, ...], ...]
//! ```
//!
//! [`to_cluster_nodes`] reads the master and skips the replicas. Node
//! descriptors may carry more than host and port (e.g. the node id); those
//! extra fields are ignored.

use super::{expect_array, expect_integer, expect_text};
use crate::error::{ConvertError, Result};
use crate::protocol::RespValue;
use crate::CLUSTER_SLOT_COUNT;
use tracing::trace;

/// Number of elements in one slot-range entry.
const SLOT_ENTRY_LEN: usize = 3;

/// A contiguous, inclusive range of hash slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRange {
    start: u16,
    end: u16,
}

impl SlotRange {
    /// Creates a range; `start` and `end` must be valid slots with
    /// `start <= end`.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        let start = to_slot("start slot", start)?;
        let end = to_slot("end slot", end)?;
        if start > end {
            return Err(ConvertError::InvertedSlotRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    pub fn contains(&self, slot: u16) -> bool {
        (self.start..=self.end).contains(&slot)
    }

    /// Number of slots covered, at least one.
    pub fn slot_count(&self) -> usize {
        (self.end - self.start) as usize + 1
    }
}

fn to_slot(field: &'static str, value: i64) -> Result<u16> {
    if (0..CLUSTER_SLOT_COUNT as i64).contains(&value) {
        Ok(value as u16)
    } else {
        Err(ConvertError::OutOfRange { field, value })
    }
}

/// A node serving a slot range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterNode {
    host: String,
    port: u16,
    slot_range: SlotRange,
}

impl ClusterNode {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn slot_range(&self) -> SlotRange {
        self.slot_range
    }

    /// `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn serves(&self, slot: u16) -> bool {
        self.slot_range.contains(slot)
    }
}

/// Parses one `[start, end, [host, port, ...]]` entry.
///
/// # Example
///
/// ```
/// use flashkv_convert::protocol::RespValue;
/// use flashkv_convert::reply::to_cluster_node;
///
/// let entry = RespValue::array(vec![
///     RespValue::integer(100),
///     RespValue::integer(200),
///     RespValue::array(vec![RespValue::bulk_string("host1"), RespValue::integer(7000)]),
/// ]);
/// let node = to_cluster_node(&entry).unwrap();
/// assert_eq!(node.address(), "host1:7000");
/// assert_eq!((node.slot_range().start(), node.slot_range().end()), (100, 200));
/// ```
pub fn to_cluster_node(reply: &RespValue) -> Result<ClusterNode> {
    let values = expect_array(reply)?;
    if values.len() != SLOT_ENTRY_LEN {
        return Err(ConvertError::WrongElementCount {
            expected: SLOT_ENTRY_LEN,
            actual: values.len(),
        });
    }

    node_from_entry(values)
}

/// Builds a node from the first three elements of a slot entry.
fn node_from_entry(values: &[RespValue]) -> Result<ClusterNode> {
    let slot_range = SlotRange::new(expect_integer(&values[0])?, expect_integer(&values[1])?)?;

    let node_info = expect_array(&values[2])?;
    if node_info.len() < 2 {
        return Err(ConvertError::WrongElementCount {
            expected: 2,
            actual: node_info.len(),
        });
    }

    let host = expect_text(&node_info[0])?;
    let port = expect_integer(&node_info[1])?;
    let port = u16::try_from(port).map_err(|_| ConvertError::OutOfRange {
        field: "port",
        value: port,
    })?;

    Ok(ClusterNode {
        host,
        port,
        slot_range,
    })
}

/// Parses a whole `CLUSTER SLOTS` reply, one master node per entry. Replica
/// descriptors after the master are skipped. A null reply is an empty
/// topology.
pub fn to_cluster_nodes(reply: &RespValue) -> Result<Vec<ClusterNode>> {
    if reply.is_null() {
        return Ok(Vec::new());
    }

    let nodes = expect_array(reply)?
        .iter()
        .map(|entry| {
            let values = expect_array(entry)?;
            if values.len() < SLOT_ENTRY_LEN {
                return Err(ConvertError::WrongElementCount {
                    expected: SLOT_ENTRY_LEN,
                    actual: values.len(),
                });
            }
            node_from_entry(&values[..SLOT_ENTRY_LEN])
        })
        .collect::<Result<Vec<_>>>()?;

    trace!(nodes = nodes.len(), "Parsed cluster topology");
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: i64, end: i64, host: &'static str, port: i64) -> RespValue {
        RespValue::array(vec![
            RespValue::integer(start),
            RespValue::integer(end),
            RespValue::array(vec![
                RespValue::bulk_string(host),
                RespValue::integer(port),
            ]),
        ])
    }

    #[test]
    fn test_parse_node() {
        let node = to_cluster_node(&entry(100, 200, "host1", 7000)).unwrap();
        assert_eq!(node.host(), "host1");
        assert_eq!(node.port(), 7000);
        assert_eq!(node.slot_range(), SlotRange::new(100, 200).unwrap());
        assert!(node.serves(150));
        assert!(!node.serves(201));
    }

    #[test]
    fn test_extra_node_fields_are_ignored() {
        let reply = RespValue::array(vec![
            RespValue::integer(0),
            RespValue::integer(5460),
            RespValue::array(vec![
                RespValue::bulk_string("10.0.0.1"),
                RespValue::integer(6379),
                RespValue::bulk_string("09dbe9720cda62f7865eabc5fd8857c5d2678366"),
            ]),
        ]);
        let node = to_cluster_node(&reply).unwrap();
        assert_eq!(node.address(), "10.0.0.1:6379");
        assert_eq!(node.slot_range().slot_count(), 5461);
    }

    #[test]
    fn test_two_element_entry_is_rejected() {
        let reply = RespValue::array(vec![RespValue::integer(100), RespValue::integer(200)]);
        assert_eq!(
            to_cluster_node(&reply),
            Err(ConvertError::WrongElementCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_wrong_element_types() {
        let reply = RespValue::array(vec![
            RespValue::bulk_string("100"),
            RespValue::integer(200),
            RespValue::array(vec![]),
        ]);
        assert!(matches!(
            to_cluster_node(&reply),
            Err(ConvertError::UnexpectedReply { expected: "integer", .. })
        ));

        assert!(matches!(
            to_cluster_node(&RespValue::simple_string("OK")),
            Err(ConvertError::UnexpectedReply { expected: "array", .. })
        ));
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(matches!(
            to_cluster_node(&entry(0, 16384, "h", 1)),
            Err(ConvertError::OutOfRange { field: "end slot", .. })
        ));
        assert_eq!(
            to_cluster_node(&entry(10, 5, "h", 1)),
            Err(ConvertError::InvertedSlotRange { start: 10, end: 5 })
        );
        assert!(matches!(
            to_cluster_node(&entry(0, 1, "h", 70000)),
            Err(ConvertError::OutOfRange { field: "port", value: 70000 })
        ));
    }

    #[test]
    fn test_parse_topology() {
        let reply = RespValue::array(vec![
            entry(0, 8191, "a", 7000),
            entry(8192, 16383, "b", 7001),
        ]);
        let nodes = to_cluster_nodes(&reply).unwrap();
        assert_eq!(nodes.len(), 2);
        assert!(nodes[1].serves(16383));

        assert!(to_cluster_nodes(&RespValue::Null).unwrap().is_empty());
    }

    #[test]
    fn test_topology_with_replicas() {
        let reply = RespValue::array(vec![
            RespValue::array(vec![
                RespValue::integer(0),
                RespValue::integer(5460),
                RespValue::array(vec![
                    RespValue::bulk_string("10.0.0.1"),
                    RespValue::integer(7000),
                ]),
                RespValue::array(vec![
                    RespValue::bulk_string("10.0.0.2"),
                    RespValue::integer(7001),
                ]),
            ]),
            entry(5461, 16383, "10.0.0.3", 7002),
        ]);
        let nodes = to_cluster_nodes(&reply).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].address(), "10.0.0.1:7000");
        assert_eq!(nodes[0].slot_range(), SlotRange::new(0, 5460).unwrap());
        assert_eq!(nodes[1].address(), "10.0.0.3:7002");

        // A single entry stays strict
        assert!(matches!(
            to_cluster_node(&reply.as_array().unwrap()[0]),
            Err(ConvertError::WrongElementCount { expected: 3, actual: 4 })
        ));
    }

    #[test]
    fn test_topology_with_short_entry() {
        let reply = RespValue::array(vec![RespValue::array(vec![
            RespValue::integer(0),
            RespValue::integer(100),
        ])]);
        assert_eq!(
            to_cluster_nodes(&reply),
            Err(ConvertError::WrongElementCount {
                expected: 3,
                actual: 2
            })
        );
    }
}
