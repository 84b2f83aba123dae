//! Sentinel Server Descriptions
//!
//! `SENTINEL MASTERS` and `SENTINEL SLAVES` describe each server as a flat
//! array of alternating field names and values. The transport may hand them
//! over already folded into maps, or as the raw reply.

use super::{expect_array, PropertyMap};
use crate::error::{ConvertError, Result};
use crate::protocol::RespValue;
use std::collections::HashMap;
use tracing::trace;

/// A master or replica as seen by a sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerInfo {
    properties: PropertyMap,
}

impl ServerInfo {
    pub fn from_properties<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            properties: properties.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        self.properties.get_i64(key)
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    /// `ip`
    pub fn host(&self) -> Option<&str> {
        self.get("ip")
    }

    pub fn port(&self) -> Option<u16> {
        self.get("port").and_then(|p| p.parse().ok())
    }

    /// `runid`
    pub fn run_id(&self) -> Option<&str> {
        self.get("runid")
    }

    pub fn flags(&self) -> Option<&str> {
        self.get("flags")
    }

    /// `role-reported`: `master` or `slave`
    pub fn role_reported(&self) -> Option<&str> {
        self.get("role-reported")
    }

    /// `num-slaves`
    pub fn number_of_replicas(&self) -> Option<i64> {
        self.get_i64("num-slaves")
    }

    /// `num-other-sentinels`
    pub fn number_of_other_sentinels(&self) -> Option<i64> {
        self.get_i64("num-other-sentinels")
    }

    pub fn quorum(&self) -> Option<i64> {
        self.get_i64("quorum")
    }
}

/// One [`ServerInfo`] per map, in order. Absent or empty input gives an
/// empty list.
pub fn to_server_info_list(source: Option<&[HashMap<String, String>]>) -> Vec<ServerInfo> {
    let source = match source {
        Some(maps) if !maps.is_empty() => maps,
        _ => return Vec::new(),
    };

    source
        .iter()
        .map(|info| ServerInfo::from_properties(info.iter()))
        .collect()
}

/// Folds a raw `SENTINEL MASTERS` reply into one property map per server.
/// A null reply gives an empty list.
pub fn server_maps_from_reply(reply: &RespValue) -> Result<Vec<HashMap<String, String>>> {
    if reply.is_null() {
        return Ok(Vec::new());
    }

    let maps = expect_array(reply)?
        .iter()
        .map(fold_pairs)
        .collect::<Result<Vec<_>>>()?;

    trace!(servers = maps.len(), "Parsed sentinel server list");
    Ok(maps)
}

fn fold_pairs(entry: &RespValue) -> Result<HashMap<String, String>> {
    let fields = expect_array(entry)?;
    if fields.len() % 2 != 0 {
        return Err(ConvertError::UnpairedElements(fields.len()));
    }

    fields
        .chunks_exact(2)
        .map(|pair| Ok((pair_text(&pair[0])?, pair_text(&pair[1])?)))
        .collect()
}

fn pair_text(value: &RespValue) -> Result<String> {
    match value {
        RespValue::Integer(n) => Ok(n.to_string()),
        other => super::expect_text(other),
    }
}
