//! CLIENT LIST Parsing
//!
//! `CLIENT LIST` answers with one line per connection, each a space-separated
//! run of `key=value` pairs:
//!
//! ```text
//! id=3 addr=127.0.0.1:51234 fd=8 name= age=12 idle=0 flags=N db=0 sub=0 psub=0 multi=-1 qbuf=26 qbuf-free=32742 obl=0 oll=0 omem=0 events=r cmd=client
//! ```

use super::PropertyMap;
use tracing::{trace, warn};

/// One connected client as reported by `CLIENT LIST`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    properties: PropertyMap,
}

impl ClientInfo {
    /// Parses a single line. Tokens without `=` are kept with an empty value.
    pub fn from_line(line: &str) -> Self {
        let mut properties = PropertyMap::new();
        for token in line.split_whitespace() {
            match token.split_once('=') {
                Some((key, value)) => properties.insert(key, value),
                None => {
                    warn!(token = token, "Client info token without '='");
                    properties.insert(token, "");
                }
            }
        }
        Self { properties }
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

    /// `addr`: client address and port
    pub fn address(&self) -> Option<&str> {
        self.get("addr")
    }

    /// `fd`: socket file descriptor
    pub fn file_descriptor(&self) -> Option<i64> {
        self.get_i64("fd")
    }

    /// `name`: name set with CLIENT SETNAME
    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    /// `age`: connection age in seconds
    pub fn age(&self) -> Option<i64> {
        self.get_i64("age")
    }

    /// `idle`: idle time in seconds
    pub fn idle(&self) -> Option<i64> {
        self.get_i64("idle")
    }

    pub fn flags(&self) -> Option<&str> {
        self.get("flags")
    }

    /// `db`: current database index
    pub fn database_id(&self) -> Option<i64> {
        self.get_i64("db")
    }

    /// `sub`: number of channel subscriptions
    pub fn channel_subscriptions(&self) -> Option<i64> {
        self.get_i64("sub")
    }

    /// `psub`: number of pattern subscriptions
    pub fn pattern_subscriptions(&self) -> Option<i64> {
        self.get_i64("psub")
    }

    /// `multi`: commands queued in a MULTI block, -1 outside one
    pub fn multi_command_context(&self) -> Option<i64> {
        self.get_i64("multi")
    }

    /// `qbuf`: query buffer length
    pub fn buffer_length(&self) -> Option<i64> {
        self.get_i64("qbuf")
    }

    /// `qbuf-free`: free space in the query buffer
    pub fn buffer_free_space(&self) -> Option<i64> {
        self.get_i64("qbuf-free")
    }

    /// `obl`: output buffer length
    pub fn output_buffer_length(&self) -> Option<i64> {
        self.get_i64("obl")
    }

    /// `oll`: output list length
    pub fn output_list_length(&self) -> Option<i64> {
        self.get_i64("oll")
    }

    /// `omem`: output buffer memory usage
    pub fn output_buffer_memory_usage(&self) -> Option<i64> {
        self.get_i64("omem")
    }

    /// `events`: file descriptor events
    pub fn events(&self) -> Option<&str> {
        self.get("events")
    }

    /// `cmd`: last command run
    pub fn last_command(&self) -> Option<&str> {
        self.get("cmd")
    }
}

/// Parses a `CLIENT LIST` reply.
///
/// Lines may end in `\n` or `\r\n`; blank lines are skipped. Absent or blank
/// input gives an empty list.
pub fn to_client_info_list(source: Option<&str>) -> Vec<ClientInfo> {
    let source = match source {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Vec::new(),
    };

    let clients: Vec<ClientInfo> = source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ClientInfo::from_line)
        .collect();

    trace!(clients = clients.len(), "Parsed client list");
    clients
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE_1: &str = "id=3 addr=127.0.0.1:51234 fd=8 name= age=12 idle=0 flags=N db=0 sub=0 psub=0 multi=-1 qbuf=26 qbuf-free=32742 obl=0 oll=0 omem=0 events=r cmd=client";
    const LINE_2: &str = "id=4 addr=10.0.0.7:40000 fd=9 name=worker age=300 idle=5 flags=N db=2 sub=1 psub=3 multi=-1 qbuf=0 qbuf-free=0 obl=0 oll=0 omem=0 events=r cmd=subscribe";

    #[test]
    fn test_blank_input_is_empty() {
        assert!(to_client_info_list(None).is_empty());
        assert!(to_client_info_list(Some("")).is_empty());
        assert!(to_client_info_list(Some("  \r\n \n")).is_empty());
    }

    #[test]
    fn test_parse_single_line() {
        let clients = to_client_info_list(Some(LINE_1));
        assert_eq!(clients.len(), 1);

        let client = &clients[0];
        assert_eq!(client.address(), Some("127.0.0.1:51234"));
        assert_eq!(client.file_descriptor(), Some(8));
        assert_eq!(client.name(), Some(""));
        assert_eq!(client.age(), Some(12));
        assert_eq!(client.multi_command_context(), Some(-1));
        assert_eq!(client.buffer_free_space(), Some(32742));
        assert_eq!(client.last_command(), Some("client"));
        assert_eq!(client.get("id"), Some("3"));
    }

    #[test]
    fn test_mixed_line_endings() {
        let blob = format!("{}\r\n{}\n", LINE_1, LINE_2);
        let clients = to_client_info_list(Some(&blob));
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[1].name(), Some("worker"));
        assert_eq!(clients[1].database_id(), Some(2));
        assert_eq!(clients[1].pattern_subscriptions(), Some(3));
        assert_eq!(clients[1].last_command(), Some("subscribe"));
    }

    #[test]
    fn test_token_without_value() {
        let client = ClientInfo::from_line("addr=1.2.3.4:5 orphan");
        assert_eq!(client.get("orphan"), Some(""));
        assert_eq!(client.properties().len(), 2);
    }

    #[test]
    fn test_missing_numeric_field() {
        let client = ClientInfo::from_line("age=abc");
        assert_eq!(client.age(), None);
        assert_eq!(client.idle(), None);
    }
}
