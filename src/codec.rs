//! Byte Codec
//!
//! Primitive conversions between text or numbers and the raw byte arguments
//! sent on the wire. Text is always UTF-8; nothing here depends on locale.
//!
//! The `Option`-taking functions are null-transparent: `None` in gives `None`
//! out, never an empty buffer. Numbers are formatted with their canonical
//! `Display` representation (no grouping, no forced sign, shortest float form)
//! and then encoded as text.

use bytes::Bytes;
use std::collections::{HashMap, HashSet};

/// Encodes optional text as UTF-8 bytes.
///
/// # Example
/// ```
/// use flashkv_convert::codec::text_to_bytes;
/// assert_eq!(text_to_bytes(Some("key")).as_deref(), Some(&b"key"[..]));
/// assert_eq!(text_to_bytes(None), None);
/// ```
pub fn text_to_bytes(text: Option<&str>) -> Option<Bytes> {
    text.map(string_to_bytes)
}

/// Decodes optional bytes as UTF-8 text.
///
/// Invalid sequences are replaced with U+FFFD rather than failing.
pub fn bytes_to_text(bytes: Option<&[u8]>) -> Option<String> {
    bytes.map(|b| String::from_utf8_lossy(b).into_owned())
}

/// Encodes text as UTF-8 bytes.
pub fn string_to_bytes(text: &str) -> Bytes {
    Bytes::copy_from_slice(text.as_bytes())
}

pub fn int_to_bytes(value: i32) -> Bytes {
    Bytes::from(value.to_string())
}

pub fn long_to_bytes(value: i64) -> Bytes {
    Bytes::from(value.to_string())
}

pub fn unsigned_long_to_bytes(value: u64) -> Bytes {
    Bytes::from(value.to_string())
}

/// Formats a double the way Rust displays it: `5.0` becomes `"5"`,
/// infinities become `"inf"` / `"-inf"`.
pub fn double_to_bytes(value: f64) -> Bytes {
    Bytes::from(value.to_string())
}

/// Encodes every string of a sequence, preserving order.
pub fn strings_to_bytes<I, S>(source: I) -> Vec<Bytes>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    source
        .into_iter()
        .map(|s| string_to_bytes(s.as_ref()))
        .collect()
}

pub fn string_set_to_byte_set<I, S>(source: I) -> HashSet<Bytes>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    source
        .into_iter()
        .map(|s| string_to_bytes(s.as_ref()))
        .collect()
}

/// Encodes both keys and values of a string map.
pub fn string_map_to_byte_map<I, K, V>(source: I) -> HashMap<Bytes, Bytes>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    source
        .into_iter()
        .map(|(k, v)| (string_to_bytes(k.as_ref()), string_to_bytes(v.as_ref())))
        .collect()
}

/// Decodes a list of byte arguments into text, lossily.
pub fn to_strings(source: &[Bytes]) -> Vec<String> {
    source
        .iter()
        .map(|b| String::from_utf8_lossy(b).into_owned())
        .collect()
}

/// Flattens key/value pairs into `[k1, v1, k2, v2, ...]`, the argument
/// layout of HMSET and MSET.
pub fn to_byte_arrays<I, K>(source: I) -> Vec<Bytes>
where
    I: IntoIterator<Item = (K, Bytes)>,
    K: Into<Bytes>,
{
    let iter = source.into_iter();
    let mut result = Vec::with_capacity(iter.size_hint().0 * 2);
    for (key, value) in iter {
        result.push(key.into());
        result.push(value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_text_roundtrip() {
        for text in ["", "plain", "spaces and\ttabs", "ünïcödé", "日本語", "emoji 🚀"] {
            let bytes = text_to_bytes(Some(text));
            assert_eq!(bytes_to_text(bytes.as_deref()).as_deref(), Some(text));
        }
    }

    #[test]
    fn test_none_is_transparent() {
        assert_eq!(text_to_bytes(None), None);
        assert_eq!(bytes_to_text(None), None);
    }

    #[test]
    fn test_empty_text_is_not_none() {
        assert_eq!(text_to_bytes(Some("")), Some(Bytes::new()));
    }

    #[test]
    fn test_invalid_utf8_decodes_lossily() {
        let text = bytes_to_text(Some(&b"ab\xffcd"[..])).unwrap();
        assert_eq!(text, "ab\u{fffd}cd");
    }

    #[test]
    fn test_numeric_formatting() {
        assert_eq!(int_to_bytes(5), Bytes::from("5"));
        assert_eq!(int_to_bytes(-12), Bytes::from("-12"));
        assert_eq!(long_to_bytes(1_000_000_000_000), Bytes::from("1000000000000"));
        assert_eq!(double_to_bytes(1.5), Bytes::from("1.5"));
        assert_eq!(double_to_bytes(5.0), Bytes::from("5"));
        assert_eq!(double_to_bytes(-0.25), Bytes::from("-0.25"));
        assert_eq!(double_to_bytes(f64::INFINITY), Bytes::from("inf"));
        assert_eq!(double_to_bytes(f64::NEG_INFINITY), Bytes::from("-inf"));
    }

    #[test]
    fn test_collection_converters() {
        let list = strings_to_bytes(["a", "b", "a"]);
        assert_eq!(list, vec![Bytes::from("a"), Bytes::from("b"), Bytes::from("a")]);

        let set = string_set_to_byte_set(vec!["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Bytes::from("b")));

        let map = string_map_to_byte_map([("field", "value")]);
        assert_eq!(map.get(&Bytes::from("field")), Some(&Bytes::from("value")));
    }

    #[test]
    fn test_to_strings() {
        let strings = to_strings(&[Bytes::from("x"), Bytes::from("y")]);
        assert_eq!(strings, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_to_byte_arrays_flattens_pairs() {
        let mut map = BTreeMap::new();
        map.insert(Bytes::from("k1"), Bytes::from("v1"));
        map.insert(Bytes::from("k2"), Bytes::from("v2"));

        let flat = to_byte_arrays(map);
        assert_eq!(
            flat,
            vec![
                Bytes::from("k1"),
                Bytes::from("v1"),
                Bytes::from("k2"),
                Bytes::from("v2"),
            ]
        );
    }
}
