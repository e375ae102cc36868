//! Query strings attached to a hash.

use std::collections::BTreeMap;

use log::error;
use urlencoding::decode;

/// The query part of a navigation target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// No query.
    QNone,

    /// A query string, used verbatim. A `?` is added if missing.
    QString(String),

    /// A list of key/value pairs, percent-encoded during navigation.
    QVec(Vec<(String, String)>),
}

impl Query {
    /// Encode the query as a `?`-prefixed string.
    ///
    /// An empty query encodes to the empty string, never to a bare `?`.
    #[must_use]
    pub(crate) fn encode(&self) -> String {
        match self {
            Query::QNone => String::new(),
            Query::QString(qs) if qs.is_empty() => String::new(),
            Query::QString(qs) if qs.starts_with('?') => qs.clone(),
            Query::QString(qs) => format!("?{qs}"),
            Query::QVec(pairs) if pairs.is_empty() => String::new(),
            Query::QVec(pairs) => match serde_urlencoded::to_string(pairs) {
                Ok(qs) => format!("?{qs}"),
                Err(e) => {
                    error!("failed to encode query: {e}");
                    String::new()
                }
            },
        }
    }
}

/// Decode the query part of `hash` into a flat mapping.
///
/// Everything after the first `?` is split on `&`, each pair on its first
/// `=`, and values are percent-decoded. A pair without a `=` decodes to an
/// absent entry; for duplicate keys the last occurrence wins.
#[must_use]
pub(crate) fn decode_query(hash: &str) -> BTreeMap<String, String> {
    let mut queries = BTreeMap::new();

    let query = match hash.split_once('?') {
        Some((_, query)) => query,
        None => return queries,
    };

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => continue,
        };
        match (decode(key), decode(value)) {
            (Ok(key), Ok(value)) => {
                queries.insert(key.into_owned(), value.into_owned());
            }
            _ => error!(r#"failed to decode query pair: "{pair}""#),
        }
    }

    queries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_none() {
        assert_eq!(Query::QNone.encode(), "");
    }

    #[test]
    fn encode_string_with_marker() {
        assert_eq!(
            Query::QString(String::from("?query=works")).encode(),
            "?query=works"
        );
    }

    #[test]
    fn encode_string_without_marker() {
        assert_eq!(
            Query::QString(String::from("query=works")).encode(),
            "?query=works"
        );
    }

    #[test]
    fn encode_empty_is_empty() {
        assert_eq!(Query::QString(String::new()).encode(), "");
        assert_eq!(Query::QVec(vec![]).encode(), "");
    }

    #[test]
    fn encode_pairs() {
        let q = Query::QVec(vec![
            (String::from("a"), String::from("1")),
            (String::from("b"), String::from("2")),
        ]);

        assert_eq!(q.encode(), "?a=1&b=2");
    }

    #[test]
    fn encode_pairs_escapes_values() {
        let q = Query::QVec(vec![(String::from("q"), String::from("a&b=c"))]);

        assert_eq!(q.encode(), "?q=a%26b%3Dc");
    }

    #[test]
    fn decode_round_trip() {
        let q = Query::QVec(vec![
            (String::from("a"), String::from("1")),
            (String::from("b"), String::from("2")),
        ]);

        let decoded = decode_query(&format!("/home/{}", q.encode()));
        assert_eq!(decoded.get("a"), Some(&String::from("1")));
        assert_eq!(decoded.get("b"), Some(&String::from("2")));
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn decode_without_query() {
        assert!(decode_query("/home/").is_empty());
    }

    #[test]
    fn decode_percent_encoded_value() {
        let decoded = decode_query("/home/?q=a%26b");

        assert_eq!(decoded.get("q"), Some(&String::from("a&b")));
    }

    #[test]
    fn decode_pair_without_separator_is_absent() {
        let decoded = decode_query("/home/?flag&a=1");

        assert_eq!(decoded.get("flag"), None);
        assert_eq!(decoded.get("a"), Some(&String::from("1")));
    }

    #[test]
    fn decode_duplicate_key_last_wins() {
        let decoded = decode_query("/home/?a=1&a=2");

        assert_eq!(decoded.get("a"), Some(&String::from("2")));
    }
}
