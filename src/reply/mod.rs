//! Typed views of the replies sent back by the JSON and Search modules and by
//! the functions API, which the client library only exposes as raw values.

use redis::Value;

use crate::{Error, TourResult};

pub mod function;
pub use function::LibraryInfo;

pub mod search;
pub use search::{AggregateResult, Document, IndexInfo, SearchResult};

pub mod stream;
pub use stream::StreamEntry;

/// Utility for walking the elements of an array reply.
///
/// Module replies are flat arrays whose meaning depends on position
/// (`[total, id, fields, id, fields, ...]`) or on alternating names and
/// values (`[name, value, name, value, ...]`). `Parse` hands the elements out
/// one at a time with the conversion each position needs.
#[derive(Debug)]
pub(crate) struct Parse {
    parts: std::vec::IntoIter<Value>,
}

impl Parse {
    /// Create a new `Parse` over an array reply.
    ///
    /// RESP3 maps are accepted too and walked as `[key, value, ...]`.
    pub(crate) fn new(value: Value) -> TourResult<Parse> {
        let parts = match value {
            Value::Array(array) => array,
            Value::Map(pairs) => pairs.into_iter().flat_map(|(k, v)| [k, v]).collect(),
            value => {
                return Err(Error::UnexpectedReply(format!(
                    "expected array, got {value:?}"
                )))
            }
        };

        Ok(Parse {
            parts: parts.into_iter(),
        })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.parts.len() == 0
    }

    pub(crate) fn next_value(&mut self) -> TourResult<Value> {
        self.parts
            .next()
            .ok_or_else(|| Error::UnexpectedReply("reply ended early".to_string()))
    }

    pub(crate) fn next_string(&mut self) -> TourResult<String> {
        let value = self.next_value()?;
        to_string(&value)
    }

    pub(crate) fn next_int(&mut self) -> TourResult<i64> {
        match self.next_value()? {
            Value::Int(v) => Ok(v),
            value => {
                let s = to_string(&value)?;
                s.parse()
                    .map_err(|_| Error::UnexpectedReply(format!("expected integer, got {s:?}")))
            }
        }
    }

    /// The next element as a nested `Parse`.
    pub(crate) fn next_array(&mut self) -> TourResult<Parse> {
        Parse::new(self.next_value()?)
    }

    /// Consume the remaining elements as `name, value` pairs.
    pub(crate) fn pairs(&mut self) -> TourResult<Vec<(String, String)>> {
        let mut pairs = Vec::with_capacity(self.parts.len() / 2);
        while !self.is_empty() {
            let name = self.next_string()?;
            let value = self.next_string()?;
            pairs.push((name, value));
        }
        Ok(pairs)
    }
}

/// Render a scalar reply as text.
///
/// Nested arrays (`TOLIST` results, for instance) are joined with `,` and
/// `nil` becomes the empty string.
pub(crate) fn to_string(value: &Value) -> TourResult<String> {
    match value {
        Value::Nil => Ok(String::new()),
        Value::Okay => Ok("OK".to_string()),
        Value::Int(v) => Ok(v.to_string()),
        Value::Double(v) => Ok(v.to_string()),
        Value::Array(items) | Value::Set(items) => Ok(items
            .iter()
            .map(to_string)
            .collect::<TourResult<Vec<_>>>()?
            .join(",")),
        value => Ok(redis::from_redis_value::<String>(value)?),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn bulk(s: &str) -> Value {
        Value::BulkString(s.as_bytes().to_vec())
    }

    #[test]
    fn test_walk_flat_reply() {
        let mut parse = Parse::new(Value::Array(vec![
            Value::Int(2),
            bulk("staff:1"),
            Value::Array(vec![bulk("name"), bulk("Bob")]),
        ]))
        .unwrap();

        assert_eq!(parse.next_int().unwrap(), 2);
        assert_eq!(parse.next_string().unwrap(), "staff:1");
        let mut fields = parse.next_array().unwrap();
        assert_eq!(
            fields.pairs().unwrap(),
            vec![("name".to_string(), "Bob".to_string())]
        );
        assert!(parse.is_empty());
    }

    #[test]
    fn test_integer_from_bulk_string() {
        let mut parse = Parse::new(Value::Array(vec![bulk("42"), bulk("x")])).unwrap();
        assert_eq!(parse.next_int().unwrap(), 42);
        assert!(matches!(parse.next_int(), Err(Error::UnexpectedReply(_))));
    }

    #[test]
    fn test_errors_on_short_replies() {
        let mut parse = Parse::new(Value::Array(vec![])).unwrap();
        assert!(matches!(
            parse.next_string(),
            Err(Error::UnexpectedReply(_))
        ));

        assert!(Parse::new(Value::Int(1)).is_err());
    }

    #[test]
    fn test_odd_pairs_fail() {
        let mut parse = Parse::new(Value::Array(vec![bulk("name")])).unwrap();
        assert!(parse.pairs().is_err());
    }

    #[test]
    fn test_map_is_walked_as_pairs() {
        let mut parse = Parse::new(Value::Map(vec![(bulk("k"), Value::Int(1))])).unwrap();
        assert_eq!(
            parse.pairs().unwrap(),
            vec![("k".to_string(), "1".to_string())]
        );
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&bulk("Nicol")).unwrap(), "Nicol");
        assert_eq!(to_string(&Value::Int(45)).unwrap(), "45");
        assert_eq!(to_string(&Value::Okay).unwrap(), "OK");
        assert_eq!(to_string(&Value::Nil).unwrap(), "");
        assert_eq!(
            to_string(&Value::Array(vec![bulk("Bob"), bulk("Alex")])).unwrap(),
            "Bob,Alex"
        );
    }
}
