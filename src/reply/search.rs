use std::collections::BTreeMap;

use redis::Value;

use super::{to_string, Parse};
use crate::{Error, TourResult};

/// Reply to `FT.SEARCH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Number of matching documents, which may exceed `documents.len()` when
    /// `LIMIT` cuts the page short.
    pub total: i64,
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub fields: BTreeMap<String, String>,
}

impl SearchResult {
    /// Decode `[total, id, [field, value, ...], id, [...], ...]`.
    pub fn from_value(value: Value) -> TourResult<Self> {
        let mut parse = Parse::new(value)?;
        let total = parse.next_int()?;

        let mut documents = Vec::new();
        while !parse.is_empty() {
            let id = parse.next_string()?;
            let fields = parse.next_array()?.pairs()?.into_iter().collect();
            documents.push(Document { id, fields });
        }

        Ok(SearchResult { total, documents })
    }
}

/// Reply to `FT.AGGREGATE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateResult {
    pub total: i64,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl AggregateResult {
    /// Decode `[total, [name, value, ...], [name, value, ...], ...]`.
    pub fn from_value(value: Value) -> TourResult<Self> {
        let mut parse = Parse::new(value)?;
        let total = parse.next_int()?;

        let mut rows = Vec::new();
        while !parse.is_empty() {
            rows.push(parse.next_array()?.pairs()?.into_iter().collect());
        }

        Ok(AggregateResult { total, rows })
    }
}

/// The parts of `FT.INFO` worth showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexInfo {
    pub name: String,
    pub num_docs: u64,
    /// Attribute names (aliases) of the schema, in schema order.
    pub attributes: Vec<String>,
}

impl IndexInfo {
    pub fn from_value(value: Value) -> TourResult<Self> {
        let mut parse = Parse::new(value)?;

        let mut name = None;
        let mut num_docs = None;
        let mut attributes = Vec::new();

        while !parse.is_empty() {
            let key = parse.next_string()?;
            match &key[..] {
                "index_name" => name = Some(parse.next_string()?),
                "num_docs" => num_docs = Some(count(&parse.next_string()?)?),
                "attributes" => {
                    let mut list = parse.next_array()?;
                    while !list.is_empty() {
                        attributes.push(attribute_name(list.next_value()?)?);
                    }
                }
                _ => {
                    parse.next_value()?;
                }
            }
        }

        Ok(IndexInfo {
            name: name
                .ok_or_else(|| Error::UnexpectedReply("FT.INFO without index_name".to_string()))?,
            num_docs: num_docs.unwrap_or_default(),
            attributes,
        })
    }
}

/// A document count, which some server versions report as a float.
fn count(raw: &str) -> TourResult<u64> {
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(n);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Ok(f as u64)
        }
        _ => Err(Error::UnexpectedReply(format!("invalid num_docs {raw:?}"))),
    }
}

/// Each attribute is `[identifier, $.name, attribute, name, type, TEXT, ...]`,
/// where flags such as `SORTABLE` appear without a value.
fn attribute_name(value: Value) -> TourResult<String> {
    let items = match value {
        Value::Array(items) => items,
        value => {
            return Err(Error::UnexpectedReply(format!(
                "expected attribute array, got {value:?}"
            )))
        }
    };
    let mut items = items.iter();
    while let Some(item) = items.next() {
        if to_string(item)? == "attribute" {
            if let Some(name) = items.next() {
                return to_string(name);
            }
        }
    }
    Err(Error::UnexpectedReply(
        "attribute without a name".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::tests::bulk;

    fn fields(pairs: &[(&str, &str)]) -> Value {
        Value::Array(
            pairs
                .iter()
                .flat_map(|(k, v)| [bulk(k), bulk(v)])
                .collect(),
        )
    }

    #[test]
    fn test_search_result() {
        let reply = Value::Array(vec![
            Value::Int(2),
            bulk("staff:1"),
            fields(&[("name", "Bob"), ("age", "22"), ("isSingle", "true")]),
            bulk("staff:2"),
            fields(&[("name", "Alex"), ("age", "45"), ("isSingle", "true")]),
        ]);
        let result = SearchResult::from_value(reply).unwrap();
        assert_eq!(result.total, 2);
        assert_eq!(result.documents.len(), 2);
        assert_eq!(result.documents[1].id, "staff:2");
        assert_eq!(result.documents[1].fields["name"], "Alex");
        assert_eq!(result.documents[0].fields["age"], "22");
    }

    #[test]
    fn test_empty_search_result() {
        let result = SearchResult::from_value(Value::Array(vec![Value::Int(0)])).unwrap();
        assert_eq!(
            result,
            SearchResult {
                total: 0,
                documents: vec![]
            }
        );
    }

    #[test]
    fn test_search_result_missing_fields() {
        let reply = Value::Array(vec![Value::Int(1), bulk("staff:1")]);
        assert!(matches!(
            SearchResult::from_value(reply),
            Err(Error::UnexpectedReply(_))
        ));
    }

    #[test]
    fn test_aggregate_result() {
        let reply = Value::Array(vec![
            Value::Int(2),
            fields(&[("age", "22"), ("userCount", "1")]),
            fields(&[("age", "45"), ("userCount", "1")]),
        ]);
        let result = AggregateResult::from_value(reply).unwrap();
        assert_eq!(result.total, 2);
        assert_eq!(result.rows[0]["age"], "22");
        assert_eq!(result.rows[1]["userCount"], "1");
    }

    #[test]
    fn test_aggregate_to_list_is_joined() {
        let reply = Value::Array(vec![
            Value::Int(1),
            Value::Array(vec![
                bulk("isSingle"),
                bulk("true"),
                bulk("names"),
                Value::Array(vec![bulk("Bob"), bulk("Alex")]),
            ]),
        ]);
        let result = AggregateResult::from_value(reply).unwrap();
        assert_eq!(result.rows[0]["names"], "Bob,Alex");
    }

    #[test]
    fn test_index_info() {
        let reply = Value::Array(vec![
            bulk("index_name"),
            bulk("staff:index"),
            bulk("index_options"),
            Value::Array(vec![]),
            bulk("attributes"),
            Value::Array(vec![
                Value::Array(vec![
                    bulk("identifier"),
                    bulk("$.name"),
                    bulk("attribute"),
                    bulk("name"),
                    bulk("type"),
                    bulk("TEXT"),
                    bulk("WEIGHT"),
                    bulk("1"),
                    bulk("SORTABLE"),
                ]),
                Value::Array(vec![
                    bulk("identifier"),
                    bulk("$.age"),
                    bulk("attribute"),
                    bulk("age"),
                    bulk("type"),
                    bulk("NUMERIC"),
                ]),
            ]),
            bulk("num_docs"),
            bulk("2"),
            bulk("max_doc_id"),
            bulk("4"),
        ]);
        let info = IndexInfo::from_value(reply).unwrap();
        assert_eq!(
            info,
            IndexInfo {
                name: "staff:index".to_string(),
                num_docs: 2,
                attributes: vec!["name".to_string(), "age".to_string()],
            }
        );
    }

    #[test]
    fn test_index_info_num_docs_as_int_or_float() {
        let reply = Value::Array(vec![
            bulk("index_name"),
            bulk("i"),
            bulk("num_docs"),
            Value::Int(7),
        ]);
        assert_eq!(IndexInfo::from_value(reply).unwrap().num_docs, 7);

        let reply = Value::Array(vec![
            bulk("index_name"),
            bulk("i"),
            bulk("num_docs"),
            bulk("3.0"),
        ]);
        assert_eq!(IndexInfo::from_value(reply).unwrap().num_docs, 3);
    }

    #[test]
    fn test_index_info_rejects_bogus_num_docs() {
        for raw in ["-1", "-2.0", "nan", "inf", "1.5", "many"] {
            let reply = Value::Array(vec![
                bulk("index_name"),
                bulk("i"),
                bulk("num_docs"),
                bulk(raw),
            ]);
            assert!(
                matches!(IndexInfo::from_value(reply), Err(Error::UnexpectedReply(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn test_index_info_requires_name() {
        let reply = Value::Array(vec![bulk("num_docs"), bulk("1")]);
        assert!(IndexInfo::from_value(reply).is_err());
    }
}
