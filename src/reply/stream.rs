use std::collections::BTreeMap;

use redis::streams::StreamId;

use super::to_string;
use crate::TourResult;

/// A stream entry with its fields rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEntry {
    pub id: String,
    pub fields: BTreeMap<String, String>,
}

impl StreamEntry {
    pub fn from_stream_id(entry: &StreamId) -> TourResult<Self> {
        let fields = entry
            .map
            .iter()
            .map(|(name, value)| -> TourResult<(String, String)> {
                Ok((name.clone(), to_string(value)?))
            })
            .collect::<TourResult<BTreeMap<_, _>>>()?;
        Ok(StreamEntry {
            id: entry.id.clone(),
            fields,
        })
    }
}
