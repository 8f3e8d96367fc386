//! Wire models for the summary and hashtag comparison endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Per-search metadata written alongside the collected tweets.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchSummary {
    pub term: String,
    pub date: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub num_tweets: u64,
    #[serde(default)]
    pub path: String,
}

/// One compared search: `colname` names the per-hashtag count field in
/// [`HashtagRecord`], `text` is the display label, `date_path` locates the
/// dataset on disk.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeriesDescriptor {
    pub id: String,
    pub colname: String,
    pub text: String,
    pub date_path: String,
}

/// One hashtag's counts across every compared search. The per-series count
/// fields are named by each series' `colname`, so they land in the
/// flattened map alongside anything else the server includes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HashtagRecord {
    pub hashtag: String,
    #[serde(flatten)]
    pub columns: BTreeMap<String, serde_json::Value>,
}

impl HashtagRecord {
    /// Numeric projection of one series column. Missing or non-numeric
    /// values coerce to NaN; scales and the renderer tolerate that.
    pub fn count(&self, colname: &str) -> f64 {
        match self.columns.get(colname) {
            Some(serde_json::Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
            Some(serde_json::Value::String(text)) => text.trim().parse().unwrap_or(f64::NAN),
            _ => f64::NAN,
        }
    }
}

/// Response body of the hashtag comparison endpoint. `hashtags` arrives
/// pre-sorted by the server and is never re-sorted client side.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ComparisonPayload {
    pub summary: Vec<SeriesDescriptor>,
    pub hashtags: Vec<HashtagRecord>,
}

// `num_tweets` shows up both as a JSON number and as a numeric string
// depending on which pipeline version wrote the summary.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let count = match &value {
        serde_json::Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().map(|float| float as u64))
            .unwrap_or(0),
        serde_json::Value::String(text) => text.trim().parse().unwrap_or(0),
        _ => 0,
    };
    Ok(count)
}
