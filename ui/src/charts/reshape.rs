//! Pure reshaping of the comparison payload ahead of scale construction.

use super::model::{ComparisonPayload, HashtagRecord, SeriesDescriptor};

/// Hashtags beyond this rank are dropped before rendering. Server order is
/// preserved for the ones that remain.
pub const MAX_HASHTAGS: usize = 25;

/// Ordered (column key, display label) pair for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesColumn {
    pub colname: String,
    pub label: String,
}

/// One bar's worth of data: the column key it came from and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesCount {
    pub name: String,
    pub value: f64,
}

/// A hashtag with its counts projected per series, in series order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReshapedHashtag {
    pub hashtag: String,
    pub counts: Vec<SeriesCount>,
}

/// Everything the chart needs, derived in one pass from the raw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonData {
    pub columns: Vec<SeriesColumn>,
    pub hashtags: Vec<ReshapedHashtag>,
    pub compared_with: Vec<SeriesDescriptor>,
    pub y_max: f64,
}

impl ComparisonData {
    pub fn from_payload(payload: &ComparisonPayload, primary_id: &str) -> Self {
        let columns = series_columns(&payload.summary);
        let retained = &payload.hashtags[..payload.hashtags.len().min(MAX_HASHTAGS)];
        let hashtags = reshape_hashtags(retained, &columns);
        let compared_with = compared_with(&payload.summary, primary_id);
        let y_max = primary_max(retained, &payload.summary, primary_id);

        Self {
            columns,
            hashtags,
            compared_with,
            y_max,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hashtags.is_empty()
    }
}

/// Every series except the primary search, relative order preserved. These
/// become the "compared with" links under the chart.
pub fn compared_with(summary: &[SeriesDescriptor], primary_id: &str) -> Vec<SeriesDescriptor> {
    summary
        .iter()
        .filter(|series| series.id != primary_id)
        .cloned()
        .collect()
}

/// Ordered column key / label pairs, in `summary` array order.
pub fn series_columns(summary: &[SeriesDescriptor]) -> Vec<SeriesColumn> {
    summary
        .iter()
        .map(|series| SeriesColumn {
            colname: series.colname.clone(),
            label: series.text.clone(),
        })
        .collect()
}

fn reshape_hashtags(records: &[HashtagRecord], columns: &[SeriesColumn]) -> Vec<ReshapedHashtag> {
    records
        .iter()
        .map(|record| ReshapedHashtag {
            hashtag: record.hashtag.clone(),
            counts: columns
                .iter()
                .map(|column| SeriesCount {
                    name: column.colname.clone(),
                    value: record.count(&column.colname),
                })
                .collect(),
        })
        .collect()
}

// The y-domain tracks only the primary search's peak, so comparison series
// that exceed it clip at the top of the plot. Faithful to the source
// behavior; see DESIGN.md before changing.
fn primary_max(records: &[HashtagRecord], summary: &[SeriesDescriptor], primary_id: &str) -> f64 {
    let Some(primary) = summary.iter().find(|series| series.id == primary_id) else {
        return 0.0;
    };

    records.iter().fold(0.0, |max, record| {
        let value = record.count(&primary.colname);
        // NaN comparisons are false, so malformed counts never win.
        if value > max {
            value
        } else {
            max
        }
    })
}
