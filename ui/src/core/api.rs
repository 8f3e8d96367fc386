//! Read-only JSON endpoints feeding the summary header and the comparison chart.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::charts::model::{ComparisonPayload, SearchSummary};

/// API origin prefix. Empty means same-origin relative URLs, which is how
/// the app is served in production.
pub const API_BASE: &str = "";

/// The artifact's single error kind. Network failures and non-2xx
/// responses collapse together; callers only ever log it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("fetch failed: {0}")]
    Fetch(String),
}

pub fn summary_url(date_path: &str) -> String {
    format!("{API_BASE}/summary/{date_path}/summary.json")
}

pub fn hashtags_url(search_id: &str, compare_ids: &[String]) -> String {
    format!(
        "{API_BASE}/api/hashtags/{search_id}?ids={}",
        compare_ids.join(",")
    )
}

/// External search page for a hashtag, opened from the x-axis labels.
pub fn hashtag_search_url(hashtag: &str) -> String {
    format!("https://twitter.com/search?q=%23{hashtag}")
}

pub async fn fetch_summary(date_path: &str) -> Result<SearchSummary, ApiError> {
    get_json(&summary_url(date_path)).await
}

pub async fn fetch_comparison(
    search_id: &str,
    compare_ids: &[String],
) -> Result<ComparisonPayload, ApiError> {
    get_json(&hashtags_url(search_id, compare_ids)).await
}

#[cfg(target_arch = "wasm32")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| ApiError::Fetch(err.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Fetch(format!(
            "{url} returned status {}",
            response.status()
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Fetch(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| ApiError::Fetch(err.to_string()))?;

    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Fetch(err.to_string()))
}
