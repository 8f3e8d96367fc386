use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::charts::model::SeriesDescriptor;
use crate::charts::reshape::ComparisonData;
use crate::charts::HashtagComparisonChart;
use crate::core::{api, format};

/// Hashtag comparison page for one search. The two fetches are independent:
/// the summary feeds the header, the comparison payload feeds the chart, and
/// neither waits on the other. Dropping the view drops both resources, which
/// cancels anything still in flight.
#[component]
pub fn Compare(search_id: String, date_path: String, ids: String) -> Element {
    let compare_ids: Vec<String> = ids
        .split(',')
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    let primary_id = search_id.clone();

    let summary = use_resource(move || {
        let date_path = date_path.clone();
        async move {
            match api::fetch_summary(&date_path).await {
                Ok(info) => Some(info),
                Err(err) => {
                    warn!("summary fetch failed: {err}");
                    None
                }
            }
        }
    });

    let comparison = use_resource(move || {
        let search_id = search_id.clone();
        let compare_ids = compare_ids.clone();
        async move {
            match api::fetch_comparison(&search_id, &compare_ids).await {
                Ok(payload) => Some(payload),
                Err(err) => {
                    warn!("hashtag comparison fetch failed: {err}");
                    None
                }
            }
        }
    });

    let summary_header = match &*summary.read() {
        Some(Some(info)) => rsx! {
            h1 { class: "compare__term", "{info.term}" }
            p { class: "compare__date", "{info.date}" }
            p { class: "compare__tweets", "{format::format_count(info.num_tweets)} tweets" }
        },
        // Pending and failed look the same: the fields stay unset.
        _ => rsx! {
            h1 { class: "compare__term compare__term--unset" }
        },
    };

    let chart_region = match &*comparison.read() {
        None => rsx! {
            p { class: "compare__loading", "Loading hashtag comparison…" }
        },
        // Fetch failed: no bars, no axes, no legend, and no fallback UI.
        // The warning above is the only trace.
        Some(None) => rsx! {},
        Some(Some(payload)) => {
            let data = ComparisonData::from_payload(payload, &primary_id);
            rsx! {
                HashtagComparisonChart { data: data.clone() }
                ComparedWithLinks {
                    series: data.compared_with,
                    primary_id: primary_id.clone(),
                }
            }
        }
    };

    rsx! {
        section { class: "page page-compare",
            header { class: "compare__summary", {summary_header} }
            {chart_region}
        }
    }
}

/// Links to each compared search's own comparison page, labeled by its
/// display text. The primary search was already filtered out upstream.
#[component]
fn ComparedWithLinks(series: Vec<SeriesDescriptor>, primary_id: String) -> Element {
    if series.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "compare__links",
            span { class: "compare__links-label", "compared with:" }
            ul {
                for entry in series.into_iter() {
                    li {
                        a {
                            href: "/compare/{entry.id}/{entry.date_path}?ids={primary_id}",
                            "{entry.text}"
                        }
                    }
                }
            }
        }
    }
}
