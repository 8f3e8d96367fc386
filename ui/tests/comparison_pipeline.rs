//! End-to-end checks for the comparison pipeline: raw endpoint JSON in,
//! chart-ready data out. Exercises the same path the view runs after a
//! successful fetch.

use ui::charts::model::{ComparisonPayload, SearchSummary};
use ui::charts::reshape::{ComparisonData, MAX_HASHTAGS};
use ui::core::format;

fn decode(json: &str) -> ComparisonPayload {
    serde_json::from_str(json).expect("payload should decode")
}

#[test]
fn rendered_hashtag_count_is_min_of_25_and_returned() {
    let few = decode(
        r#"{
            "summary": [{"id":"1","colname":"count_1","text":"a","date_path":"a"}],
            "hashtags": [
                {"hashtag":"x","count_1":3},
                {"hashtag":"y","count_1":2},
                {"hashtag":"z","count_1":1}
            ]
        }"#,
    );
    assert_eq!(ComparisonData::from_payload(&few, "1").hashtags.len(), 3);

    let records: Vec<String> = (0..60)
        .map(|i| format!(r#"{{"hashtag":"tag{i}","count_1":{i}}}"#))
        .collect();
    let many = decode(&format!(
        r#"{{
            "summary": [{{"id":"1","colname":"count_1","text":"a","date_path":"a"}}],
            "hashtags": [{}]
        }}"#,
        records.join(",")
    ));
    assert_eq!(
        ComparisonData::from_payload(&many, "1").hashtags.len(),
        MAX_HASHTAGS
    );
}

#[test]
fn compared_with_drops_the_primary_and_keeps_order() {
    let payload = decode(
        r#"{
            "summary": [
                {"id":"5","colname":"count_5","text":"first","date_path":"a"},
                {"id":"2","colname":"count_2","text":"second","date_path":"b"},
                {"id":"8","colname":"count_8","text":"third","date_path":"c"}
            ],
            "hashtags": [{"hashtag":"x","count_5":1,"count_2":2,"count_8":3}]
        }"#,
    );

    let data = ComparisonData::from_payload(&payload, "2");
    let texts: Vec<&str> = data
        .compared_with
        .iter()
        .map(|series| series.text.as_str())
        .collect();
    assert_eq!(texts, vec!["first", "third"]);
}

#[test]
fn every_group_carries_one_count_per_series() {
    let payload = decode(
        r#"{
            "summary": [
                {"id":"1","colname":"count_1","text":"a","date_path":"a"},
                {"id":"2","colname":"count_2","text":"b","date_path":"b"},
                {"id":"3","colname":"count_3","text":"c","date_path":"c"}
            ],
            "hashtags": [
                {"hashtag":"x","count_1":1,"count_2":2,"count_3":3},
                {"hashtag":"y","count_1":4,"count_3":6}
            ]
        }"#,
    );

    let data = ComparisonData::from_payload(&payload, "1");
    for group in &data.hashtags {
        assert_eq!(group.counts.len(), 3);
    }
    // The missing count_2 projects as NaN rather than shrinking the vector.
    assert!(data.hashtags[1].counts[1].value.is_nan());
}

#[test]
fn y_domain_ignores_comparison_series_peaks() {
    let payload = decode(
        r#"{
            "summary": [
                {"id":"1","colname":"count_1","text":"a","date_path":"a"},
                {"id":"2","colname":"count_2","text":"b","date_path":"b"}
            ],
            "hashtags": [
                {"hashtag":"x","count_1":10,"count_2":500},
                {"hashtag":"y","count_1":7,"count_2":900}
            ]
        }"#,
    );

    // Comparison bars taller than the primary's peak clip at the top.
    assert_eq!(ComparisonData::from_payload(&payload, "1").y_max, 10.0);
}

#[test]
fn single_series_scenario_matches_expectations() {
    let payload = decode(
        r#"{
            "summary": [{"id":"S1","colname":"count_S1","text":"A","date_path":"a"}],
            "hashtags": [
                {"hashtag":"x","count_S1":10},
                {"hashtag":"y","count_S1":5}
            ]
        }"#,
    );

    let data = ComparisonData::from_payload(&payload, "S1");
    assert_eq!(data.hashtags.len(), 2);
    assert_eq!(data.hashtags[0].counts[0].value, 10.0);
    assert_eq!(data.hashtags[1].counts[0].value, 5.0);
    assert_eq!(data.y_max, 10.0);
    assert!(data.compared_with.is_empty());
}

#[test]
fn summary_header_fields_decode_and_format() {
    let info: SearchSummary = serde_json::from_str(
        r#"{"term":"ferguson","date":"2016-08-22 10:04:31","num_tweets":1234567,"path":"20160822-abc123"}"#,
    )
    .unwrap();

    assert_eq!(info.term, "ferguson");
    assert_eq!(info.date, "2016-08-22 10:04:31");
    assert_eq!(format::format_count(info.num_tweets), "1,234,567");
}
