//! Trend extraction stage: picks the maximum-count entry out of each
//! aggregate bucket.

use fir_desk_analytics_models::{BucketEntry, TrendEntry, TrendSeverity};

/// Title of the complaint-type trend.
pub const MOST_COMMON_CRIME: &str = "Most Common Crime";

/// Title of the station trend.
pub const HOTSPOT_AREA: &str = "Hotspot Area";

/// Placeholder value reported when a bucket is empty.
pub const EMPTY_VALUE: &str = "None";

/// Returns the bucket entry with the highest count, or `None` for an empty
/// bucket.
///
/// The reduction compares with strict greater-than, so on equal counts the
/// first-encountered entry keeps winning. Bucket order comes from the
/// aggregation stage's first-encounter ordering, which makes ties
/// deterministic for a fixed input order.
#[must_use]
pub fn dominant_entry(bucket: &[BucketEntry]) -> Option<&BucketEntry> {
    let mut winner: Option<&BucketEntry> = None;
    for entry in bucket {
        match winner {
            Some(current) if entry.count > current.count => winner = Some(entry),
            Some(_) => {}
            None => winner = Some(entry),
        }
    }
    winner
}

/// Builds the two dashboard trend entries from the complaint-type and
/// station buckets.
///
/// Severity tags are fixed per trend kind; they are presentation metadata,
/// not a computed value.
#[must_use]
pub fn extract_trends(
    by_complaint_type: &[BucketEntry],
    by_station: &[BucketEntry],
) -> Vec<TrendEntry> {
    vec![
        trend_from(by_complaint_type, MOST_COMMON_CRIME, TrendSeverity::Critical),
        trend_from(by_station, HOTSPOT_AREA, TrendSeverity::Elevated),
    ]
}

fn trend_from(bucket: &[BucketEntry], title: &str, severity: TrendSeverity) -> TrendEntry {
    dominant_entry(bucket).map_or_else(
        || TrendEntry {
            title: title.to_string(),
            value: EMPTY_VALUE.to_string(),
            count: 0,
            severity,
        },
        |entry| TrendEntry {
            title: title.to_string(),
            value: entry.key.clone(),
            count: entry.count,
            severity,
        },
    )
}
