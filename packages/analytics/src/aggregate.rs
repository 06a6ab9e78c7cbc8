//! Aggregation stage: folds the filtered subset into the dashboard's
//! orthogonal summary views.
//!
//! Every view is a full recomputation over the subset it is given. Nothing
//! here caches or updates incrementally; the caller re-runs the fold when
//! its input changes.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use fir_desk_analytics_models::{BucketEntry, CaseStats, TimelinePoint};
use fir_desk_case_models::{CasePriority, CaseStatus, FirRecord, month_label};

/// Counts cases per police station.
#[must_use]
pub fn count_by_station(cases: &[&FirRecord]) -> Vec<BucketEntry> {
    count_by(cases, |case| case.police_station.as_str())
}

/// Counts cases per complaint type.
#[must_use]
pub fn count_by_complaint_type(cases: &[&FirRecord]) -> Vec<BucketEntry> {
    count_by(cases, |case| case.complaint_type.as_str())
}

/// Counts cases per offence category.
#[must_use]
pub fn count_by_category(cases: &[&FirRecord]) -> Vec<BucketEntry> {
    count_by(cases, |case| case.category.as_str())
}

/// Single-pass fold shared by the categorical projections.
///
/// Buckets appear in first-encounter order and are never re-sorted, so a
/// stable input order yields a stable bucket order.
fn count_by<'a>(
    cases: &[&'a FirRecord],
    key_of: impl Fn(&'a FirRecord) -> &'a str,
) -> Vec<BucketEntry> {
    let mut buckets: Vec<BucketEntry> = Vec::new();
    for &case in cases {
        let key = key_of(case);
        match buckets.iter_mut().find(|bucket| bucket.key == key) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(BucketEntry {
                key: key.to_string(),
                count: 1,
            }),
        }
    }
    buckets
}

/// Counts cases per occurrence month, ascending by the raw `YYYY-MM` key.
///
/// Ordering relies on the key's lexicographic sort matching chronological
/// order; the display label is attached after the fold and never compared.
/// Cases without an occurrence date carry no month key and are omitted.
#[must_use]
pub fn monthly_timeline(cases: &[&FirRecord]) -> Vec<TimelinePoint> {
    let mut months: BTreeMap<String, (NaiveDate, u64)> = BTreeMap::new();
    for &case in cases {
        if let (Some(key), Some(date)) = (case.month_key(), case.occurred_on) {
            months.entry(key).or_insert((date, 0)).1 += 1;
        }
    }
    months
        .into_iter()
        .map(|(month, (date, count))| TimelinePoint {
            month,
            label: month_label(date),
            count,
        })
        .collect()
}

/// Computes the scalar status counters in a single pass.
///
/// `Pending` cases count toward `total` only; high priority is counted
/// independently of status.
#[must_use]
pub fn case_stats(cases: &[&FirRecord]) -> CaseStats {
    let mut stats = CaseStats::default();
    for &case in cases {
        stats.total += 1;
        match case.status {
            CaseStatus::Active => stats.active += 1,
            CaseStatus::UnderInvestigation => stats.under_investigation += 1,
            CaseStatus::Closed => stats.closed += 1,
            CaseStatus::Pending => {}
        }
        if case.priority == CasePriority::High {
            stats.high_priority += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use fir_desk_case_models::InformationType;

    use super::*;

    fn case(
        id: &str,
        station: &str,
        complaint_type: &str,
        category: &str,
        occurred_on: Option<&str>,
        status: CaseStatus,
        priority: CasePriority,
    ) -> FirRecord {
        FirRecord {
            id: id.to_string(),
            fir_number: format!("{id}/2025"),
            police_station: station.to_string(),
            district: "New Delhi".to_string(),
            area: "Central Delhi".to_string(),
            occurred_on: occurred_on.map(|s| s.parse().unwrap()),
            complaint_type: complaint_type.to_string(),
            category: category.to_string(),
            sections: vec!["379 IPC".to_string()],
            status,
            priority,
            complainant_name: None,
            officer_in_charge: None,
            place_of_occurrence: None,
            brief_facts: None,
            information_type: Some(InformationType::Written),
        }
    }

    fn sample() -> Vec<FirRecord> {
        vec![
            case(
                "1",
                "Connaught Place",
                "Theft",
                "Property Crime",
                Some("2025-08-10"),
                CaseStatus::UnderInvestigation,
                CasePriority::Medium,
            ),
            case(
                "2",
                "Karol Bagh",
                "Molestation",
                "Crime Against Women",
                Some("2025-08-11"),
                CaseStatus::Active,
                CasePriority::High,
            ),
            case(
                "3",
                "Rohini",
                "Burglary",
                "Property Crime",
                Some("2025-07-28"),
                CaseStatus::Closed,
                CasePriority::Medium,
            ),
            case(
                "4",
                "Connaught Place",
                "Assault",
                "Violent Crime",
                Some("2025-08-08"),
                CaseStatus::Pending,
                CasePriority::High,
            ),
        ]
    }

    #[test]
    fn buckets_keep_first_encounter_order() {
        let cases = sample();
        let refs: Vec<&FirRecord> = cases.iter().collect();
        let buckets = count_by_station(&refs);
        let keys: Vec<&str> = buckets.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["Connaught Place", "Karol Bagh", "Rohini"]);
        assert_eq!(buckets[0].count, 2);
    }

    #[test]
    fn bucket_counts_conserve_subset_size() {
        let cases = sample();
        let refs: Vec<&FirRecord> = cases.iter().collect();
        for buckets in [
            count_by_station(&refs),
            count_by_complaint_type(&refs),
            count_by_category(&refs),
        ] {
            let sum: u64 = buckets.iter().map(|b| b.count).sum();
            assert_eq!(sum, refs.len() as u64);
        }
    }

    #[test]
    fn timeline_sorts_by_raw_key_not_encounter_order() {
        // August cases appear before July in the corpus; output must still
        // be ascending by month key.
        let cases = sample();
        let refs: Vec<&FirRecord> = cases.iter().collect();
        let timeline = monthly_timeline(&refs);
        let months: Vec<&str> = timeline.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["2025-07", "2025-08"]);
        let labels: Vec<&str> = timeline.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Jul 2025", "Aug 2025"]);
        assert_eq!(timeline[1].count, 3);
    }

    #[test]
    fn dateless_case_counts_everywhere_except_timeline() {
        let cases = vec![
            case(
                "1",
                "Connaught Place",
                "Theft",
                "Property Crime",
                None,
                CaseStatus::Active,
                CasePriority::High,
            ),
            case(
                "2",
                "Connaught Place",
                "Theft",
                "Property Crime",
                Some("2025-08-10"),
                CaseStatus::Active,
                CasePriority::Low,
            ),
        ];
        let refs: Vec<&FirRecord> = cases.iter().collect();
        assert_eq!(count_by_station(&refs)[0].count, 2);
        assert_eq!(case_stats(&refs).total, 2);
        let timeline = monthly_timeline(&refs);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].count, 1);
    }

    #[test]
    fn stats_count_all_five_scalars() {
        let cases = sample();
        let refs: Vec<&FirRecord> = cases.iter().collect();
        let stats = case_stats(&refs);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.under_investigation, 1);
        assert_eq!(stats.closed, 1);
        assert_eq!(stats.high_priority, 2);
        // Pending accounts for the remainder.
        assert!(stats.active + stats.under_investigation + stats.closed <= stats.total);
    }

    #[test]
    fn empty_subset_yields_zeroes_and_empty_views() {
        let refs: Vec<&FirRecord> = Vec::new();
        assert!(count_by_station(&refs).is_empty());
        assert!(count_by_complaint_type(&refs).is_empty());
        assert!(count_by_category(&refs).is_empty());
        assert!(monthly_timeline(&refs).is_empty());
        assert_eq!(case_stats(&refs), CaseStats::default());
    }
}
