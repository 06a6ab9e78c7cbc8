#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard analytics pipeline over FIR case records.
//!
//! Three pure stages composed by [`dashboard`]: filter the corpus down to
//! the subset matching the criteria, aggregate that subset into the summary
//! views, then extract the trend highlights. Every call recomputes from
//! scratch; there is no shared state and no partial caching, so the result
//! is a deterministic function of `(cases, criteria, today)`.

pub mod aggregate;
pub mod filter;
pub mod trend;

use chrono::NaiveDate;
use fir_desk_analytics_models::{DashboardSummary, FilterCriteria};
use fir_desk_case_models::FirRecord;

/// Runs one full recompute cycle: filter, aggregate, trend extraction.
///
/// `today` anchors the relative time windows so callers control the clock;
/// the server passes the current date, tests pin one.
#[must_use]
pub fn dashboard(
    cases: &[FirRecord],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> DashboardSummary {
    let subset = filter::matching_cases(cases, criteria, today);
    let stats = aggregate::case_stats(&subset);
    let by_station = aggregate::count_by_station(&subset);
    let by_complaint_type = aggregate::count_by_complaint_type(&subset);
    let by_category = aggregate::count_by_category(&subset);
    let timeline = aggregate::monthly_timeline(&subset);
    let trends = trend::extract_trends(&by_complaint_type, &by_station);
    DashboardSummary {
        stats,
        by_station,
        by_complaint_type,
        by_category,
        timeline,
        trends,
    }
}

#[cfg(test)]
mod tests {
    use fir_desk_analytics_models::CaseStats;
    use fir_desk_case_models::{CasePriority, CaseStatus};

    use super::*;

    fn case(
        id: &str,
        station: &str,
        complaint_type: &str,
        category: &str,
        occurred_on: &str,
        status: CaseStatus,
        priority: CasePriority,
    ) -> FirRecord {
        FirRecord {
            id: id.to_string(),
            fir_number: format!("{id}/2025"),
            police_station: station.to_string(),
            district: "New Delhi".to_string(),
            area: "Central Delhi".to_string(),
            occurred_on: Some(occurred_on.parse().unwrap()),
            complaint_type: complaint_type.to_string(),
            category: category.to_string(),
            sections: vec!["379 IPC".to_string()],
            status,
            priority,
            complainant_name: None,
            officer_in_charge: None,
            place_of_occurrence: None,
            brief_facts: None,
            information_type: None,
        }
    }

    /// Eight cases over three stations, five categories and two months.
    /// "Connaught Place" and "Karol Bagh" both hold three cases, with
    /// Connaught Place encountered first.
    fn corpus() -> Vec<FirRecord> {
        vec![
            case(
                "1",
                "Connaught Place",
                "Theft",
                "Property Crime",
                "2025-08-10",
                CaseStatus::UnderInvestigation,
                CasePriority::Medium,
            ),
            case(
                "2",
                "Karol Bagh",
                "Molestation",
                "Crime Against Women",
                "2025-08-11",
                CaseStatus::Active,
                CasePriority::High,
            ),
            case(
                "3",
                "Rohini",
                "Burglary",
                "Property Crime",
                "2025-08-09",
                CaseStatus::Closed,
                CasePriority::Medium,
            ),
            case(
                "4",
                "Connaught Place",
                "Assault",
                "Violent Crime",
                "2025-08-08",
                CaseStatus::UnderInvestigation,
                CasePriority::High,
            ),
            case(
                "5",
                "Karol Bagh",
                "Fraud",
                "Economic Crime",
                "2025-08-07",
                CaseStatus::Active,
                CasePriority::Medium,
            ),
            case(
                "6",
                "Connaught Place",
                "Assault",
                "Violent Crime",
                "2025-07-30",
                CaseStatus::Closed,
                CasePriority::Low,
            ),
            case(
                "7",
                "Rohini",
                "Drug Possession",
                "Drug Crime",
                "2025-07-28",
                CaseStatus::UnderInvestigation,
                CasePriority::High,
            ),
            case(
                "8",
                "Karol Bagh",
                "Dowry Harassment",
                "Crime Against Women",
                "2025-07-25",
                CaseStatus::Pending,
                CasePriority::High,
            ),
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 24).unwrap()
    }

    #[test]
    fn unrestricted_summary_over_sample_corpus() {
        let summary = dashboard(&corpus(), &FilterCriteria::default(), today());

        assert_eq!(summary.stats.total, 8);

        let station_sum: u64 = summary.by_station.iter().map(|b| b.count).sum();
        assert_eq!(station_sum, 8);
        assert_eq!(summary.by_station.len(), 3);

        let property = summary
            .by_category
            .iter()
            .find(|b| b.key == "Property Crime")
            .unwrap();
        assert_eq!(property.count, 2);
        assert_eq!(summary.by_category.len(), 5);

        // Two stations tie at three cases; the first-encountered one wins.
        let hotspot = &summary.trends[1];
        assert_eq!(hotspot.title, trend::HOTSPOT_AREA);
        assert_eq!(hotspot.value, "Connaught Place");
        assert_eq!(hotspot.count, 3);

        let common = &summary.trends[0];
        assert_eq!(common.title, trend::MOST_COMMON_CRIME);
        assert_eq!(common.value, "Assault");
        assert_eq!(common.count, 2);

        let months: Vec<&str> = summary.timeline.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["2025-07", "2025-08"]);
    }

    #[test]
    fn empty_corpus_yields_zeroed_summary() {
        let summary = dashboard(&[], &FilterCriteria::default(), today());
        assert_eq!(summary.stats, CaseStats::default());
        assert!(summary.by_station.is_empty());
        assert!(summary.by_complaint_type.is_empty());
        assert!(summary.by_category.is_empty());
        assert!(summary.timeline.is_empty());
        assert_eq!(summary.trends.len(), 2);
        for trend in &summary.trends {
            assert_eq!(trend.value, trend::EMPTY_VALUE);
            assert_eq!(trend.count, 0);
        }
    }

    #[test]
    fn criteria_narrow_every_view_consistently() {
        let criteria = FilterCriteria {
            category: Some("Property Crime".to_string()),
            ..FilterCriteria::default()
        };
        let summary = dashboard(&corpus(), &criteria, today());
        assert_eq!(summary.stats.total, 2);
        assert_eq!(summary.by_category.len(), 1);
        let sum: u64 = summary.by_station.iter().map(|b| b.count).sum();
        assert_eq!(sum, 2);
        assert_eq!(summary.trends[0].value, "Theft");
        assert_eq!(summary.trends[0].count, 1);
    }

    #[test]
    fn recompute_is_deterministic() {
        let cases = corpus();
        let criteria = FilterCriteria::default();
        let first = dashboard(&cases, &criteria, today());
        let second = dashboard(&cases, &criteria, today());
        assert_eq!(first, second);
    }
}
