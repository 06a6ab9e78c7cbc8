#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical FIR (First Information Report) case record and its enumerations.
//!
//! Every intake path (bulk corpus load, form registration) produces
//! [`FirRecord`] values in this shared shape. The analytics pipeline and the
//! history browser consume it read-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Investigation status of a registered case.
///
/// Wire values are the display strings printed on FIR documents
/// (`"Under Investigation"`, not a cased identifier).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CaseStatus {
    /// Registered and open, not yet assigned for investigation.
    Active,
    /// Assigned to an investigating officer.
    #[serde(rename = "Under Investigation")]
    #[strum(serialize = "Under Investigation")]
    UnderInvestigation,
    /// Investigation concluded.
    Closed,
    /// Awaiting approval or further information from the complainant.
    Pending,
}

impl CaseStatus {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Active,
            Self::UnderInvestigation,
            Self::Closed,
            Self::Pending,
        ]
    }
}

/// Priority assigned to a case at registration.
///
/// Ordering is meaningful: `Low < Medium < High`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CasePriority {
    Low,
    Medium,
    High,
}

impl CasePriority {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

/// How the first information reached the police station.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum InformationType {
    /// Written complaint handed in or mailed.
    Written,
    /// Oral statement recorded by the duty officer.
    Oral,
}

/// A First Information Report normalized to the canonical schema.
///
/// Records are immutable once handed to the pipeline; derived values (such as
/// the month key) are computed on demand and never stored back. The
/// occurrence date is optional: a record whose source date was missing or
/// unparseable is still kept for counting purposes, it just never matches a
/// bounded time window and carries no month key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirRecord {
    /// Stable unique identifier (UUID for cases registered through intake).
    pub id: String,
    /// Station-scoped FIR number, e.g. `"145/2025"`.
    pub fir_number: String,
    /// Police station where the case is registered.
    pub police_station: String,
    /// Administrative district.
    pub district: String,
    /// Area of occurrence used by the dashboard filters.
    pub area: String,
    /// Date of occurrence. `None` when the source record has a missing or
    /// unparseable date field.
    pub occurred_on: Option<NaiveDate>,
    /// Specific complaint type, e.g. `"Mobile Theft"`.
    pub complaint_type: String,
    /// Broad offence category, e.g. `"Property Crime"`.
    pub category: String,
    /// Legal sections applied. Non-empty and ordered as cited.
    pub sections: Vec<String>,
    /// Investigation status.
    pub status: CaseStatus,
    /// Assigned priority.
    pub priority: CasePriority,
    /// Name of the complainant, if recorded.
    pub complainant_name: Option<String>,
    /// Officer-in-charge of the investigation, if assigned.
    pub officer_in_charge: Option<String>,
    /// Free-text place of occurrence.
    pub place_of_occurrence: Option<String>,
    /// Brief facts of the case as narrated.
    pub brief_facts: Option<String>,
    /// How the information was received.
    pub information_type: Option<InformationType>,
}

impl FirRecord {
    /// Returns the `YYYY-MM` month key derived from the occurrence date.
    ///
    /// The key is always derived, never stored, so it cannot drift from the
    /// date. `None` when the record has no occurrence date.
    #[must_use]
    pub fn month_key(&self) -> Option<String> {
        self.occurred_on
            .map(|date| date.format("%Y-%m").to_string())
    }
}

/// Formats a date as a human-readable month label, e.g. `"Aug 2025"`.
///
/// Display-only: timeline ordering must use the raw `YYYY-MM` key, never
/// this label.
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(occurred_on: Option<NaiveDate>) -> FirRecord {
        FirRecord {
            id: "1".to_string(),
            fir_number: "145/2025".to_string(),
            police_station: "Central".to_string(),
            district: "New Delhi".to_string(),
            area: "Connaught Place".to_string(),
            occurred_on,
            complaint_type: "Mobile Theft".to_string(),
            category: "Property Crime".to_string(),
            sections: vec!["Section 379 IPC".to_string()],
            status: CaseStatus::Active,
            priority: CasePriority::High,
            complainant_name: None,
            officer_in_charge: None,
            place_of_occurrence: None,
            brief_facts: None,
            information_type: None,
        }
    }

    #[test]
    fn month_key_derived_from_date() {
        let rec = record(NaiveDate::from_ymd_opt(2025, 8, 10));
        assert_eq!(rec.month_key().as_deref(), Some("2025-08"));
    }

    #[test]
    fn month_key_pads_single_digit_months() {
        let rec = record(NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(rec.month_key().as_deref(), Some("2025-03"));
    }

    #[test]
    fn month_key_absent_without_date() {
        assert_eq!(record(None).month_key(), None);
    }

    #[test]
    fn month_label_formats_short_month_and_year() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
        assert_eq!(month_label(date), "Aug 2025");
    }

    #[test]
    fn status_wire_strings_round_trip() {
        for status in CaseStatus::all() {
            let text = status.to_string();
            assert_eq!(text.parse::<CaseStatus>().unwrap(), *status);
        }
        assert_eq!(
            CaseStatus::UnderInvestigation.to_string(),
            "Under Investigation"
        );
    }

    #[test]
    fn priority_ordering_low_to_high() {
        assert!(CasePriority::Low < CasePriority::Medium);
        assert!(CasePriority::Medium < CasePriority::High);
        assert_eq!(CasePriority::all().len(), 3);
    }

    #[test]
    fn information_type_parses_wire_values() {
        assert_eq!(
            "Written".parse::<InformationType>().unwrap(),
            InformationType::Written
        );
        assert_eq!(
            "Oral".parse::<InformationType>().unwrap(),
            InformationType::Oral
        );
        assert!("Telegraph".parse::<InformationType>().is_err());
    }
}
