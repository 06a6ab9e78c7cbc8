#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Input and output types for the dashboard analytics pipeline.
//!
//! [`FilterCriteria`] is the pipeline's control input; the remaining types
//! are the summary views one recompute cycle produces. Everything here is
//! plain data: the stages that fill these types live in
//! `fir_desk_analytics`.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Relative time window selectable on the dashboard.
///
/// Wire values are the selector tokens the control boundary sends
/// (`"1month"`, `"3months"`, `"6months"`, `"1year"`).
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
pub enum TimeRange {
    #[serde(rename = "1month")]
    #[strum(serialize = "1month")]
    LastMonth,
    #[serde(rename = "3months")]
    #[strum(serialize = "3months")]
    LastThreeMonths,
    #[serde(rename = "6months")]
    #[strum(serialize = "6months")]
    LastSixMonths,
    #[serde(rename = "1year")]
    #[strum(serialize = "1year")]
    LastYear,
}

impl TimeRange {
    /// Returns the window length in whole months.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::LastMonth => 1,
            Self::LastThreeMonths => 3,
            Self::LastSixMonths => 6,
            Self::LastYear => 12,
        }
    }

    /// Returns the inclusive cutoff date for this window ending at `today`.
    ///
    /// Month arithmetic clamps at month ends (Mar 31 minus one month is
    /// Feb 28/29). Saturates at the calendar floor if subtraction leaves the
    /// representable range.
    #[must_use]
    pub fn cutoff_from(self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_months(Months::new(self.months()))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::LastMonth,
            Self::LastThreeMonths,
            Self::LastSixMonths,
            Self::LastYear,
        ]
    }
}

/// Conjunctive filter criteria for one dashboard recompute.
///
/// `None` in any field means that dimension is unrestricted (the `"All"`
/// wildcard at the control boundary).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Relative time window. `None` applies no date cutoff.
    pub time_range: Option<TimeRange>,
    /// Exact area match. `None` matches every area.
    pub area: Option<String>,
    /// Exact category match. `None` matches every category.
    pub category: Option<String>,
}

impl FilterCriteria {
    /// Wildcard token meaning "no restriction" at the control boundary.
    pub const WILDCARD: &'static str = "All";

    /// Builds criteria from raw selector values as received off the wire.
    ///
    /// Lenient by design: an unrecognized time-range token applies no
    /// cutoff, and an absent or `"All"` area/category leaves that dimension
    /// unrestricted. Area and category values outside the data's value sets
    /// are kept verbatim; they simply match no records.
    #[must_use]
    pub fn from_params(
        time_range: Option<&str>,
        area: Option<&str>,
        category: Option<&str>,
    ) -> Self {
        Self {
            time_range: time_range.and_then(|token| token.parse().ok()),
            area: area
                .filter(|value| *value != Self::WILDCARD)
                .map(ToString::to_string),
            category: category
                .filter(|value| *value != Self::WILDCARD)
                .map(ToString::to_string),
        }
    }
}

/// Count of cases sharing one grouping key (a station, a complaint type,
/// or a category).
///
/// Bucket vectors preserve first-encounter order from the filtered subset;
/// they are not sorted by count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketEntry {
    /// The grouping key's raw value.
    pub key: String,
    /// Number of cases with this key.
    pub count: u64,
}

/// Case count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// Raw `YYYY-MM` month key. Timeline ordering uses this key.
    pub month: String,
    /// Display label, e.g. `"Aug 2025"`. Never used for ordering.
    pub label: String,
    /// Number of cases occurring in this month.
    pub count: u64,
}

/// Scalar status counters over the filtered subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStats {
    /// Size of the filtered subset.
    pub total: u64,
    /// Cases with status `Active`.
    pub active: u64,
    /// Cases with status `Under Investigation`.
    pub under_investigation: u64,
    /// Cases with status `Closed`.
    pub closed: u64,
    /// Cases with priority `High`, regardless of status.
    pub high_priority: u64,
}

/// Static severity tag attached to a trend entry.
///
/// Presentation metadata fixed per trend kind, not computed from the data.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendSeverity {
    /// The dominant complaint type.
    Critical,
    /// The dominant station or area.
    Elevated,
}

/// One highlighted maximum extracted from an aggregate bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendEntry {
    /// Fixed display title, e.g. `"Most Common Crime"`.
    pub title: String,
    /// Winning bucket key, or `"None"` when the bucket is empty.
    pub value: String,
    /// Count behind the winning key. Zero when the bucket is empty.
    pub count: u64,
    /// Static severity tag for this trend kind.
    pub severity: TrendSeverity,
}

/// Everything one dashboard recompute cycle produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Scalar status counters.
    pub stats: CaseStats,
    /// Case counts grouped by police station.
    pub by_station: Vec<BucketEntry>,
    /// Case counts grouped by complaint type.
    pub by_complaint_type: Vec<BucketEntry>,
    /// Case counts grouped by category.
    pub by_category: Vec<BucketEntry>,
    /// Monthly case counts, ascending by month key.
    pub timeline: Vec<TimelinePoint>,
    /// Highlighted maxima (most common crime, hotspot area).
    pub trends: Vec<TrendEntry>,
}
