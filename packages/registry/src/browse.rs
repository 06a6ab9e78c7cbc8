//! Case history browsing: text search, status filtering, and sorting over
//! a register snapshot.

use std::cmp::Ordering;

use fir_desk_case_models::FirRecord;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Column a history listing can be sorted by.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortKey {
    /// Occurrence date. Records without a date sort after dated ones.
    #[default]
    Date,
    /// FIR number, lexicographic.
    FirNumber,
    /// Complainant name; records without one sort first.
    ComplainantName,
    /// Police station name.
    PoliceStation,
    /// Case status wire string.
    Status,
}

/// Direction of a sort.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortOrder {
    /// Smallest key first.
    Asc,
    /// Largest key first. The default: newest cases lead a history view.
    #[default]
    Desc,
}

/// A history browsing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseQuery {
    /// Case-insensitive free-text term matched against every field.
    pub search: Option<String>,
    /// Exact status wire string, e.g. `Under Investigation`.
    pub status: Option<String>,
    /// Sort column.
    pub sort_key: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
}

/// Filters and sorts a register snapshot for a history listing.
///
/// Both filters must match for a case to appear. Sorting is stable, so
/// cases with equal keys keep their register order.
#[must_use]
pub fn browse<'a>(cases: &'a [FirRecord], query: &BrowseQuery) -> Vec<&'a FirRecord> {
    let needle = query
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let mut matches: Vec<&FirRecord> = cases
        .iter()
        .filter(|case| {
            needle
                .as_deref()
                .is_none_or(|term| haystack(case).contains(term))
        })
        .filter(|case| {
            query
                .status
                .as_deref()
                .is_none_or(|status| case.status.as_ref() == status)
        })
        .collect();

    matches.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, query.sort_key);
        match query.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    matches
}

fn compare_by_key(a: &FirRecord, b: &FirRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => match (a.occurred_on, b.occurred_on) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::FirNumber => a.fir_number.cmp(&b.fir_number),
        SortKey::ComplainantName => a.complainant_name.cmp(&b.complainant_name),
        SortKey::PoliceStation => a.police_station.cmp(&b.police_station),
        SortKey::Status => a.status.as_ref().cmp(b.status.as_ref()),
    }
}

/// All searchable text of a case, lowercased.
fn haystack(case: &FirRecord) -> String {
    let mut text = String::new();
    for field in [
        case.id.as_str(),
        case.fir_number.as_str(),
        case.police_station.as_str(),
        case.district.as_str(),
        case.area.as_str(),
        case.complaint_type.as_str(),
        case.category.as_str(),
        case.status.as_ref(),
        case.priority.as_ref(),
    ] {
        text.push_str(field);
        text.push(' ');
    }
    for section in &case.sections {
        text.push_str(section);
        text.push(' ');
    }
    if let Some(date) = case.occurred_on {
        text.push_str(&date.to_string());
        text.push(' ');
    }
    for field in [
        case.complainant_name.as_deref(),
        case.officer_in_charge.as_deref(),
        case.place_of_occurrence.as_deref(),
        case.brief_facts.as_deref(),
    ]
    .into_iter()
    .flatten()
    {
        text.push_str(field);
        text.push(' ');
    }
    if let Some(info) = case.information_type {
        text.push_str(info.as_ref());
    }
    text.to_lowercase()
}
