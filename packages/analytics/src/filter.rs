//! Filter stage: reduces the case corpus to the subset matching the
//! dashboard criteria.
//!
//! The stage is total. Unrecognized area or category values match no
//! records; the time window degrades to unrestricted before it gets here
//! (see `FilterCriteria::from_params`). There is no error path.

use chrono::NaiveDate;
use fir_desk_analytics_models::FilterCriteria;
use fir_desk_case_models::FirRecord;

/// Returns whether a single case matches the criteria.
///
/// Criteria are conjunctive. The time window is inclusive at the cutoff:
/// a case occurring exactly `today - range` matches. A case without an
/// occurrence date never matches a bounded window but always matches an
/// unrestricted one. Area and category comparisons are exact and
/// case-sensitive.
#[must_use]
pub fn matches(case: &FirRecord, criteria: &FilterCriteria, today: NaiveDate) -> bool {
    let in_window = match criteria.time_range {
        Some(range) => match case.occurred_on {
            Some(date) => date >= range.cutoff_from(today),
            None => false,
        },
        None => true,
    };
    let area_matches = match &criteria.area {
        Some(area) => case.area == *area,
        None => true,
    };
    let category_matches = match &criteria.category {
        Some(category) => case.category == *category,
        None => true,
    };
    in_window && area_matches && category_matches
}

/// Returns the cases matching `criteria`, preserving corpus order.
///
/// An empty result is a valid outcome, not an error.
#[must_use]
pub fn matching_cases<'a>(
    cases: &'a [FirRecord],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<&'a FirRecord> {
    cases
        .iter()
        .filter(|case| matches(case, criteria, today))
        .collect()
}
