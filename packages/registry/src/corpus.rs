//! Bulk corpus intake: parses a JSON array of raw case records and
//! normalizes each into the canonical [`FirRecord`] shape.
//!
//! The structural contract is strict: anything other than a JSON array of
//! objects fails before a single record is processed. Inside a valid array,
//! normalization is lenient per record. A record missing a required field
//! is dropped and logged; a record whose date is missing or unparseable is
//! kept with no occurrence date.

use chrono::{NaiveDate, NaiveDateTime};
use fir_desk_case_models::{CasePriority, CaseStatus, FirRecord, InformationType};
use serde::Deserialize;
use thiserror::Error;

/// Error returned when a corpus violates the input boundary's structural
/// contract.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The input was not a JSON array of case objects.
    #[error("corpus is not a JSON array of case records: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Outcome of a corpus load: the accepted records plus intake counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusReport {
    /// Records that passed normalization, in corpus order.
    pub cases: Vec<FirRecord>,
    /// Number of records accepted.
    pub accepted: u64,
    /// Number of records dropped for missing or invalid required fields.
    pub dropped: u64,
}

/// Raw record shape accepted at the corpus boundary.
///
/// Every field is optional at parse time; normalization decides what is
/// required. Legacy corpora spell the complaint type `complainType` and
/// the date `occurrenceDate`, both accepted as aliases. A stored `month`
/// field, if present, is ignored: the month key is always derived from the
/// date.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCase {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    fir_number: Option<String>,
    #[serde(default)]
    police_station: Option<String>,
    #[serde(default)]
    district: Option<String>,
    #[serde(default)]
    area: Option<String>,
    #[serde(default, alias = "occurrenceDate")]
    date: Option<String>,
    #[serde(default, alias = "complainType")]
    complaint_type: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    sections: Vec<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    complainant_name: Option<String>,
    #[serde(default)]
    officer_in_charge: Option<String>,
    #[serde(default)]
    place_of_occurrence: Option<String>,
    #[serde(default)]
    brief_facts: Option<String>,
    #[serde(default)]
    information_type: Option<String>,
}

/// Parses and normalizes a JSON corpus.
///
/// # Errors
///
/// Returns [`CorpusError::Malformed`] when the input is not a JSON array
/// of case objects. Defective records inside a valid array never error;
/// they are dropped and counted in the report.
pub fn load_corpus(json: &str) -> Result<CorpusReport, CorpusError> {
    let raw_cases: Vec<RawCase> = serde_json::from_str(json)?;
    let total = raw_cases.len();

    let mut cases = Vec::with_capacity(total);
    let mut dropped = 0u64;

    for (index, raw) in raw_cases.into_iter().enumerate() {
        match normalize_case(raw) {
            Some(case) => cases.push(case),
            None => {
                dropped += 1;
                log::warn!("Dropping corpus record {index}: missing or invalid required field");
            }
        }
    }

    log::info!("Corpus load: accepted {}/{total} records", cases.len());

    Ok(CorpusReport {
        accepted: cases.len() as u64,
        dropped,
        cases,
    })
}

/// Maps a raw record onto the canonical shape, or `None` when a required
/// field is missing, blank, or carries an unrecognized enumeration value.
fn normalize_case(raw: RawCase) -> Option<FirRecord> {
    let id = non_blank(raw.id)?;
    let fir_number = non_blank(raw.fir_number)?;
    let police_station = non_blank(raw.police_station)?;
    let district = non_blank(raw.district)?;
    let area = non_blank(raw.area)?;
    let complaint_type = non_blank(raw.complaint_type)?;
    let category = non_blank(raw.category)?;

    if raw.sections.iter().all(|s| s.trim().is_empty()) {
        return None;
    }

    let status = raw.status.as_deref()?.parse::<CaseStatus>().ok()?;
    let priority = raw.priority.as_deref()?.parse::<CasePriority>().ok()?;

    // Lenient by contract: a bad date keeps the record, it just never
    // matches a bounded time window.
    let occurred_on = raw.date.as_deref().and_then(parse_occurrence_date);
    let information_type = raw
        .information_type
        .as_deref()
        .and_then(|s| s.parse::<InformationType>().ok());

    Some(FirRecord {
        id,
        fir_number,
        police_station,
        district,
        area,
        occurred_on,
        complaint_type,
        category,
        sections: raw.sections,
        status,
        priority,
        complainant_name: raw.complainant_name,
        officer_in_charge: raw.officer_in_charge,
        place_of_occurrence: raw.place_of_occurrence,
        brief_facts: raw.brief_facts,
        information_type,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses an occurrence date value.
///
/// Accepts ISO dates (`2025-08-10`), the day-first form used on FIR
/// paperwork (`10/08/2025`), and ISO datetimes (the date part is taken).
#[must_use]
pub fn parse_occurrence_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    None
}
