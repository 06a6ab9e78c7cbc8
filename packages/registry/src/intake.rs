//! Single-case registration intake.
//!
//! Unlike the bulk corpus boundary, registration is strict: every required
//! field must be present and well-formed or the whole submission is
//! rejected with a field-level error.

use fir_desk_case_models::{CasePriority, CaseStatus, FirRecord, InformationType};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::corpus::parse_occurrence_date;

/// Error returned when a registration submission fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// A required text field was missing or blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the offending field, in wire spelling.
        field: &'static str,
    },
    /// The sections list contained no usable entries.
    #[error("at least one penal section is required")]
    EmptySections,
    /// The occurrence date could not be parsed.
    #[error("invalid occurrence date: {value}")]
    InvalidDate {
        /// The rejected value, echoed back for the caller.
        value: String,
    },
}

/// A registration submission as received on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirDraft {
    /// FIR number assigned at the station, e.g. `145/2025`.
    pub fir_number: String,
    /// Police station registering the case.
    pub police_station: String,
    /// District the station belongs to.
    pub district: String,
    /// Area used for dashboard filtering.
    pub area: String,
    /// Occurrence date, ISO or day-first.
    pub occurrence_date: String,
    /// Specific complaint type, e.g. `Theft`.
    pub complaint_type: String,
    /// Broad category, e.g. `Property Crime`.
    pub category: String,
    /// Penal sections invoked.
    pub sections: Vec<String>,
    /// Investigation priority.
    pub priority: CasePriority,
    /// Name of the complainant.
    #[serde(default)]
    pub complainant_name: Option<String>,
    /// Officer assigned to the case.
    #[serde(default)]
    pub officer_in_charge: Option<String>,
    /// Free-text place of occurrence.
    #[serde(default)]
    pub place_of_occurrence: Option<String>,
    /// Short narrative of the complaint.
    #[serde(default)]
    pub brief_facts: Option<String>,
    /// How the information was received.
    #[serde(default)]
    pub information_type: Option<InformationType>,
}

/// Validates a draft and builds the canonical record.
///
/// Every new registration opens as [`CaseStatus::Active`] under a fresh
/// UUID; status transitions happen elsewhere.
///
/// # Errors
///
/// Returns an [`IntakeError`] naming the first field that failed
/// validation.
pub fn build_record(draft: FirDraft) -> Result<FirRecord, IntakeError> {
    let fir_number = required(&draft.fir_number, "firNumber")?;
    let police_station = required(&draft.police_station, "policeStation")?;
    let district = required(&draft.district, "district")?;
    let area = required(&draft.area, "area")?;
    let complaint_type = required(&draft.complaint_type, "complaintType")?;
    let category = required(&draft.category, "category")?;

    let sections: Vec<String> = draft
        .sections
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();
    if sections.is_empty() {
        return Err(IntakeError::EmptySections);
    }

    let occurred_on =
        parse_occurrence_date(&draft.occurrence_date).ok_or_else(|| IntakeError::InvalidDate {
            value: draft.occurrence_date.clone(),
        })?;

    Ok(FirRecord {
        id: Uuid::new_v4().to_string(),
        fir_number,
        police_station,
        district,
        area,
        occurred_on: Some(occurred_on),
        complaint_type,
        category,
        sections,
        status: CaseStatus::Active,
        priority: draft.priority,
        complainant_name: draft.complainant_name,
        officer_in_charge: draft.officer_in_charge,
        place_of_occurrence: draft.place_of_occurrence,
        brief_facts: draft.brief_facts,
        information_type: draft.information_type,
    })
}

fn required(value: &str, field: &'static str) -> Result<String, IntakeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::MissingField { field });
    }
    Ok(trimmed.to_string())
}
