#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory FIR register: corpus intake, single-case registration, and
//! snapshot access for the analytics and browsing layers.

use std::collections::BTreeSet;

use fir_desk_case_models::FirRecord;

pub mod browse;
pub mod corpus;
pub mod intake;

use intake::{FirDraft, IntakeError};

/// The embedded sample corpus, a JSON array of eight demonstration cases.
pub const SAMPLE_CASES_JSON: &str = include_str!("../data/sample_cases.json");

/// The authoritative in-memory collection of registered cases.
///
/// Readers take a [`snapshot`](Self::snapshot) and work on that copy, so a
/// registration arriving mid-computation never changes a result halfway
/// through.
#[derive(Debug, Clone, Default)]
pub struct CaseRegister {
    cases: Vec<FirRecord>,
}

impl CaseRegister {
    /// Creates an empty register.
    #[must_use]
    pub const fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Creates a register over an already-normalized set of cases.
    #[must_use]
    pub const fn from_cases(cases: Vec<FirRecord>) -> Self {
        Self { cases }
    }

    /// Returns a point-in-time copy of every registered case.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FirRecord> {
        self.cases.clone()
    }

    /// Borrows the registered cases in registration order.
    #[must_use]
    pub fn cases(&self) -> &[FirRecord] {
        &self.cases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Validates a draft and appends the resulting record.
    ///
    /// # Errors
    ///
    /// Returns the [`IntakeError`] unchanged when validation fails; the
    /// register is untouched in that case.
    pub fn register(&mut self, draft: FirDraft) -> Result<FirRecord, IntakeError> {
        let record = intake::build_record(draft)?;
        log::info!(
            "Registered FIR {} at {}",
            record.fir_number,
            record.police_station
        );
        self.cases.push(record.clone());
        Ok(record)
    }

    /// Every distinct area on record, sorted ascending.
    #[must_use]
    pub fn distinct_areas(&self) -> Vec<String> {
        distinct(self.cases.iter().map(|case| case.area.as_str()))
    }

    /// Every distinct crime category on record, sorted ascending.
    #[must_use]
    pub fn distinct_categories(&self) -> Vec<String> {
        distinct(self.cases.iter().map(|case| case.category.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.collect();
    set.into_iter().map(ToString::to_string).collect()
}

/// Builds a register seeded with the embedded sample corpus.
///
/// # Panics
///
/// * If the embedded sample corpus fails to parse
#[must_use]
pub fn sample_register() -> CaseRegister {
    let report = corpus::load_corpus(SAMPLE_CASES_JSON)
        .unwrap_or_else(|e| panic!("Invalid embedded sample corpus: {e:?}"));
    CaseRegister::from_cases(report.cases)
}
