#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the FIR desk server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the canonical case types to allow independent evolution of the API
//! contract.

use fir_desk_case_models::FirRecord;
use serde::{Deserialize, Serialize};

/// Query parameters for the dashboard endpoint.
///
/// All values arrive as raw strings; the handler maps them onto typed
/// filter criteria, treating `All` and unrecognized tokens as wildcards.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardParams {
    /// Time window token, e.g. `3months`.
    pub time_range: Option<String>,
    /// Exact area name.
    pub area: Option<String>,
    /// Exact crime category name.
    pub category: Option<String>,
}

/// Query parameters for the case history endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseParams {
    /// Free-text search term.
    pub search: Option<String>,
    /// Exact status wire string, or `All`.
    pub status: Option<String>,
    /// Sort column, e.g. `firNumber`.
    pub sort_by: Option<String>,
    /// Sort direction, `asc` or `desc`.
    pub order: Option<String>,
}

/// Response from the case history endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBrowseResponse {
    /// Cases matching the query, in the requested order.
    pub cases: Vec<FirRecord>,
    /// Number of cases in this response.
    pub total_count: u64,
}

/// Response from a successful case registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegistered {
    /// Generated case ID.
    pub id: String,
    /// FIR number echoed back for confirmation.
    pub fir_number: String,
}

/// Selectable values for the dashboard filter controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFilterOptions {
    /// Distinct areas on record, sorted.
    pub areas: Vec<String>,
    /// Distinct crime categories on record, sorted.
    pub categories: Vec<String>,
    /// Accepted time window tokens, e.g. `1month`.
    pub time_ranges: Vec<String>,
    /// Case status wire strings.
    pub statuses: Vec<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
