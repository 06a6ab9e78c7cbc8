//! HTTP handler functions for the FIR desk API.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use fir_desk_analytics_models::{FilterCriteria, TimeRange};
use fir_desk_case_models::CaseStatus;
use fir_desk_registry::browse::{BrowseQuery, SortKey, SortOrder};
use fir_desk_registry::{browse, intake::FirDraft};
use fir_desk_server_models::{
    ApiBrowseResponse, ApiFilterOptions, ApiHealth, ApiRegistered, BrowseParams, DashboardParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/dashboard`
///
/// Runs one analytics recompute cycle over a snapshot of the register and
/// returns the full summary. Filter params are lenient: an unrecognized
/// time range applies no cutoff, and `All` leaves a dimension
/// unrestricted.
pub async fn dashboard(
    state: web::Data<AppState>,
    params: web::Query<DashboardParams>,
) -> HttpResponse {
    let criteria = FilterCriteria::from_params(
        params.time_range.as_deref(),
        params.area.as_deref(),
        params.category.as_deref(),
    );

    let snapshot = match state.register.read() {
        Ok(register) => register.snapshot(),
        Err(e) => {
            log::error!("Register lock poisoned: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Register unavailable"
            }));
        }
    };

    let today = Utc::now().date_naive();
    let summary = fir_desk_analytics::dashboard(&snapshot, &criteria, today);

    HttpResponse::Ok().json(summary)
}

/// `GET /api/cases`
///
/// Browses the case history with free-text search, status filtering, and
/// sorting. `totalCount` is the register size, so clients can render
/// "showing X of Y".
pub async fn cases(state: web::Data<AppState>, params: web::Query<BrowseParams>) -> HttpResponse {
    let query = BrowseQuery {
        search: params.search.clone().filter(|s| !s.trim().is_empty()),
        status: params
            .status
            .clone()
            .filter(|s| s != FilterCriteria::WILDCARD),
        sort_key: params
            .sort_by
            .as_deref()
            .and_then(|key| key.parse::<SortKey>().ok())
            .unwrap_or_default(),
        sort_order: params
            .order
            .as_deref()
            .and_then(|order| order.parse::<SortOrder>().ok())
            .unwrap_or_default(),
    };

    let snapshot = match state.register.read() {
        Ok(register) => register.snapshot(),
        Err(e) => {
            log::error!("Register lock poisoned: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Register unavailable"
            }));
        }
    };

    let total_count = snapshot.len() as u64;
    let matches: Vec<_> = browse::browse(&snapshot, &query)
        .into_iter()
        .cloned()
        .collect();

    HttpResponse::Ok().json(ApiBrowseResponse {
        cases: matches,
        total_count,
    })
}

/// `POST /api/cases`
///
/// Registers a new case from a draft submission. Validation failures come
/// back as 400 with the field-level message; a success returns 201 with
/// the generated ID.
pub async fn register_case(
    state: web::Data<AppState>,
    draft: web::Json<FirDraft>,
) -> HttpResponse {
    let mut register = match state.register.write() {
        Ok(register) => register,
        Err(e) => {
            log::error!("Register lock poisoned: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Register unavailable"
            }));
        }
    };

    match register.register(draft.into_inner()) {
        Ok(record) => HttpResponse::Created().json(ApiRegistered {
            id: record.id,
            fir_number: record.fir_number,
        }),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        })),
    }
}

/// `GET /api/filters`
///
/// Returns the selectable values for the dashboard filter controls:
/// distinct areas and categories on record plus the fixed time-range and
/// status enumerations.
pub async fn filters(state: web::Data<AppState>) -> HttpResponse {
    let register = match state.register.read() {
        Ok(register) => register,
        Err(e) => {
            log::error!("Register lock poisoned: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Register unavailable"
            }));
        }
    };

    HttpResponse::Ok().json(ApiFilterOptions {
        areas: register.distinct_areas(),
        categories: register.distinct_categories(),
        time_ranges: TimeRange::all()
            .iter()
            .map(|range| range.as_ref().to_string())
            .collect(),
        statuses: CaseStatus::all()
            .iter()
            .map(|status| status.as_ref().to_string())
            .collect(),
    })
}
