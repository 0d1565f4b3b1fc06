//! Public-security routes

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use super::{ApiError, ApiResult, AppState};
use crate::data::security::{
    CrimeType, MonthlyCrime, SafetyIndex, SecurityStatistics, YearlyComparison,
};
use crate::data::{security_data, RegionCrime, SecurityDashboard};
use crate::query::find_exact;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/statistics", get(statistics))
        .route("/by-region", get(by_region))
        .route("/by-region/:region", get(region_detail))
        .route("/monthly-trend", get(monthly_trend))
        .route("/crime-types", get(crime_types))
        .route("/safety-index", get(safety_index))
        .route("/yearly-comparison", get(yearly_comparison))
        .route("/dashboard", get(dashboard))
}

async fn statistics() -> Json<&'static SecurityStatistics> {
    Json(security_data().statistics)
}

async fn by_region() -> Json<&'static [RegionCrime]> {
    Json(security_data().crimes_by_region)
}

/// Exact, case-insensitive region lookup; no substring fallback here
async fn region_detail(Path(region): Path<String>) -> ApiResult<Json<RegionCrime>> {
    find_exact(security_data().crimes_by_region, &region)
        .copied()
        .map(Json)
        .ok_or_else(ApiError::region_not_found)
}

async fn monthly_trend() -> Json<&'static [MonthlyCrime]> {
    Json(security_data().monthly_trend)
}

async fn crime_types() -> Json<&'static [CrimeType]> {
    Json(security_data().crime_types)
}

async fn safety_index() -> Json<&'static [SafetyIndex]> {
    Json(security_data().safety_index_by_region)
}

async fn yearly_comparison() -> Json<&'static [YearlyComparison]> {
    Json(security_data().yearly_comparison)
}

/// Dashboard from the one-hour slot, rebuilt from the tables once it expires
async fn dashboard(State(state): State<Arc<AppState>>) -> Json<SecurityDashboard> {
    Json(
        state
            .security_cache
            .get_or_compute(|| security_data().dashboard()),
    )
}
