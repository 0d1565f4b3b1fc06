//! Employment routes
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/statistics` | GET | National aggregates |
//! | `/sectors?sort=` | GET | Sector table, optionally sorted |
//! | `/by-region` | GET | Regional employment table |
//! | `/regions-gob` | GET | Government region list (cached, never expires) |
//! | `/monthly-trend` | GET | Monthly unemployment rate |
//! | `/education-level` | GET | Workers and salary by education level |
//! | `/age-groups` | GET | Workers and unemployment by age group |
//! | `/query` | POST | Free-text query resolution |
//! | `/real-data` | GET | Labour-survey snapshot |

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use super::{ApiError, ApiResult, AppState};
use crate::data::employment::{
    AgeGroup, EducationLevel, EmploymentStatistics, MonthlyRate, RealEmploymentData,
};
use crate::data::{
    employment_data, real_employment_data, sorted_sectors, RegionEmployment, RegionList, Sector,
    SectorSort,
};
use crate::query::{QueryResult, QuerySpec};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/statistics", get(statistics))
        .route("/sectors", get(sectors))
        .route("/by-region", get(by_region))
        .route("/regions-gob", get(gov_regions))
        .route("/monthly-trend", get(monthly_trend))
        .route("/education-level", get(education_level))
        .route("/age-groups", get(age_groups))
        .route("/query", post(query))
        .route("/real-data", get(real_data))
}

#[derive(Debug, Deserialize)]
pub struct SectorParams {
    sort: Option<String>,
}

async fn statistics() -> Json<&'static EmploymentStatistics> {
    Json(employment_data().statistics)
}

/// Unknown `sort` values fall back to table order
async fn sectors(Query(params): Query<SectorParams>) -> Json<Vec<Sector>> {
    let sort = params.sort.as_deref().and_then(SectorSort::from_param);
    Json(sorted_sectors(employment_data().sectors, sort))
}

async fn by_region() -> Json<&'static [RegionEmployment]> {
    Json(employment_data().jobs_by_region)
}

/// Live region list when obtainable, built-in list otherwise
async fn gov_regions(State(state): State<Arc<AppState>>) -> Json<RegionList> {
    let live = state
        .regions_cache
        .get_or_refresh(|| state.gov_regions.fetch_regions())
        .await;
    Json(RegionList::from_fetch(live))
}

async fn monthly_trend() -> Json<&'static [MonthlyRate]> {
    Json(employment_data().monthly_trend)
}

async fn education_level() -> Json<&'static [EducationLevel]> {
    Json(employment_data().education_level)
}

async fn age_groups() -> Json<&'static [AgeGroup]> {
    Json(employment_data().age_groups)
}

/// Resolves a query; an absent or empty result becomes a 404 echoing the query
async fn query(
    State(state): State<Arc<AppState>>,
    Json(spec): Json<QuerySpec>,
) -> ApiResult<Json<QueryResult>> {
    let result = state.resolver.resolve(spec);
    if !result.has_results() {
        return Err(ApiError::no_query_results(result.query));
    }
    Ok(Json(result))
}

async fn real_data() -> Json<&'static RealEmploymentData> {
    Json(real_employment_data())
}
