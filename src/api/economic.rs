//! Economic indicator routes

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use super::{ApiError, ApiResult, AppState};
use crate::data::{
    economic_dashboard, ipc_data, unemployment_data, EconomicDashboard, IpcData, UnemploymentData,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/economic-indicators", get(economic_indicators))
        .route("/unemployment", get(unemployment))
        .route("/ipc", get(ipc))
        .route("/dashboard-real", get(dashboard_real))
}

/// Central-bank payload from the 24-hour slot; 503 when nothing is obtainable
async fn economic_indicators(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    state
        .indicators_cache
        .get_or_refresh(|| state.banco_central.fetch_indicators())
        .await
        .map(Json)
        .ok_or_else(ApiError::indicators_unavailable)
}

async fn unemployment() -> Json<UnemploymentData> {
    Json(unemployment_data())
}

async fn ipc() -> Json<IpcData> {
    Json(ipc_data())
}

async fn dashboard_real() -> Json<EconomicDashboard> {
    Json(economic_dashboard().await)
}
