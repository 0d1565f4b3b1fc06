//! Portal catalog routes

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use crate::data::{self, Category, Dataset, PortalStats};

#[derive(Debug, Deserialize)]
pub struct DatasetParams {
    search: Option<String>,
}

/// GET /api/categories
pub async fn list_categories() -> Json<&'static [Category]> {
    Json(data::categories())
}

/// GET /api/datasets?search=
pub async fn list_datasets(Query(params): Query<DatasetParams>) -> Json<Vec<Dataset>> {
    Json(data::search_datasets(params.search.as_deref().unwrap_or_default()))
}

/// GET /api/stats
pub async fn portal_stats() -> Json<PortalStats> {
    Json(data::portal_stats())
}
