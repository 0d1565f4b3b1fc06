//! HTTP routing layer
//!
//! Builds the axum `Router` and the process-lifetime `AppState` that owns the
//! upstream clients, the query resolver and one cache slot per cached resource.
//!
//! | Prefix | Module |
//! |--------|--------|
//! | `/api/categories`, `/api/datasets`, `/api/stats` | `catalog` |
//! | `/api/employment/*` | `employment` |
//! | `/api/security/*` | `security` |
//! | `/api/economic/*` | `economic` |

mod catalog;
mod economic;
mod employment;
pub mod error;
mod security;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::cache::{Ttl, TtlCache};
use crate::data::economic::INDICATORS_CACHE_TTL_HOURS;
use crate::data::security::SECURITY_CACHE_TTL_HOURS;
use crate::data::{employment_data, BancoCentralClient, GovRegionsClient, SecurityDashboard};
use crate::query::QueryResolver;
use crate::upstream::UpstreamClient;

pub use error::{ApiError, ApiResult};

/// State shared by every request for the lifetime of the process
#[derive(Debug)]
pub struct AppState {
    pub resolver: QueryResolver,
    pub banco_central: BancoCentralClient,
    pub gov_regions: GovRegionsClient,
    /// Central-bank indicators, refreshed every 24 hours
    pub indicators_cache: TtlCache<Value>,
    /// Government region list, fetched once
    pub regions_cache: TtlCache<Value>,
    /// Security dashboard, rebuilt every hour
    pub security_cache: TtlCache<SecurityDashboard>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state pointing at the real upstream APIs
    pub fn new() -> Self {
        let upstream = UpstreamClient::new();
        Self::with_clients(
            BancoCentralClient::new(upstream.clone()),
            GovRegionsClient::new(upstream),
        )
    }

    /// Creates state with custom upstream clients, all cache slots empty
    pub fn with_clients(banco_central: BancoCentralClient, gov_regions: GovRegionsClient) -> Self {
        Self {
            resolver: QueryResolver::new(employment_data()),
            banco_central,
            gov_regions,
            indicators_cache: TtlCache::new(
                "economic_indicators",
                Ttl::hours(INDICATORS_CACHE_TTL_HOURS),
            ),
            regions_cache: TtlCache::new("gov_regions", Ttl::Never),
            security_cache: TtlCache::new(
                "security_dashboard",
                Ttl::hours(SECURITY_CACHE_TTL_HOURS),
            ),
        }
    }
}

/// Builds the full API router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/categories", get(catalog::list_categories))
        .route("/api/datasets", get(catalog::list_datasets))
        .route("/api/stats", get(catalog::portal_stats))
        .nest("/api/employment", employment::routes())
        .nest("/api/security", security::routes())
        .nest("/api/economic", economic::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
