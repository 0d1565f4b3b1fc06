//! Error responses for the HTTP API
//!
//! Every error body is a JSON object with an `error` field. Unavailable
//! upstream data maps to 503, lookups without a match map to 404. Failures are
//! scoped to the request that raised them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::query::QuerySpec;

const REGION_NOT_FOUND: &str = "Región no encontrada";
const NO_QUERY_RESULTS: &str = "No se encontraron resultados para la consulta";
const INDICATORS_UNAVAILABLE: &str = "No es posible obtener datos en este momento";
const INDICATORS_UNAVAILABLE_DETAIL: &str =
    "Los servicios del Banco Central podrían no estar disponibles";

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by API handlers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// A lookup or query matched nothing
    #[error("{error}")]
    NotFound {
        error: String,
        /// The query that produced no results, echoed for debugging
        query: Option<QuerySpec>,
    },

    /// Upstream data could not be obtained and nothing fresh is cached
    #[error("{error}: {message}")]
    Unavailable { error: String, message: String },
}

/// JSON body written for an `ApiError`
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a QuerySpec>,
}

impl ApiError {
    pub fn region_not_found() -> Self {
        ApiError::NotFound {
            error: REGION_NOT_FOUND.to_string(),
            query: None,
        }
    }

    pub fn no_query_results(query: QuerySpec) -> Self {
        ApiError::NotFound {
            error: NO_QUERY_RESULTS.to_string(),
            query: Some(query),
        }
    }

    pub fn indicators_unavailable() -> Self {
        ApiError::Unavailable {
            error: INDICATORS_UNAVAILABLE.to_string(),
            message: INDICATORS_UNAVAILABLE_DETAIL.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn body(&self) -> ErrorBody<'_> {
        match self {
            ApiError::NotFound { error, query } => ErrorBody {
                error: error.as_str(),
                message: None,
                query: query.as_ref(),
            },
            ApiError::Unavailable { error, message } => ErrorBody {
                error: error.as_str(),
                message: Some(message.as_str()),
                query: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
