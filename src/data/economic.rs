//! Economic indicators
//!
//! Live exchange-rate series from the Banco Central de Chile API, plus static
//! unemployment and consumer-price-index series.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::employment::{MonthlyRate, RegionRate};
use crate::upstream::UpstreamClient;

/// Dollar observed-rate series from the Banco Central API
pub const BANCO_CENTRAL_URL: &str =
    "https://api.bcentral.cl/api/Series/DOLLOM/data?limit=30&format=JSON";

/// Time-to-live for the central-bank indicators in hours
pub const INDICATORS_CACHE_TTL_HOURS: i64 = 24;

/// Client for the Banco Central de Chile series API
#[derive(Debug, Clone)]
pub struct BancoCentralClient {
    upstream: UpstreamClient,
    url: String,
}

impl BancoCentralClient {
    /// Creates a client for the default series URL
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream,
            url: BANCO_CENTRAL_URL.to_string(),
        }
    }

    /// Points the client at a different URL (for testing)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the raw indicator payload, `None` if unavailable
    pub async fn fetch_indicators(&self) -> Option<Value> {
        self.upstream.fetch_json(&self.url).await
    }
}

/// Unemployment rate series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnemploymentData {
    /// Current national unemployment rate (%)
    pub current: f64,
    pub trend: &'static [MonthlyRate],
    pub by_region: &'static [RegionRate],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyIpc {
    pub month: &'static str,
    pub ipc: f64,
}

/// Consumer price index series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpcData {
    #[serde(rename = "currentIPC")]
    pub current_ipc: f64,
    pub previous_month: f64,
    pub year_over_year: f64,
    pub last_year: &'static [MonthlyIpc],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpcSummary {
    #[serde(rename = "currentIPC")]
    pub current_ipc: f64,
    pub previous_month: f64,
}

impl IpcData {
    pub fn summary(&self) -> IpcSummary {
        IpcSummary {
            current_ipc: self.current_ipc,
            previous_month: self.previous_month,
        }
    }
}

/// Consolidated economic view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicDashboard {
    pub unemployment: UnemploymentData,
    pub ipc: IpcSummary,
    #[serde(serialize_with = "serialize_millis")]
    pub last_updated: DateTime<Utc>,
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-11-30T12:00:00.000Z`
fn serialize_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

static UNEMPLOYMENT: UnemploymentData = UnemploymentData {
    current: 3.1,
    trend: &[
        MonthlyRate { month: "Julio 2024", rate: 3.2 },
        MonthlyRate { month: "Agosto 2024", rate: 3.3 },
        MonthlyRate { month: "Septiembre 2024", rate: 3.2 },
        MonthlyRate { month: "Octubre 2024", rate: 3.1 },
        MonthlyRate { month: "Noviembre 2024", rate: 3.1 },
    ],
    by_region: &[
        RegionRate { region: "Metropolitana de Santiago", rate: 3.4 },
        RegionRate { region: "Valparaíso", rate: 3.0 },
        RegionRate { region: "Biobío", rate: 3.5 },
        RegionRate { region: "Los Lagos", rate: 2.8 },
        RegionRate { region: "La Araucanía", rate: 3.2 },
    ],
};

static IPC: IpcData = IpcData {
    current_ipc: 2.1,
    previous_month: 1.9,
    year_over_year: 2.8,
    last_year: &[
        MonthlyIpc { month: "Diciembre 2023", ipc: 2.4 },
        MonthlyIpc { month: "Enero 2024", ipc: 2.5 },
        MonthlyIpc { month: "Febrero 2024", ipc: 2.2 },
        MonthlyIpc { month: "Marzo 2024", ipc: 2.1 },
        MonthlyIpc { month: "Abril 2024", ipc: 2.3 },
        MonthlyIpc { month: "Mayo 2024", ipc: 2.0 },
        MonthlyIpc { month: "Junio 2024", ipc: 2.2 },
        MonthlyIpc { month: "Julio 2024", ipc: 2.4 },
        MonthlyIpc { month: "Agosto 2024", ipc: 2.3 },
        MonthlyIpc { month: "Septiembre 2024", ipc: 2.1 },
        MonthlyIpc { month: "Octubre 2024", ipc: 1.9 },
        MonthlyIpc { month: "Noviembre 2024", ipc: 2.1 },
    ],
};

/// Get the unemployment series
pub fn unemployment_data() -> UnemploymentData {
    UNEMPLOYMENT
}

/// Get the consumer price index series
pub fn ipc_data() -> IpcData {
    IPC
}

/// Builds the consolidated economic view
///
/// The unemployment and IPC parts are gathered concurrently; either may later
/// become an upstream call without changing this function's shape.
pub async fn economic_dashboard() -> EconomicDashboard {
    let (unemployment, ipc) = futures::join!(
        async { unemployment_data() },
        async { ipc_data().summary() }
    );

    EconomicDashboard {
        unemployment,
        ipc,
        last_updated: Utc::now(),
    }
}
