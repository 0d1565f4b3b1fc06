//! Government region list
//!
//! Regions come from the government's political-administrative division API.
//! When that API is unavailable a built-in list of the 16 regions is served
//! instead; the built-in list is never cached.

use serde::Serialize;
use serde_json::Value;

use crate::upstream::UpstreamClient;

/// Region endpoint of the government DPA API
pub const GOV_REGIONS_URL: &str = "https://apis.digital.gob.cl/dpa/regiones";

/// A region as listed by the government API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GovRegion {
    pub nombre: &'static str,
    pub codigo: u8,
}

/// Built-in region list, served when the government API is unavailable
pub static FALLBACK_REGIONS: [GovRegion; 16] = [
    GovRegion { nombre: "Arica y Parinacota", codigo: 15 },
    GovRegion { nombre: "Tarapacá", codigo: 1 },
    GovRegion { nombre: "Antofagasta", codigo: 2 },
    GovRegion { nombre: "Atacama", codigo: 3 },
    GovRegion { nombre: "Coquimbo", codigo: 4 },
    GovRegion { nombre: "Valparaíso", codigo: 5 },
    GovRegion { nombre: "Metropolitana de Santiago", codigo: 13 },
    GovRegion { nombre: "Libertador Gral. Bernardo O'Higgins", codigo: 6 },
    GovRegion { nombre: "Maule", codigo: 7 },
    GovRegion { nombre: "Ñuble", codigo: 16 },
    GovRegion { nombre: "Biobío", codigo: 8 },
    GovRegion { nombre: "La Araucanía", codigo: 9 },
    GovRegion { nombre: "Los Ríos", codigo: 14 },
    GovRegion { nombre: "Los Lagos", codigo: 10 },
    GovRegion { nombre: "Aysén del Gral. Carlos Ibáñez del Campo", codigo: 11 },
    GovRegion { nombre: "Magallanes y la Antártica Chilena", codigo: 12 },
];

/// Region list as served to clients: the live payload or the built-in list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RegionList {
    Live(Value),
    Fallback(&'static [GovRegion]),
}

impl RegionList {
    /// Uses the live payload when present, the built-in list otherwise
    pub fn from_fetch(live: Option<Value>) -> Self {
        match live {
            Some(value) => RegionList::Live(value),
            None => RegionList::Fallback(&FALLBACK_REGIONS),
        }
    }
}

/// Client for the government region API
#[derive(Debug, Clone)]
pub struct GovRegionsClient {
    upstream: UpstreamClient,
    url: String,
}

impl GovRegionsClient {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream,
            url: GOV_REGIONS_URL.to_string(),
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

    /// Fetches the live region list, `None` if unavailable
    pub async fn fetch_regions(&self) -> Option<Value> {
        self.upstream.fetch_json(&self.url).await
    }
}
