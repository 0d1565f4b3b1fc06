//! Open-data portal catalog
//!
//! Categories, featured datasets and portal-wide counters shown on the
//! landing page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
}

/// A published dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: u32,
    pub title: &'static str,
    pub ministry: &'static str,
    /// Human-readable age of the last update
    pub updated_ago: &'static str,
    pub downloads: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalStats {
    pub datasets: u32,
    pub active_users: u32,
    pub ministries: u32,
    pub updates_today: u32,
}

static CATEGORIES: [Category; 5] = [
    Category { id: 1, name: "Salud", icon: "heart" },
    Category { id: 2, name: "Educación", icon: "school" },
    Category { id: 3, name: "Medio Ambiente", icon: "leaf" },
    Category { id: 4, name: "Economía", icon: "chart" },
    Category { id: 5, name: "Transporte", icon: "bus" },
];

static DATASETS: [Dataset; 2] = [
    Dataset {
        id: 1,
        title: "Presupuesto Nacional 2025",
        ministry: "Ministerio de Hacienda",
        updated_ago: "Hace 2 horas",
        downloads: 1234,
    },
    Dataset {
        id: 2,
        title: "Indicadores de Salud Pública",
        ministry: "Ministerio de Salud",
        updated_ago: "Hace 5 horas",
        downloads: 892,
    },
];

static STATS: PortalStats = PortalStats {
    datasets: 2847,
    active_users: 45231,
    ministries: 24,
    updates_today: 127,
};

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn portal_stats() -> PortalStats {
    STATS
}

/// Datasets whose title or ministry contains `search`, case-insensitively
///
/// An empty search matches every dataset.
pub fn search_datasets(search: &str) -> Vec<Dataset> {
    let needle = search.to_lowercase();
    DATASETS
        .iter()
        .filter(|d| {
            d.title.to_lowercase().contains(&needle) || d.ministry.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_has_5_entries() {
        assert_eq!(categories().len(), 5);
    }

    #[test]
    fn test_empty_search_returns_all_datasets() {
        assert_eq!(search_datasets("").len(), 2);
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let found = search_datasets("PRESUPUESTO");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_search_matches_ministry() {
        let found = search_datasets("salud");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].ministry, "Ministerio de Salud");
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(search_datasets("transporte").is_empty());
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let json = serde_json::to_value(portal_stats()).unwrap();
        assert_eq!(json["activeUsers"], 45231);
        assert_eq!(json["updatesToday"], 127);
    }
}
