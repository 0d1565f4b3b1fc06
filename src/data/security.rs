//! Static public-security tables
//!
//! Crime counts per region, monthly and yearly trends, crime-type breakdown
//! and a regional safety index.

use serde::Serialize;

use super::{head, Named};

/// Time-to-live for the cached security dashboard in hours
pub const SECURITY_CACHE_TTL_HOURS: i64 = 1;

/// National crime aggregates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityStatistics {
    pub total_crimes: u64,
    pub homicides: u64,
    pub robberies: u64,
    pub assaults: u64,
    pub thefts: u64,
    pub drug_related: u64,
    pub sexual_crimes: u64,
    /// Crimes per 100,000 inhabitants
    pub criminality_rate: u64,
}

/// Crime counts for one region
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCrime {
    pub region: &'static str,
    pub homicides: u64,
    pub robberies: u64,
    pub assaults: u64,
    pub thefts: u64,
    /// Crimes per 100,000 inhabitants
    pub crime_rate: u64,
}

impl Named for RegionCrime {
    fn name(&self) -> &str {
        self.region
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCrime {
    pub month: &'static str,
    pub crime_rate: u64,
    pub homicides: u64,
    pub robberies: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrimeType {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub count: u64,
    pub percentage: f64,
    /// Chart colour as a hex string
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyIndex {
    pub region: &'static str,
    pub safety_index: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyComparison {
    pub year: u16,
    pub crime_rate: u64,
    pub homicides: u64,
    pub trend: Trend,
}

/// The complete security dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityData {
    pub statistics: &'static SecurityStatistics,
    pub crimes_by_region: &'static [RegionCrime],
    pub monthly_trend: &'static [MonthlyCrime],
    pub crime_types: &'static [CrimeType],
    pub safety_index_by_region: &'static [SafetyIndex],
    pub yearly_comparison: &'static [YearlyComparison],
}

/// Condensed security overview for the dashboard view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityDashboard {
    pub statistics: SecurityStatistics,
    pub top_crimes: &'static [CrimeType],
    pub crimes_by_region: &'static [RegionCrime],
    pub monthly_trend: &'static [MonthlyCrime],
    pub safety_index: &'static [SafetyIndex],
}

impl SecurityData {
    /// Builds the dashboard summary: first 5 crime types and regions, first 8
    /// safety-index entries, full monthly trend
    pub fn dashboard(&self) -> SecurityDashboard {
        SecurityDashboard {
            statistics: *self.statistics,
            top_crimes: head(self.crime_types, 5),
            crimes_by_region: head(self.crimes_by_region, 5),
            monthly_trend: self.monthly_trend,
            safety_index: head(self.safety_index_by_region, 8),
        }
    }
}

static STATISTICS: SecurityStatistics = SecurityStatistics {
    total_crimes: 425_650,
    homicides: 2_145,
    robberies: 18_320,
    assaults: 45_230,
    thefts: 156_890,
    drug_related: 78_500,
    sexual_crimes: 12_450,
    criminality_rate: 2_340,
};

const fn crime(
    region: &'static str,
    homicides: u64,
    robberies: u64,
    assaults: u64,
    thefts: u64,
    crime_rate: u64,
) -> RegionCrime {
    RegionCrime {
        region,
        homicides,
        robberies,
        assaults,
        thefts,
        crime_rate,
    }
}

/// Crime table by region, in presentation order
pub static CRIMES_BY_REGION: [RegionCrime; 15] = [
    crime("Metropolitana de Santiago", 680, 5_200, 14_520, 48_900, 2_800),
    crime("Valparaíso", 145, 1_240, 3_450, 8_900, 2_400),
    crime("Biobío", 198, 1_680, 4_200, 12_340, 2_650),
    crime("Los Lagos", 78, 680, 1_920, 4_560, 1_980),
    crime("La Araucanía", 92, 520, 1_680, 3_240, 2_150),
    crime("Coquimbo", 58, 420, 1_240, 3_120, 1_850),
    crime("Maule", 87, 680, 1_920, 4_560, 2_120),
    crime("Antofagasta", 45, 380, 890, 2_340, 1_920),
    crime("Tarapacá", 32, 240, 680, 1_450, 1_680),
    crime("Atacama", 28, 180, 520, 1_200, 1_450),
    crime("Ñuble", 48, 340, 920, 2_100, 1_780),
    crime("Los Ríos", 35, 260, 680, 1_560, 1_620),
    crime("Aysén del Gral. Carlos Ibáñez del Campo", 18, 120, 340, 680, 1_280),
    crime("Magallanes y la Antártica Chilena", 22, 160, 420, 890, 1_520),
    crime("Arica y Parinacota", 25, 200, 520, 1_120, 1_680),
];

static MONTHLY_TREND: [MonthlyCrime; 6] = [
    MonthlyCrime { month: "Enero", crime_rate: 2_450, homicides: 185, robberies: 1_580 },
    MonthlyCrime { month: "Febrero", crime_rate: 2_380, homicides: 178, robberies: 1_520 },
    MonthlyCrime { month: "Marzo", crime_rate: 2_340, homicides: 175, robberies: 1_480 },
    MonthlyCrime { month: "Abril", crime_rate: 2_290, homicides: 168, robberies: 1_420 },
    MonthlyCrime { month: "Mayo", crime_rate: 2_250, homicides: 162, robberies: 1_380 },
    MonthlyCrime { month: "Junio", crime_rate: 2_210, homicides: 158, robberies: 1_340 },
];

static CRIME_TYPES: [CrimeType; 7] = [
    CrimeType { kind: "Robo", count: 156_890, percentage: 36.8, color: "#FF6B6B" },
    CrimeType { kind: "Hurto", count: 89_340, percentage: 21.0, color: "#FFA726" },
    CrimeType { kind: "Asalto", count: 45_230, percentage: 10.6, color: "#FFD93D" },
    CrimeType { kind: "Tráfico de drogas", count: 78_500, percentage: 18.4, color: "#6BCB77" },
    CrimeType { kind: "Crímenes sexuales", count: 12_450, percentage: 2.9, color: "#4D96FF" },
    CrimeType { kind: "Homicidios", count: 2_145, percentage: 0.5, color: "#8B0000" },
    CrimeType { kind: "Otros", count: 41_095, percentage: 9.8, color: "#999999" },
];

static SAFETY_INDEX: [SafetyIndex; 15] = [
    SafetyIndex { region: "Aysén del Gral. Carlos Ibáñez del Campo", safety_index: 85 },
    SafetyIndex { region: "Los Ríos", safety_index: 82 },
    SafetyIndex { region: "Atacama", safety_index: 81 },
    SafetyIndex { region: "Tarapacá", safety_index: 80 },
    SafetyIndex { region: "Los Lagos", safety_index: 79 },
    SafetyIndex { region: "Arica y Parinacota", safety_index: 78 },
    SafetyIndex { region: "Coquimbo", safety_index: 77 },
    SafetyIndex { region: "Antofagasta", safety_index: 75 },
    SafetyIndex { region: "Ñuble", safety_index: 73 },
    SafetyIndex { region: "La Araucanía", safety_index: 70 },
    SafetyIndex { region: "Maule", safety_index: 68 },
    SafetyIndex { region: "Valparaíso", safety_index: 65 },
    SafetyIndex { region: "Biobío", safety_index: 62 },
    SafetyIndex { region: "Metropolitana de Santiago", safety_index: 58 },
    SafetyIndex { region: "Magallanes y la Antártica Chilena", safety_index: 60 },
];

static YEARLY_COMPARISON: [YearlyComparison; 5] = [
    YearlyComparison { year: 2020, crime_rate: 2_580, homicides: 2_340, trend: Trend::Up },
    YearlyComparison { year: 2021, crime_rate: 2_620, homicides: 2_410, trend: Trend::Up },
    YearlyComparison { year: 2022, crime_rate: 2_490, homicides: 2_280, trend: Trend::Down },
    YearlyComparison { year: 2023, crime_rate: 2_380, homicides: 2_180, trend: Trend::Down },
    YearlyComparison { year: 2024, crime_rate: 2_340, homicides: 2_145, trend: Trend::Down },
];

static SECURITY: SecurityData = SecurityData {
    statistics: &STATISTICS,
    crimes_by_region: &CRIMES_BY_REGION,
    monthly_trend: &MONTHLY_TREND,
    crime_types: &CRIME_TYPES,
    safety_index_by_region: &SAFETY_INDEX,
    yearly_comparison: &YEARLY_COMPARISON,
};

/// Get the complete security dataset
pub fn security_data() -> SecurityData {
    SECURITY
}
