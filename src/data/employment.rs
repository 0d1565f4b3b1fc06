//! Static employment tables
//!
//! Sector and regional employment figures used by the employment routes and
//! the query resolver, plus the labour-survey snapshot served as "real data".

use serde::Serialize;

use super::Named;

/// An economic sector with its workforce size and average monthly salary (CLP)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: u32,
    pub name: &'static str,
    /// Number of workers employed in the sector
    pub workers: u64,
    /// Average monthly salary in CLP
    pub avg_salary: u64,
}

impl Named for Sector {
    fn name(&self) -> &str {
        self.name
    }
}

/// Employed and unemployed counts for one region
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionEmployment {
    pub region: &'static str,
    pub employed: u64,
    pub unemployed: u64,
}

impl Named for RegionEmployment {
    fn name(&self) -> &str {
        self.region
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryByGender {
    pub male: u64,
    pub female: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryBySector {
    pub private: u64,
    pub public: u64,
    pub independent: u64,
}

/// National employment aggregates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentStatistics {
    pub total_employed: u64,
    pub unemployed: u64,
    pub unemployment_rate: f64,
    pub average_salary: u64,
    pub salary_by_gender: SalaryByGender,
    pub salary_by_sector: SalaryBySector,
}

/// Unemployment rate for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyRate {
    pub month: &'static str,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationLevel {
    pub level: &'static str,
    pub workers: u64,
    pub avg_salary: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroup {
    pub age: &'static str,
    pub workers: u64,
    pub unemployment_rate: f64,
}

/// The complete employment dataset
///
/// Every field borrows a static table, so the struct is `Copy` and a resolver
/// can be built over a variant dataset with struct update syntax.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentData {
    pub statistics: &'static EmploymentStatistics,
    pub sectors: &'static [Sector],
    pub jobs_by_region: &'static [RegionEmployment],
    pub monthly_trend: &'static [MonthlyRate],
    pub education_level: &'static [EducationLevel],
    pub age_groups: &'static [AgeGroup],
}

static STATISTICS: EmploymentStatistics = EmploymentStatistics {
    total_employed: 8_450_320,
    unemployed: 425_100,
    unemployment_rate: 4.8,
    average_salary: 850_000,
    salary_by_gender: SalaryByGender {
        male: 920_000,
        female: 780_000,
    },
    salary_by_sector: SalaryBySector {
        private: 875_000,
        public: 945_000,
        independent: 650_000,
    },
};

/// Sector table, in presentation order
pub static SECTORS: [Sector; 7] = [
    Sector { id: 1, name: "Servicios", workers: 2_850_000, avg_salary: 750_000 },
    Sector { id: 2, name: "Manufactura", workers: 1_840_000, avg_salary: 920_000 },
    Sector { id: 3, name: "Agricultura", workers: 680_000, avg_salary: 520_000 },
    Sector { id: 4, name: "Construcción", workers: 820_000, avg_salary: 850_000 },
    Sector { id: 5, name: "Tecnología", workers: 420_000, avg_salary: 1_200_000 },
    Sector { id: 6, name: "Salud", workers: 560_000, avg_salary: 950_000 },
    Sector { id: 7, name: "Educación", workers: 380_000, avg_salary: 780_000 },
];

/// Regional employment table, in presentation order
pub static JOBS_BY_REGION: [RegionEmployment; 14] = [
    RegionEmployment { region: "Metropolitana de Santiago", employed: 3_200_000, unemployed: 180_000 },
    RegionEmployment { region: "Valparaíso", employed: 1_100_000, unemployed: 65_000 },
    RegionEmployment { region: "Biobío", employed: 980_000, unemployed: 52_000 },
    RegionEmployment { region: "Los Lagos", employed: 580_000, unemployed: 35_000 },
    RegionEmployment { region: "La Araucanía", employed: 420_000, unemployed: 28_000 },
    RegionEmployment { region: "Coquimbo", employed: 450_000, unemployed: 32_000 },
    RegionEmployment { region: "Maule", employed: 520_000, unemployed: 38_000 },
    RegionEmployment { region: "Antofagasta", employed: 340_000, unemployed: 18_000 },
    RegionEmployment { region: "Tarapacá", employed: 220_000, unemployed: 12_000 },
    RegionEmployment { region: "Atacama", employed: 180_000, unemployed: 9_000 },
    RegionEmployment { region: "Ñuble", employed: 310_000, unemployed: 22_000 },
    RegionEmployment { region: "Los Ríos", employed: 250_000, unemployed: 16_000 },
    RegionEmployment {
        region: "Aysén del Gral. Carlos Ibáñez del Campo",
        employed: 140_000,
        unemployed: 8_000,
    },
    RegionEmployment {
        region: "Magallanes y la Antártica Chilena",
        employed: 160_000,
        unemployed: 10_000,
    },
];

static MONTHLY_TREND: [MonthlyRate; 6] = [
    MonthlyRate { month: "Enero", rate: 5.2 },
    MonthlyRate { month: "Febrero", rate: 5.1 },
    MonthlyRate { month: "Marzo", rate: 5.0 },
    MonthlyRate { month: "Abril", rate: 4.9 },
    MonthlyRate { month: "Mayo", rate: 4.8 },
    MonthlyRate { month: "Junio", rate: 4.7 },
];

static EDUCATION_LEVEL: [EducationLevel; 4] = [
    EducationLevel { level: "Básica", workers: 1_200_000, avg_salary: 420_000 },
    EducationLevel { level: "Media", workers: 3_850_000, avg_salary: 680_000 },
    EducationLevel { level: "Técnica", workers: 1_950_000, avg_salary: 920_000 },
    EducationLevel { level: "Profesional", workers: 1_450_320, avg_salary: 1_350_000 },
];

static AGE_GROUPS: [AgeGroup; 5] = [
    AgeGroup { age: "18-25", workers: 1_050_000, unemployment_rate: 8.5 },
    AgeGroup { age: "25-35", workers: 2_840_000, unemployment_rate: 4.2 },
    AgeGroup { age: "35-45", workers: 2_420_000, unemployment_rate: 3.8 },
    AgeGroup { age: "45-55", workers: 1_680_000, unemployment_rate: 4.0 },
    AgeGroup { age: "55+", workers: 460_320, unemployment_rate: 5.2 },
];

static EMPLOYMENT: EmploymentData = EmploymentData {
    statistics: &STATISTICS,
    sectors: &SECTORS,
    jobs_by_region: &JOBS_BY_REGION,
    monthly_trend: &MONTHLY_TREND,
    education_level: &EDUCATION_LEVEL,
    age_groups: &AGE_GROUPS,
};

/// Get the complete employment dataset
pub fn employment_data() -> EmploymentData {
    EMPLOYMENT
}

/// Sort orders accepted by the sectors listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorSort {
    SalaryDesc,
    SalaryAsc,
    WorkersDesc,
}

impl SectorSort {
    /// Parses a `sort` query parameter; unknown values yield `None`
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "salary-desc" => Some(SectorSort::SalaryDesc),
            "salary-asc" => Some(SectorSort::SalaryAsc),
            "workers-desc" => Some(SectorSort::WorkersDesc),
            _ => None,
        }
    }
}

/// Returns a copy of `sectors` in the requested order
///
/// Without a sort order the table order is kept. Sorting is stable, so ties
/// keep their table order too.
pub fn sorted_sectors(sectors: &[Sector], sort: Option<SectorSort>) -> Vec<Sector> {
    let mut sorted = sectors.to_vec();
    match sort {
        Some(SectorSort::SalaryDesc) => sorted.sort_by(|a, b| b.avg_salary.cmp(&a.avg_salary)),
        Some(SectorSort::SalaryAsc) => sorted.sort_by_key(|s| s.avg_salary),
        Some(SectorSort::WorkersDesc) => sorted.sort_by(|a, b| b.workers.cmp(&a.workers)),
        None => {}
    }
    sorted
}

// Labour-survey snapshot (INE, November 2024)

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealStatistics {
    pub total_employed: u64,
    pub unemployed: u64,
    pub unemployment_rate: f64,
    pub average_salary: u64,
    pub labor_force: u64,
    pub participation_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityShare {
    pub sector: &'static str,
    pub percentage: f64,
    pub workers: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionRate {
    pub region: &'static str,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EducationSalary {
    pub education: &'static str,
    pub salary: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyEmployment {
    pub month: &'static str,
    pub rate: f64,
    pub employed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeDistribution {
    pub age_group: &'static str,
    pub workers: u64,
    pub rate: f64,
}

/// Labour-survey figures published by the national statistics institute
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEmploymentData {
    pub source: &'static str,
    pub last_updated: &'static str,
    pub statistics: RealStatistics,
    pub employment_by_activity: &'static [ActivityShare],
    pub unemployment_by_region: &'static [RegionRate],
    pub salary_by_education: &'static [EducationSalary],
    pub monthly_trend: &'static [MonthlyEmployment],
    pub age_distribution: &'static [AgeDistribution],
}

static REAL_EMPLOYMENT: RealEmploymentData = RealEmploymentData {
    source: "Instituto Nacional de Estadísticas (INE)",
    last_updated: "Noviembre 2024",
    statistics: RealStatistics {
        total_employed: 8_750_000,
        unemployed: 271_000,
        unemployment_rate: 3.1,
        average_salary: 962_000,
        labor_force: 9_021_000,
        participation_rate: 56.8,
    },
    employment_by_activity: &[
        ActivityShare { sector: "Servicios", percentage: 65.2, workers: 5_704_000 },
        ActivityShare { sector: "Construcción", percentage: 9.1, workers: 796_000 },
        ActivityShare { sector: "Manufactura", percentage: 10.5, workers: 919_000 },
        ActivityShare { sector: "Agricultura", percentage: 3.2, workers: 280_000 },
        ActivityShare { sector: "Minería", percentage: 1.8, workers: 158_000 },
        ActivityShare { sector: "Otros", percentage: 10.2, workers: 893_000 },
    ],
    unemployment_by_region: &[
        RegionRate { region: "Metropolitana de Santiago", rate: 3.4 },
        RegionRate { region: "Valparaíso", rate: 3.1 },
        RegionRate { region: "Biobío", rate: 3.5 },
        RegionRate { region: "Los Lagos", rate: 2.8 },
        RegionRate { region: "La Araucanía", rate: 3.2 },
        RegionRate { region: "Antofagasta", rate: 2.9 },
        RegionRate { region: "Coquimbo", rate: 3.0 },
        RegionRate { region: "Maule", rate: 3.3 },
    ],
    salary_by_education: &[
        EducationSalary { education: "Sin educación", salary: 425_000 },
        EducationSalary { education: "Educación básica", salary: 520_000 },
        EducationSalary { education: "Educación media", salary: 720_000 },
        EducationSalary { education: "Técnica profesional", salary: 980_000 },
        EducationSalary { education: "Profesional", salary: 1_580_000 },
        EducationSalary { education: "Postgrado", salary: 2_100_000 },
    ],
    monthly_trend: &[
        MonthlyEmployment { month: "Julio 2024", rate: 3.2, employed: 8_680_000 },
        MonthlyEmployment { month: "Agosto 2024", rate: 3.3, employed: 8_700_000 },
        MonthlyEmployment { month: "Septiembre 2024", rate: 3.2, employed: 8_720_000 },
        MonthlyEmployment { month: "Octubre 2024", rate: 3.1, employed: 8_740_000 },
        MonthlyEmployment { month: "Noviembre 2024", rate: 3.1, employed: 8_750_000 },
    ],
    age_distribution: &[
        AgeDistribution { age_group: "15-24 años", workers: 1_205_000, rate: 9.8 },
        AgeDistribution { age_group: "25-34 años", workers: 2_410_000, rate: 2.1 },
        AgeDistribution { age_group: "35-44 años", workers: 2_145_000, rate: 1.9 },
        AgeDistribution { age_group: "45-54 años", workers: 1_520_000, rate: 2.3 },
        AgeDistribution { age_group: "55+ años", workers: 470_000, rate: 3.4 },
    ],
};

/// Get the labour-survey snapshot
pub fn real_employment_data() -> &'static RealEmploymentData {
    &REAL_EMPLOYMENT
}
