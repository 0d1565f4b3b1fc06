//! Free-text query resolution over the employment tables
//!
//! A `QuerySpec` arrives as the JSON body of a query request. The resolver
//! picks the best record for sector and region lookups, filters sectors by
//! salary range, or returns the whole dataset when no known kind (or no name
//! to look up) was given.
//! It never fails: an absent or empty `data` is an ordinary outcome that the
//! caller reports as "no results".

pub mod matching;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::data::{EmploymentData, RegionEmployment, Sector};

pub use matching::{find_by_name, find_containing, find_exact};

/// Attribution used in region fallback records
pub const FALLBACK_SOURCE: &str = "https://apis.digital.gob.cl/dpa/";

const FALLBACK_MESSAGE: &str = "Región encontrada en la API del Gobierno de Chile";
const FALLBACK_NOTE: &str =
    "Para datos de empleo específicos de esta región, contacte a las autoridades locales";

/// A query as submitted by a client, echoed back in every response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    /// Raw query kind: "sector", "region" or "salary-range"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Kept as the raw JSON number so the echo matches what was sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<Number>,
}

impl QuerySpec {
    pub fn kind(&self) -> QueryKind {
        QueryKind::parse(self.kind.as_deref())
    }
}

/// What a query asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Best-matching sector by name
    Sector,
    /// Best-matching region by name, or a synthesized placeholder
    Region,
    /// All sectors within an average-salary range
    SalaryRange,
    /// The whole employment dataset; used for missing or unknown kinds
    Overview,
}

impl QueryKind {
    pub fn parse(kind: Option<&str>) -> Self {
        match kind {
            Some("sector") => QueryKind::Sector,
            Some("region") => QueryKind::Region,
            Some("salary-range") => QueryKind::SalaryRange,
            _ => QueryKind::Overview,
        }
    }
}

/// Placeholder returned for a region absent from every table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticFallback {
    /// The region exactly as queried
    pub region: String,
    pub message: &'static str,
    pub source: &'static str,
    pub note: &'static str,
}

impl SyntheticFallback {
    pub fn for_region(region: &str) -> Self {
        Self {
            region: region.to_string(),
            message: FALLBACK_MESSAGE,
            source: FALLBACK_SOURCE,
            note: FALLBACK_NOTE,
        }
    }
}

/// Payload of a resolved query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryData {
    Sector(Sector),
    Region(RegionEmployment),
    Fallback(SyntheticFallback),
    Sectors(Vec<Sector>),
    Overview(EmploymentData),
}

impl QueryData {
    /// Whether this payload is an empty list
    pub fn is_empty(&self) -> bool {
        matches!(self, QueryData::Sectors(sectors) if sectors.is_empty())
    }
}

/// The echoed query and whatever it resolved to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub query: QuerySpec,
    pub data: Option<QueryData>,
}

impl QueryResult {
    /// False when `data` is absent or an empty list
    pub fn has_results(&self) -> bool {
        self.data.as_ref().is_some_and(|data| !data.is_empty())
    }
}

/// Resolves queries against one employment dataset
#[derive(Debug, Clone, Copy)]
pub struct QueryResolver {
    data: EmploymentData,
}

impl QueryResolver {
    pub fn new(data: EmploymentData) -> Self {
        Self { data }
    }

    /// Resolves a query; never fails
    pub fn resolve(&self, spec: QuerySpec) -> QueryResult {
        let data = match spec.kind() {
            QueryKind::Sector => match non_empty(spec.sector.as_deref()) {
                Some(sector) => find_by_name(self.data.sectors, sector)
                    .map(|sector| QueryData::Sector(*sector)),
                None => Some(self.overview()),
            },
            QueryKind::Region => match non_empty(spec.region.as_deref()) {
                Some(region) => Some(match find_by_name(self.data.jobs_by_region, region) {
                    Some(found) => QueryData::Region(*found),
                    None => QueryData::Fallback(SyntheticFallback::for_region(region)),
                }),
                None => Some(self.overview()),
            },
            QueryKind::SalaryRange => Some(QueryData::Sectors(self.sectors_in_salary_range(
                spec.min_salary.as_ref().and_then(Number::as_f64),
                spec.max_salary.as_ref().and_then(Number::as_f64),
            ))),
            QueryKind::Overview => Some(self.overview()),
        };

        tracing::debug!(kind = ?spec.kind(), found = data.is_some(), "resolved query");
        QueryResult { query: spec, data }
    }

    /// A sector or region kind without a name to look for also lands here
    fn overview(&self) -> QueryData {
        QueryData::Overview(self.data)
    }

    /// Sectors whose average salary lies in `[min, max]`, inclusive
    ///
    /// A missing minimum is 0. A missing or zero maximum is unbounded.
    pub fn sectors_in_salary_range(&self, min: Option<f64>, max: Option<f64>) -> Vec<Sector> {
        let min = min.unwrap_or(0.0);
        let max = match max {
            Some(max) if max != 0.0 => max,
            _ => f64::INFINITY,
        };

        self.data
            .sectors
            .iter()
            .filter(|s| {
                let salary = s.avg_salary as f64;
                salary >= min && salary <= max
            })
            .copied()
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::employment_data;
    use serde_json::json;

    static OVERLAPPING_SECTORS: [Sector; 3] = [
        Sector { id: 1, name: "Servicios Financieros", workers: 300_000, avg_salary: 1_100_000 },
        Sector { id: 2, name: "Servicios", workers: 2_850_000, avg_salary: 750_000 },
        Sector { id: 3, name: "Tecnología", workers: 420_000, avg_salary: 1_200_000 },
    ];

    static SALARY_SECTORS: [Sector; 4] = [
        Sector { id: 1, name: "Agricultura", workers: 680_000, avg_salary: 520_000 },
        Sector { id: 2, name: "Servicios", workers: 2_850_000, avg_salary: 750_000 },
        Sector { id: 3, name: "Manufactura", workers: 1_840_000, avg_salary: 920_000 },
        Sector { id: 4, name: "Tecnología", workers: 420_000, avg_salary: 1_200_000 },
    ];

    fn resolver() -> QueryResolver {
        QueryResolver::new(employment_data())
    }

    fn resolver_with(sectors: &'static [Sector]) -> QueryResolver {
        QueryResolver::new(EmploymentData {
            sectors,
            ..employment_data()
        })
    }

    fn spec(kind: &str) -> QuerySpec {
        QuerySpec {
            kind: Some(kind.to_string()),
            ..Default::default()
        }
    }

    fn sector_query(sector: &str) -> QuerySpec {
        QuerySpec {
            sector: Some(sector.to_string()),
            ..spec("sector")
        }
    }

    fn region_query(region: &str) -> QuerySpec {
        QuerySpec {
            region: Some(region.to_string()),
            ..spec("region")
        }
    }

    fn salary_query(min: Option<u64>, max: Option<u64>) -> QuerySpec {
        QuerySpec {
            min_salary: min.map(Number::from),
            max_salary: max.map(Number::from),
            ..spec("salary-range")
        }
    }

    #[test]
    fn test_query_kind_parse() {
        assert_eq!(QueryKind::parse(Some("sector")), QueryKind::Sector);
        assert_eq!(QueryKind::parse(Some("region")), QueryKind::Region);
        assert_eq!(QueryKind::parse(Some("salary-range")), QueryKind::SalaryRange);
        assert_eq!(QueryKind::parse(Some("SECTOR")), QueryKind::Overview);
        assert_eq!(QueryKind::parse(None), QueryKind::Overview);
    }

    #[test]
    fn test_exact_match_takes_precedence_over_substring() {
        let result = resolver_with(&OVERLAPPING_SECTORS).resolve(sector_query("Servicios"));

        match result.data {
            Some(QueryData::Sector(sector)) => assert_eq!(sector.name, "Servicios"),
            other => panic!("expected a sector, got {:?}", other),
        }
    }

    #[test]
    fn test_sector_substring_fallback() {
        let result = resolver().resolve(sector_query("tecnolog"));

        match result.data {
            Some(QueryData::Sector(sector)) => assert_eq!(sector.name, "Tecnología"),
            other => panic!("expected a sector, got {:?}", other),
        }
    }

    #[test]
    fn test_sector_match_is_case_insensitive() {
        let result = resolver().resolve(sector_query("CONSTRUCCIÓN"));
        assert!(matches!(result.data, Some(QueryData::Sector(s)) if s.id == 4));
    }

    #[test]
    fn test_unknown_sector_has_no_data() {
        let query = sector_query("Aeroespacial");
        let result = resolver().resolve(query.clone());

        assert!(result.data.is_none());
        assert!(!result.has_results());
        assert_eq!(result.query, query);
    }

    #[test]
    fn test_sector_kind_without_sector_returns_whole_dataset() {
        let overview = Some(QueryData::Overview(employment_data()));

        assert_eq!(resolver().resolve(spec("sector")).data, overview);
        assert_eq!(resolver().resolve(sector_query("")).data, overview);
        assert!(resolver().resolve(spec("sector")).has_results());
    }

    #[test]
    fn test_region_exact_match() {
        let result = resolver().resolve(region_query("valparaíso"));
        match result.data {
            Some(QueryData::Region(region)) => {
                assert_eq!(region.region, "Valparaíso");
                assert_eq!(region.employed, 1_100_000);
            }
            other => panic!("expected a region, got {:?}", other),
        }
    }

    #[test]
    fn test_region_substring_match() {
        let result = resolver().resolve(region_query("Santiago"));
        assert!(matches!(
            result.data,
            Some(QueryData::Region(r)) if r.region == "Metropolitana de Santiago"
        ));
    }

    #[test]
    fn test_unknown_region_always_answers_with_fallback() {
        let result = resolver().resolve(region_query("Atlántida"));

        match &result.data {
            Some(QueryData::Fallback(fallback)) => {
                assert_eq!(fallback.region, "Atlántida");
                assert_eq!(fallback.source, FALLBACK_SOURCE);
            }
            other => panic!("expected a fallback, got {:?}", other),
        }
        assert!(result.has_results());
    }

    #[test]
    fn test_region_kind_without_region_returns_whole_dataset() {
        let overview = Some(QueryData::Overview(employment_data()));

        assert_eq!(resolver().resolve(spec("region")).data, overview);
        assert_eq!(resolver().resolve(region_query("")).data, overview);
    }

    #[test]
    fn test_salary_range_is_inclusive_on_both_bounds() {
        let resolver = resolver_with(&SALARY_SECTORS);
        let result = resolver.resolve(salary_query(Some(520_000), Some(920_000)));

        match result.data {
            Some(QueryData::Sectors(sectors)) => {
                let salaries: Vec<u64> = sectors.iter().map(|s| s.avg_salary).collect();
                assert_eq!(salaries, vec![520_000, 750_000, 920_000]);
            }
            other => panic!("expected a sector list, got {:?}", other),
        }
    }

    #[test]
    fn test_salary_range_defaults_to_unbounded() {
        let sectors = resolver_with(&SALARY_SECTORS).sectors_in_salary_range(None, None);
        assert_eq!(sectors.len(), 4);
    }

    #[test]
    fn test_salary_range_zero_max_is_unbounded() {
        let sectors =
            resolver_with(&SALARY_SECTORS).sectors_in_salary_range(Some(900_000.0), Some(0.0));
        assert_eq!(sectors.len(), 2);
    }

    #[test]
    fn test_salary_range_without_match_is_empty_list() {
        let result = resolver().resolve(salary_query(Some(5_000_000), None));

        assert_eq!(result.data, Some(QueryData::Sectors(vec![])));
        assert!(!result.has_results());
    }

    #[test]
    fn test_unknown_kind_returns_whole_dataset() {
        let result = resolver().resolve(spec("everything"));
        assert_eq!(result.data, Some(QueryData::Overview(employment_data())));

        let result = resolver().resolve(QuerySpec::default());
        assert!(matches!(result.data, Some(QueryData::Overview(_))));
    }

    #[test]
    fn test_query_spec_deserializes_wire_names() {
        let spec: QuerySpec = serde_json::from_value(json!({
            "type": "salary-range",
            "minSalary": 500000,
            "maxSalary": 900000.5
        }))
        .unwrap();

        assert_eq!(spec.kind(), QueryKind::SalaryRange);
        assert_eq!(spec.min_salary.as_ref().and_then(Number::as_f64), Some(500_000.0));
        assert_eq!(spec.max_salary.as_ref().and_then(Number::as_f64), Some(900_000.5));
    }

    #[test]
    fn test_query_spec_echo_keeps_numbers_as_sent() {
        let sent = json!({ "type": "salary-range", "minSalary": 500000, "maxSalary": 900000.5 });
        let spec: QuerySpec = serde_json::from_value(sent.clone()).unwrap();

        let echoed = serde_json::to_value(resolver().resolve(spec).query).unwrap();

        assert_eq!(echoed, sent);
        assert_eq!(echoed["minSalary"].to_string(), "500000");
    }

    #[test]
    fn test_query_spec_echo_omits_absent_fields() {
        let json = serde_json::to_value(sector_query("Salud")).unwrap();
        assert_eq!(json, json!({ "type": "sector", "sector": "Salud" }));
    }

    #[test]
    fn test_result_serializes_untagged_payload() {
        let json = serde_json::to_value(resolver().resolve(sector_query("Salud"))).unwrap();
        assert_eq!(json["data"]["name"], "Salud");
        assert_eq!(json["data"]["avgSalary"], 950_000);
        assert_eq!(json["query"]["sector"], "Salud");
    }
}
