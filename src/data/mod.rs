//! Reference tables and upstream resource clients
//!
//! The tables are immutable statics built at compile time and shared by every
//! request. The clients wrap the single-shot upstream fetcher for the two live
//! resources (central-bank indicators and the government region list).

pub mod catalog;
pub mod economic;
pub mod employment;
pub mod regions;
pub mod security;

pub use catalog::{categories, portal_stats, search_datasets, Category, Dataset, PortalStats};
pub use economic::{
    economic_dashboard, ipc_data, unemployment_data, BancoCentralClient, EconomicDashboard,
    IpcData, UnemploymentData,
};
pub use employment::{
    employment_data, real_employment_data, sorted_sectors, EmploymentData, RegionEmployment,
    Sector, SectorSort,
};
pub use regions::{GovRegionsClient, RegionList, FALLBACK_REGIONS};
pub use security::{security_data, RegionCrime, SecurityDashboard, SecurityData};

/// A table record that can be looked up by a human-readable name
pub trait Named {
    /// The name used for matching (sector name or region name)
    fn name(&self) -> &str;
}

/// Returns at most the first `n` items of a table
pub(crate) fn head<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}
