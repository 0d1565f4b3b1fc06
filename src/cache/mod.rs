//! In-memory caching for upstream resources
//!
//! Each cached resource owns one independent `TtlCache` slot with a fixed TTL.
//! Nothing is persisted; slots live for the lifetime of the process.

mod ttl;

pub use ttl::{CacheEntry, Clock, Ttl, TtlCache};
