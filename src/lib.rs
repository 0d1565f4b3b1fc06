//! DataCiudadana API Library
//!
//! This module exposes the data-access core (TTL cache, upstream fetcher,
//! query resolver, reference tables) and the HTTP router for use by the
//! server binary and integration tests.

pub mod api;
pub mod cache;
pub mod cli;
pub mod data;
pub mod query;
pub mod upstream;
