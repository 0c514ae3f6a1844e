//! Honeycomb lattice symmetry library
//!
//! This library generates graphene-type honeycomb tiles (optionally with vacancies)
//! and finds their mirror axes, translations and glides under periodic boundaries.

pub mod config;
pub mod geometries;
pub mod lattice;
pub mod symmetries;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
