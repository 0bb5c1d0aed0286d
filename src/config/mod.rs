//! Configuration types for building provider registries.
//!
//! This module provides:
//! - `RegistryConfig`: Which providers to enable, where files live, and
//!   default parse options

mod registry_config;

pub use registry_config::RegistryConfig;
