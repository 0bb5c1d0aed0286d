//! Internal test modules.

#[cfg(feature = "cli")]
mod cli;
mod config;
mod error;
mod io;
mod provider;
mod registry;
