//! Error type tests.

mod stage_tests;
#[cfg(feature = "miette")]
mod miette_tests;
