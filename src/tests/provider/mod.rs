//! Provider module tests.

mod decode_tests;
#[cfg(feature = "yaml")]
mod yaml_tests;
