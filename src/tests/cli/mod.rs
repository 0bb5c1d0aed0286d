//! CLI argument tests.
