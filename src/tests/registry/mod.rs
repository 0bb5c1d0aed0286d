//! Registry and dispatch tests.

mod concurrency_tests;
mod extension_tests;
