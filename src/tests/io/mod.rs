//! I/O collaborator tests.

mod fs_tests;
