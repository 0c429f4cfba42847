//! Canonical tree integration tests

mod build_tests;
