//! Primitive map integration tests

mod json_tests;
