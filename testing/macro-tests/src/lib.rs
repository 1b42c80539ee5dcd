//! Fixture entities declared through the derive macros, and the tests that
//! run them through the catalog and registry.

pub mod fixtures;
