//! Property-based tests for validation invariants

mod validation_properties;
