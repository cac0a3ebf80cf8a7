//! Integration tests for agent asset validation and loading

mod catalog_loading;
mod config_integration;
mod document_formats;
mod validation_scenarios;
