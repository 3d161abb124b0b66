//! Tests for the file-backed adapters
//!
//! - `toml_repository_test` - Policy store on a TOML file
//! - `contract_publisher_test` - Notification contract publication
