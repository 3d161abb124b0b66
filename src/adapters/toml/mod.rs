//! TOML-based policy repository
//!
//! Implements `PolicyRepository` on top of a single policy file.
//!
//! - [`store_file`] - Read and write the policy file
//! - [`repository`] - `PolicyRepository` implementation

pub mod repository;
pub mod store_file;

pub use repository::TomlPolicyRepository;
pub use store_file::{PolicyFile, StoreError, load_file, save_file};
