//! Storage layer module.
//!
//! The dataset lives in memory behind [`Database`]; a trait-based backend
//! decides whether committed writes also reach disk.

pub mod database;
pub mod dataset;
pub mod factory;
pub mod file;
pub mod memory;
pub mod seed;
pub mod table;
pub mod traits;

pub use database::Database;
pub use dataset::{Dataset, Removed};
pub use factory::create_storage;
pub use memory::MemoryStorage;
pub use table::Table;
pub use traits::Storage;
