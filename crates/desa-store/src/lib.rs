//! Desa Store - village record ports and adapters
//!
//! Village records (statistics and recorded centroids) are read through the
//! `VillageStore` port. The in-memory adapter is loaded from a JSON export.

pub mod memory;
pub mod ports;

pub use memory::MemoryVillageStore;
pub use ports::VillageStore;
