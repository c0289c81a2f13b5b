//! # wd-core
//!
//! Core domain models and business logic for Wardrobe.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod ports;
pub mod storage_ref;
pub mod verdict;
pub mod wardrobe;

// Re-export commonly used types at the crate root
pub use config::MaintenanceConfig;
pub use ids::{ItemId, OutfitId, UserId};
pub use storage_ref::StorageReference;
pub use verdict::ExistenceVerdict;
pub use wardrobe::{Category, ClosetSnapshot, ClothingItem, Outfit};
