//! # wd-app
//!
//! Application layer for Wardrobe: use cases wiring the domain model in
//! `wd-core` to whatever adapters implement its ports.

pub mod usecases;

pub use usecases::{
    AddClothingItem, DeleteClothingItem, HandleImageLoadFailure, PruneDanglingOutfits,
    PruneSummary, ReconcileOrphans, SaveOutfit, SaveOutfitError, StartClosetWatcher,
    SweepOutcome, SweepSummary, VerifyImageExists,
};
