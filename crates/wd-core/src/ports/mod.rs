//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! the concrete document store, blob store, clock and UI.

mod closet_feed;
mod closet_view;
mod clock;
pub mod errors;
mod item_repository;
mod object_store;
mod outfit_repository;

pub use closet_feed::ClosetFeedPort;
pub use closet_view::ClosetViewPort;
pub use clock::ClockPort;
pub use errors::ObjectStoreError;
pub use item_repository::ItemRepositoryPort;
pub use object_store::{ObjectMeta, ObjectStorePort};
pub use outfit_repository::OutfitRepositoryPort;
