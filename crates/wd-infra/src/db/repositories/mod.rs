mod item_repo;
mod outfit_repo;

pub use item_repo::*;
pub use outfit_repo::*;
