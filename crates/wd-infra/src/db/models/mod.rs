mod clothing_item_row;
mod outfit_row;

pub use clothing_item_row::*;
pub use outfit_row::*;
