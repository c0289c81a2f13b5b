pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;
