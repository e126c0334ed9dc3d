pub mod seed;
pub mod store;

pub use seed::SeedError;
pub use store::StoreError;
