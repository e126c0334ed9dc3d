pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod seed;
pub mod store;

#[cfg(test)]
mod tests;
