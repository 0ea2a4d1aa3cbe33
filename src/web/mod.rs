pub mod config;
pub mod middleware;
