pub mod config;
pub mod server;
pub mod web;

pub use config::{Config, ConfigError};
pub use server::{build_router, run};
