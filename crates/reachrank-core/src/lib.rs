//! Shared configuration and input parsing for reachrank.

pub mod config;
pub mod handle;

pub use config::AppConfig;
