pub mod config;

pub use config::{AdjustConfig, AppConfig, DuotoneConfig, ServerConfig, CONFIG_ENV};
