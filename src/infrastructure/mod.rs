//! Infrastructure layer: configuration, logging, the store connection and
//! template rendering.

pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod logger;
pub mod templates;
