//! Product catalog: model, storage, service, and the HTML routes.

pub mod extract;
pub mod handler;
pub mod memory;
pub mod model;
#[cfg(feature = "database")]
pub mod postgres;
pub mod repository;
pub mod routes;
pub mod service;
