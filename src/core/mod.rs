//! Core layer: error types and HTTP middleware shared by every route.

pub mod error;
pub mod middleware;
