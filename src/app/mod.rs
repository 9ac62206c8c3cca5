//! Application layer

pub mod product;
