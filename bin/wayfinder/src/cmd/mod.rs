//! CLI command implementations.

pub mod check;
pub mod render;
pub mod resolve;
pub mod serve;
