//! Core types and utilities

pub mod constants;
pub mod units;

pub use constants::*;
pub use units::*;
