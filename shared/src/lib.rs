//! Shared types and models for the DairySight cooperative platform
//!
//! This crate contains the domain records, the pricing/commission business
//! rules, and validation helpers used by the backend.

pub mod models;
pub mod pricing;
pub mod validation;

pub use models::*;
pub use pricing::*;
pub use validation::*;
