//! Row types and filter DTOs shared across the reporting endpoints.

pub mod delivery;
pub mod filters;
pub mod product;
pub mod user;
