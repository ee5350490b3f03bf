//! Reporting queries, one module per dashboard area.
//!
//! Every function here is a pure read over the current schema contents:
//! no side effects, no cached state between calls.

pub mod agricultural;
pub mod delivery;
pub mod inventory;
pub mod sales;
pub mod summary;
