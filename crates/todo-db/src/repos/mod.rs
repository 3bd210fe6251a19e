//! Item store operations.
//!
//! Each module adds methods to `ItemStore` via `impl ItemStore` blocks.

pub mod item;
pub mod seed;
