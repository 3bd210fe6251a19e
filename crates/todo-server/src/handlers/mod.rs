//! Route handlers.

pub mod health;
pub mod items;
