//! # todo-core
//!
//! Core types shared by every todolist crate:
//! - The `Item` entity
//! - `ItemId`, the 24-character hex identifier assigned by the store
//! - JSON response shapes rendered by the HTTP API and the CLI

pub mod entities;
pub mod ids;
pub mod responses;
