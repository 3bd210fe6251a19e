//! Entity structs persisted by the item store.

mod item;

pub use item::Item;
