use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

/// A single to-do record. Only `completed` changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub completed: bool,
}
