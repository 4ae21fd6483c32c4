use serde::{Deserialize, Serialize};

/// Reference data used to tag works and build the filter bar.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Category {
    pub id: u32,
    pub name: String,
}
