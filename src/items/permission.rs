use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Capability required to perform a mutating item operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemPermission {
    #[serde(rename = "create:items")]
    CreateItems,
    #[serde(rename = "update:items")]
    UpdateItems,
    #[serde(rename = "delete:items")]
    DeleteItems,
}

impl ItemPermission {
    pub const ALL: [ItemPermission; 3] = [
        ItemPermission::CreateItems,
        ItemPermission::UpdateItems,
        ItemPermission::DeleteItems,
    ];

    /// Tag as it appears in a token's `permissions` claim
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemPermission::CreateItems => "create:items",
            ItemPermission::UpdateItems => "update:items",
            ItemPermission::DeleteItems => "delete:items",
        }
    }
}

impl fmt::Display for ItemPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create:items" | "CreateItems" => Ok(ItemPermission::CreateItems),
            "update:items" | "UpdateItems" => Ok(ItemPermission::UpdateItems),
            "delete:items" | "DeleteItems" => Ok(ItemPermission::DeleteItems),
            other => Err(format!("unknown item permission '{}'", other)),
        }
    }
}
