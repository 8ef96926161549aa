use serde::{Deserialize, Serialize};
use std::fmt;

/// Тип точки (локации) компании
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    #[default]
    Store,
    Warehouse,
    Office,
    Supplier,
}

impl LocationType {
    pub fn code(&self) -> &'static str {
        match self {
            LocationType::Store => "store",
            LocationType::Warehouse => "warehouse",
            LocationType::Office => "office",
            LocationType::Supplier => "supplier",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LocationType::Store => "Store",
            LocationType::Warehouse => "Warehouse",
            LocationType::Office => "Office",
            LocationType::Supplier => "Supplier",
        }
    }

    pub fn all() -> Vec<LocationType> {
        vec![
            LocationType::Store,
            LocationType::Warehouse,
            LocationType::Office,
            LocationType::Supplier,
        ]
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
