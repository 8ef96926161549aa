use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус товара в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    Draft,
    Discontinued,
}

impl ProductStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Draft => "draft",
            ProductStatus::Discontinued => "discontinued",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Inactive => "Inactive",
            ProductStatus::Draft => "Draft",
            ProductStatus::Discontinued => "Discontinued",
        }
    }

    pub fn all() -> Vec<ProductStatus> {
        vec![
            ProductStatus::Active,
            ProductStatus::Inactive,
            ProductStatus::Draft,
            ProductStatus::Discontinued,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(ProductStatus::Active),
            "inactive" => Some(ProductStatus::Inactive),
            "draft" => Some(ProductStatus::Draft),
            "discontinued" => Some(ProductStatus::Discontinued),
            _ => None,
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
