use crate::domain::common::EntityMetadata;
use crate::shared::collection::{Entity, FieldValue, FilterDef};
use serde::{Deserialize, Serialize};

/// Склад
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub used: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

fn default_true() -> bool {
    true
}

impl Warehouse {
    /// Заполненность склада в процентах (0 для склада без емкости)
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            f64::from(self.used) * 100.0 / f64::from(self.capacity)
        }
    }

    pub fn status(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }
}

impl Entity for Warehouse {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "code" => Some(FieldValue::Text(&self.code)),
            "status" => Some(FieldValue::Text(self.status())),
            "locationId" => self.location_id.as_deref().map(FieldValue::Text),
            "capacity" => Some(FieldValue::Number(f64::from(self.capacity))),
            "utilization" => Some(FieldValue::Number(self.utilization())),
            _ => None,
        }
    }
}

pub const WAREHOUSE_FILTERS: &[FilterDef] = &[
    FilterDef::search("q", &["name", "code"]),
    FilterDef::category("status", "status"),
    FilterDef::category("location", "locationId"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization_and_defaults() {
        let json = r#"{"id":"w1","name":"Main","code":"WH-1","capacity":200,"used":50,
            "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#;
        let w: Warehouse = serde_json::from_str(json).unwrap();
        assert!(w.is_active);
        assert_eq!(w.utilization(), 25.0);
        assert_eq!(w.field("status"), Some(FieldValue::Text("active")));
        assert_eq!(w.field("locationId"), None);
    }
}
