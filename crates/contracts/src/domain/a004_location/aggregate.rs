use crate::domain::common::EntityMetadata;
use crate::enums::location_type::LocationType;
use crate::shared::collection::{Entity, FieldValue, FilterDef};
use serde::{Deserialize, Serialize};

/// Точка компании (магазин, склад, офис, поставщик)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location_type: LocationType,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Entity for Location {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "type" => Some(FieldValue::Text(self.location_type.code())),
            "address" => Some(FieldValue::Text(&self.address)),
            "city" if !self.city.is_empty() => Some(FieldValue::Text(&self.city)),
            "country" if !self.country.is_empty() => Some(FieldValue::Text(&self.country)),
            _ => None,
        }
    }
}

pub const LOCATION_FILTERS: &[FilterDef] = &[
    FilterDef::search("q", &["name", "address", "city"]),
    FilterDef::category("type", "type"),
    FilterDef::category("country", "country"),
];
