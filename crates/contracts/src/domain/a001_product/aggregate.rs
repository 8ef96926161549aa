use crate::domain::common::EntityMetadata;
use crate::enums::product_status::ProductStatus;
use crate::shared::collection::{Entity, FieldValue, FilterDef};
use crate::shared::form::{FieldError, FormDraft, KeyValueArray, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Остаток, ниже которого товар считается заканчивающимся, если у товара
/// не задана своя точка перезаказа
pub const DEFAULT_REORDER_POINT: u32 = 10;

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: ProductStatus,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub reorder_point: Option<u32>,
    #[serde(default)]
    pub warehouse_id: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Уровень остатка товара
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockLevel {
    pub fn code(&self) -> &'static str {
        match self {
            StockLevel::InStock => "in_stock",
            StockLevel::LowStock => "low_stock",
            StockLevel::OutOfStock => "out_of_stock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockLevel::InStock => "In stock",
            StockLevel::LowStock => "Low stock",
            StockLevel::OutOfStock => "Out of stock",
        }
    }

    pub fn all() -> Vec<StockLevel> {
        vec![StockLevel::InStock, StockLevel::LowStock, StockLevel::OutOfStock]
    }
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        let reorder_point = self.reorder_point.unwrap_or(DEFAULT_REORDER_POINT);
        if self.stock == 0 {
            StockLevel::OutOfStock
        } else if self.stock <= reorder_point {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        }
    }
}

impl Entity for Product {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "sku" => Some(FieldValue::Text(&self.sku)),
            "category" if !self.category.is_empty() => Some(FieldValue::Text(&self.category)),
            "status" => Some(FieldValue::Text(self.status.code())),
            "price" => Some(FieldValue::Number(self.price)),
            "stock" => Some(FieldValue::Number(f64::from(self.stock))),
            "stockLevel" => Some(FieldValue::Text(self.stock_level().code())),
            "warehouseId" => self.warehouse_id.as_deref().map(FieldValue::Text),
            "createdAt" => Some(FieldValue::Timestamp(self.metadata.created_at)),
            "updatedAt" => Some(FieldValue::Timestamp(self.metadata.updated_at)),
            _ => None,
        }
    }
}

/// Фильтры списка товаров
pub const PRODUCT_FILTERS: &[FilterDef] = &[
    FilterDef::search("q", &["name", "sku"]),
    FilterDef::category("status", "status"),
    FilterDef::category("category", "category"),
    FilterDef::category("stock", "stockLevel"),
    FilterDef::category("warehouse", "warehouseId"),
    FilterDef::bucket("price", "price"),
];

/// Тело запроса сохранения характеристик товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAttributesRequest {
    pub attributes: BTreeMap<String, String>,
}

/// Черновик редактора характеристик товара
#[derive(Debug, Clone, Default)]
pub struct ProductAttributesDraft {
    pub product_id: String,
    pub attributes: KeyValueArray<String>,
}

impl ProductAttributesDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            attributes: KeyValueArray::from_pairs(product.attributes.clone()),
        }
    }

    pub fn to_request(&self) -> UpdateAttributesRequest {
        UpdateAttributesRequest {
            attributes: self.attributes.to_map(),
        }
    }
}

impl FormDraft for ProductAttributesDraft {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        self.attributes.validate_into("attributes", true, &mut errors);
        for (index, row) in self.attributes.rows().iter().enumerate() {
            if !row.key.trim().is_empty() && row.value.trim().is_empty() {
                errors.add_row("attributes", index, FieldError::new("value", "Value is required"));
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collection::{derive_view, FilterSet, FilterState, SortSpec};
    use crate::shared::form::{FormSession, RenamePolicy};

    fn product(id: &str, name: &str, sku: &str, status: ProductStatus, price: f64, stock: u32) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            sku: sku.to_string(),
            category: "electronics".to_string(),
            status,
            price,
            stock,
            reorder_point: None,
            warehouse_id: None,
            attributes: BTreeMap::new(),
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn test_deserialize_from_api() {
        let json = r#"{
            "id": "p-1",
            "name": "Laptop Pro X1",
            "sku": "LP-X1-2024",
            "category": "electronics",
            "status": "active",
            "price": 1299.0,
            "stock": 4,
            "warehouseId": "w-1",
            "attributes": {"color": "silver"},
            "createdAt": "2024-03-15T14:02:26Z",
            "updatedAt": "2024-03-16T09:00:00Z"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.status, ProductStatus::Active);
        assert_eq!(p.warehouse_id.as_deref(), Some("w-1"));
        assert_eq!(p.stock_level(), StockLevel::LowStock);
        assert_eq!(p.attributes.get("color").map(String::as_str), Some("silver"));
    }

    #[test]
    fn test_product_list_search_and_filters() {
        let items = vec![
            product("1", "Laptop Pro X1", "LP-X1-2024", ProductStatus::Active, 1299.0, 4),
            product("2", "Tablet S", "TB-S-01", ProductStatus::Active, 399.0, 50),
            product("3", "Laptop Sleeve", "LS-15", ProductStatus::Inactive, 29.0, 0),
        ];

        let run = |state: FilterState| {
            let set = FilterSet::compile(PRODUCT_FILTERS, &state).unwrap();
            derive_view(&items, &set, Some(&SortSpec::asc("name")))
                .into_iter()
                .map(|p| p.id)
                .collect::<Vec<_>>()
        };

        assert_eq!(run(FilterState::new().with("q", "laptop")), vec!["1", "3"]);
        assert_eq!(run(FilterState::new().with("q", "LP-X1")), vec!["1"]);
        assert!(run(FilterState::new().with("q", "phone")).is_empty());
        assert_eq!(run(FilterState::new().with("stock", "out_of_stock")), vec!["3"]);
        assert_eq!(
            run(FilterState::new().with("status", "active").with("price", "over100")),
            vec!["1", "2"]
        );
    }

    #[test]
    fn test_attributes_form_submit() {
        let mut p = product("1", "Laptop", "LP", ProductStatus::Active, 10.0, 1);
        p.attributes.insert("color".into(), "red".into());
        p.attributes.insert("size".into(), "15in".into());

        let mut session = FormSession::new(ProductAttributesDraft::from_product(&p));
        let renamed = session.try_edit(|d| d.attributes.rename("color", "size", RenamePolicy::Reject));
        assert!(renamed.is_err());

        session
            .try_edit(|d| d.attributes.rename("color", "finish", RenamePolicy::Reject))
            .unwrap();
        let draft = session.begin_submit().unwrap();
        let request = draft.to_request();
        assert_eq!(request.attributes.get("finish").map(String::as_str), Some("red"));
        assert_eq!(request.attributes.len(), 2);
    }

    #[test]
    fn test_attributes_form_requires_values() {
        let mut draft = ProductAttributesDraft::default();
        draft.attributes.insert("color", String::new()).unwrap();
        let errors = draft.validate();
        assert_eq!(errors.invalid_rows("attributes"), vec![0]);
    }
}
