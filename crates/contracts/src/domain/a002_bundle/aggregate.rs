use crate::domain::common::EntityMetadata;
use crate::enums::product_status::ProductStatus;
use crate::shared::collection::{Entity, FieldValue, FilterDef};
use crate::shared::form::{FieldArray, FieldError, FormDraft, Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Строка состава набора
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleItem {
    pub product_id: String,
    pub quantity: u32,
}

impl Validate for BundleItem {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.product_id.trim().is_empty() {
            errors.push(FieldError::new("productId", "Select a product"));
        }
        if self.quantity == 0 {
            errors.push(FieldError::new("quantity", "Quantity must be at least 1"));
        }
        errors
    }
}

/// Набор (комплект) товаров, продаваемый как одна позиция
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub id: String,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub status: ProductStatus,
    pub price: f64,
    #[serde(default)]
    pub items: Vec<BundleItem>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Bundle {
    pub fn total_units(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

impl Entity for Bundle {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "sku" => Some(FieldValue::Text(&self.sku)),
            "status" => Some(FieldValue::Text(self.status.code())),
            "price" => Some(FieldValue::Number(self.price)),
            "items" => Some(FieldValue::Number(self.items.len() as f64)),
            "createdAt" => Some(FieldValue::Timestamp(self.metadata.created_at)),
            _ => None,
        }
    }
}

pub const BUNDLE_FILTERS: &[FilterDef] = &[
    FilterDef::search("q", &["name", "sku"]),
    FilterDef::category("status", "status"),
    FilterDef::bucket("price", "price"),
];

/// Тело запроса создания/изменения набора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleRequest {
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub items: Vec<BundleItem>,
}

/// Черновик формы набора
#[derive(Debug, Clone, Default)]
pub struct BundleDraft {
    pub id: Option<String>,
    pub name: String,
    pub sku: String,
    /// Цена как введена в поле формы
    pub price: String,
    pub items: FieldArray<BundleItem>,
}

impl BundleDraft {
    pub fn from_bundle(bundle: &Bundle) -> Self {
        Self {
            id: Some(bundle.id.clone()),
            name: bundle.name.clone(),
            sku: bundle.sku.clone(),
            price: bundle.price.to_string(),
            items: FieldArray::from_rows(bundle.items.clone()),
        }
    }

    fn parsed_price(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
    }

    /// Вызывать после успешной валидации
    pub fn to_request(&self) -> BundleRequest {
        BundleRequest {
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            price: self.parsed_price().unwrap_or_default(),
            items: self.items.rows().to_vec(),
        }
    }
}

impl FormDraft for BundleDraft {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.require("sku", &self.sku, "SKU is required");
        if self.parsed_price().is_none() {
            errors.add_field("price", "Price must be a non-negative number");
        }
        self.items.validate_into("items", &mut errors);

        // один товар не должен повторяться в составе
        for (index, item) in self.items.iter().enumerate() {
            let first = self
                .items
                .iter()
                .position(|i| !i.product_id.is_empty() && i.product_id == item.product_id);
            if first.is_some_and(|f| f < index) {
                errors.add_row(
                    "items",
                    index,
                    FieldError::new("productId", "Product already in bundle"),
                );
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, quantity: u32) -> BundleItem {
        BundleItem {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_bundle_draft_validation() {
        let mut draft = BundleDraft {
            name: "Starter kit".into(),
            sku: "KIT-1".into(),
            price: "abc".into(),
            ..Default::default()
        };
        draft.items = FieldArray::from_rows(vec![item("p1", 1), item("p1", 2), item("", 0)]);

        let errors = draft.validate();
        assert_eq!(errors.field("price"), Some("Price must be a non-negative number"));
        assert_eq!(errors.invalid_rows("items"), vec![1, 2]);
    }

    #[test]
    fn test_bundle_request_wire_shape() {
        let mut draft = BundleDraft {
            name: " Starter kit ".into(),
            sku: "KIT-1".into(),
            price: "59.90".into(),
            ..Default::default()
        };
        draft.items.set(0, item("p1", 2)).unwrap();
        assert!(draft.validate().is_empty());

        let json = serde_json::to_value(draft.to_request()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Starter kit",
                "sku": "KIT-1",
                "price": 59.9,
                "items": [{"productId": "p1", "quantity": 2}]
            })
        );
    }
}
