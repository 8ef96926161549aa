use crate::shared::api_utils::{entity_url, store_scoped_url};
use crate::shared::http::{get_json, put_json};
use contracts::domain::a001_product::{Product, UpdateAttributesRequest};

pub async fn fetch_products(store_id: Option<String>) -> Result<Vec<Product>, String> {
    get_json(&store_scoped_url("/api/products", store_id.as_deref())).await
}

/// Сохранить характеристики товара, ответ - обновленный товар
pub async fn update_attributes(
    product_id: String,
    request: UpdateAttributesRequest,
) -> Result<Product, String> {
    let url = format!("{}/attributes", entity_url("/api/products", &product_id));
    put_json(&url, &request).await
}
