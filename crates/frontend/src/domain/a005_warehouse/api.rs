use crate::shared::api_utils::store_scoped_url;
use crate::shared::http::get_json;
use contracts::domain::a005_warehouse::Warehouse;

pub async fn fetch_warehouses(store_id: Option<String>) -> Result<Vec<Warehouse>, String> {
    get_json(&store_scoped_url("/api/warehouses", store_id.as_deref())).await
}
