use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::domain::a008_store::Store;

/// Магазины, доступные пользователю
pub async fn fetch_stores() -> Result<Vec<Store>, String> {
    get_json(&api_url("/api/stores")).await
}
