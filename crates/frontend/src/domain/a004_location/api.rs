use crate::shared::api_utils::store_scoped_url;
use crate::shared::http::get_json;
use contracts::domain::a004_location::Location;

pub async fn fetch_locations(store_id: Option<String>) -> Result<Vec<Location>, String> {
    get_json(&store_scoped_url("/api/locations", store_id.as_deref())).await
}
