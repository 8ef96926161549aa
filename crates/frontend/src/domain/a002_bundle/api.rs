use crate::shared::api_utils::{api_url, entity_url, store_scoped_url};
use crate::shared::http::{delete, get_json, post_json, put_json};
use contracts::domain::a002_bundle::{Bundle, BundleRequest};

pub async fn fetch_bundles(store_id: Option<String>) -> Result<Vec<Bundle>, String> {
    get_json(&store_scoped_url("/api/bundles", store_id.as_deref())).await
}

/// Создать набор (`id == None`) или сохранить существующий
pub async fn save_bundle(id: Option<String>, request: BundleRequest) -> Result<Bundle, String> {
    match id {
        Some(id) => put_json(&entity_url("/api/bundles", &id), &request).await,
        None => post_json(&api_url("/api/bundles"), &request).await,
    }
}

pub async fn delete_bundle(id: String) -> Result<(), String> {
    delete(&entity_url("/api/bundles", &id)).await
}
