use crate::shared::api_utils::{api_url, store_scoped_url};
use crate::shared::http::{get_json, post_empty};
use contracts::domain::a003_notification::{MarkReadRequest, Notification};

pub async fn fetch_notifications(store_id: Option<String>) -> Result<Vec<Notification>, String> {
    get_json(&store_scoped_url("/api/notifications", store_id.as_deref())).await
}

pub async fn mark_read(request: MarkReadRequest) -> Result<(), String> {
    post_empty(&api_url("/api/notifications/read"), &request).await
}
