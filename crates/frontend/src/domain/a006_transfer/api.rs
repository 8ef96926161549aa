use crate::shared::api_utils::{api_url, store_scoped_url};
use crate::shared::http::{get_json, post_json};
use contracts::domain::a006_transfer::{CreateTransferRequest, Transfer};

pub async fn fetch_transfers(store_id: Option<String>) -> Result<Vec<Transfer>, String> {
    get_json(&store_scoped_url("/api/transfers", store_id.as_deref())).await
}

pub async fn create_transfer(request: CreateTransferRequest) -> Result<Transfer, String> {
    post_json(&api_url("/api/transfers"), &request).await
}
