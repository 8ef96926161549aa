use crate::shared::api_utils::api_url;
use crate::shared::http::post_json;
use contracts::domain::a007_custom_plan::{CustomPlanRequest, CustomPlanResponse};

/// Отправить запрос индивидуального тарифа
pub async fn request_custom_plan(request: CustomPlanRequest) -> Result<CustomPlanResponse, String> {
    post_json(&api_url("/api/plans/custom"), &request).await
}
