use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::SuggestPlanRequest, response::SuggestPlanResponse},
};

/// Handles both the initial profile submission and the feedback revision;
/// the two actions differ only by the optional feedback field.
#[post("/api/plans")]
pub async fn suggest_plan(
    state: web::Data<AppState>,
    request: web::Json<SuggestPlanRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);
    let reply = state.plan_service.suggest_plan(session_id, &request).await?;

    Ok(HttpResponse::Ok().json(SuggestPlanResponse::from_reply(session_id, reply)))
}

#[get("/api/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
