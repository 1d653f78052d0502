use actix_web::{get, web, HttpResponse};
use uuid::Uuid;

use crate::{app_state::AppState, errors::AppError, models::dto::response::ResourcesResponse};

/// Returns the session's saved resources plus freshly generated grasp-check
/// questions. A session without a generated plan yet gets the degraded empty
/// payload rather than an error.
#[get("/api/sessions/{id}/resources")]
pub async fn get_resources(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session_id = id.into_inner();

    let Some(insights) = state.session_store.read(&session_id).await else {
        log::info!("no plan insights for session {}; returning empty resources", session_id);
        return Ok(HttpResponse::Ok().json(ResourcesResponse::empty()));
    };

    let questions = state.grasp_check_service.generate_checks(&insights).await;

    Ok(HttpResponse::Ok().json(ResourcesResponse::from_parts(&insights.resources, &questions)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_unknown_session_returns_empty_payload() {
        let state = crate::test_utils::fixtures::app_state_with_reply("unused");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_resources),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/resources", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["resources"], "");
        assert_eq!(body["questions"], "");
    }

    #[actix_web::test]
    async fn test_known_session_returns_resources_and_questions() {
        let state = crate::test_utils::fixtures::app_state_with_reply("- What is X?\n- Why Y?");
        let session_id = Uuid::new_v4();
        state
            .session_store
            .write(session_id, crate::test_utils::fixtures::sample_insights())
            .await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_resources),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/resources", session_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["resources"],
            "- Machine Learning Crash Course - YouTube by Google Developers"
        );
        assert_eq!(body["questions"], "What is X?\nWhy Y?");
    }
}
