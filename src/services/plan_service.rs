use std::sync::Arc;

use uuid::Uuid;

use crate::{
    constants::prompts::{build_plan_prompt, PLAN_SYSTEM_PROMPT},
    errors::AppResult,
    models::{
        domain::{PlanInsights, PlanReply},
        dto::request::SuggestPlanRequest,
    },
    services::{model_service::CompletionModel, session_store::SessionStore},
};

pub struct PlanService {
    model: Arc<dyn CompletionModel>,
    sessions: Arc<SessionStore>,
}

impl PlanService {
    pub fn new(model: Arc<dyn CompletionModel>, sessions: Arc<SessionStore>) -> Self {
        Self { model, sessions }
    }

    /// One plan-generation round trip: build the prompt, call the model,
    /// parse the tagged reply, clamp a plan to the prompt ceilings, and
    /// record the session's insights on the plan variant.
    pub async fn suggest_plan(
        &self,
        session_id: Uuid,
        request: &SuggestPlanRequest,
    ) -> AppResult<PlanReply> {
        let user_prompt = build_plan_prompt(
            request.age,
            &request.background,
            &request.interest,
            request.feedback.as_deref(),
        );

        let raw = self.model.complete(PLAN_SYSTEM_PROMPT, &user_prompt).await?;
        log::debug!("raw plan reply for session {}: {}", session_id, raw);

        let mut reply = PlanReply::parse(&raw)?;

        if let PlanReply::Plan(plan) = &mut reply {
            if plan.clamp_to_limits() {
                log::warn!(
                    "model exceeded plan limits for session {}; truncated deterministically",
                    session_id
                );
            }
            self.sessions
                .write(session_id, PlanInsights::from(&*plan))
                .await;
        }

        Ok(reply)
    }
}
