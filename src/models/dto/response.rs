use serde::Serialize;
use uuid::Uuid;

use crate::diagram;
use crate::models::domain::PlanReply;

#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub session_id: Uuid,
    pub diagram: String,
    pub reason: String,
    pub expected_outcome: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClarificationResponse {
    pub session_id: Uuid,
    pub follow_up_question: String,
}

/// Uniform (status, payload) shape for the plan endpoint: either a rendered
/// plan or a follow-up question for the user.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SuggestPlanResponse {
    Complete(PlanResponse),
    Clarify(ClarificationResponse),
}

impl SuggestPlanResponse {
    pub fn from_reply(session_id: Uuid, reply: PlanReply) -> Self {
        match reply {
            PlanReply::Plan(plan) => SuggestPlanResponse::Complete(PlanResponse {
                session_id,
                diagram: diagram::render(&plan.study_workflow),
                reason: plan.reason,
                expected_outcome: plan.expected_outcome,
            }),
            PlanReply::Clarification(clarification) => {
                SuggestPlanResponse::Clarify(ClarificationResponse {
                    session_id,
                    follow_up_question: clarification.follow_up_question,
                })
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourcesResponse {
    pub resources: String,
    pub questions: String,
}

impl ResourcesResponse {
    /// Degraded shape returned when no plan has been generated for the
    /// session yet.
    pub fn empty() -> Self {
        ResourcesResponse {
            resources: String::new(),
            questions: String::new(),
        }
    }

    pub fn from_parts(resources: &[String], questions: &[String]) -> Self {
        ResourcesResponse {
            resources: resources
                .iter()
                .map(|resource| format!("- {}", resource))
                .collect::<Vec<_>>()
                .join("\n"),
            questions: questions.join("\n"),
        }
    }
}
