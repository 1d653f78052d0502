use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Ceilings the prompt asks the model to respect. Replies that exceed them
/// are truncated deterministically rather than rejected, so the renderer's
/// bounded-palette assumption stays meaningful.
pub const MAX_TOPICS: usize = 5;
pub const MAX_SUBTOPICS_PER_TOPIC: usize = 5;
pub const MAX_RESOURCES: usize = 3;

/// Structured learning roadmap returned by the model. The workflow is an
/// insertion-ordered map: topic order is the order the plan is studied in.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyPlan {
    pub study_workflow: IndexMap<String, Vec<String>>,
    pub reason: String,
    pub expected_outcome: String,
    pub resources: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClarificationRequest {
    pub follow_up_question: String,
}

/// The two legitimate shapes of a plan-generation reply, discriminated once
/// at the parse boundary and never re-inspected downstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanReply {
    Plan(StudyPlan),
    Clarification(ClarificationRequest),
}

impl PlanReply {
    /// Parses a raw model reply. Presence of `follow_up_question` routes to
    /// the clarification variant; anything else must be a full study plan.
    pub fn parse(raw: &str) -> AppResult<PlanReply> {
        let value: serde_json::Value = serde_json::from_str(raw.trim())
            .map_err(|err| AppError::MalformedResponse(err.to_string()))?;

        if value.get("follow_up_question").is_some() {
            let clarification: ClarificationRequest = serde_json::from_value(value)
                .map_err(|err| AppError::SchemaValidation(err.to_string()))?;
            return Ok(PlanReply::Clarification(clarification));
        }

        let plan: StudyPlan = serde_json::from_value(value)
            .map_err(|err| AppError::SchemaValidation(err.to_string()))?;
        Ok(PlanReply::Plan(plan))
    }
}

impl StudyPlan {
    /// Truncates the plan to the prompt ceilings, preserving order.
    /// Returns true if anything was dropped.
    pub fn clamp_to_limits(&mut self) -> bool {
        let mut clamped = false;

        if self.study_workflow.len() > MAX_TOPICS {
            self.study_workflow.truncate(MAX_TOPICS);
            clamped = true;
        }

        for subtopics in self.study_workflow.values_mut() {
            if subtopics.len() > MAX_SUBTOPICS_PER_TOPIC {
                subtopics.truncate(MAX_SUBTOPICS_PER_TOPIC);
                clamped = true;
            }
        }

        if self.resources.len() > MAX_RESOURCES {
            self.resources.truncate(MAX_RESOURCES);
            clamped = true;
        }

        clamped
    }
}
