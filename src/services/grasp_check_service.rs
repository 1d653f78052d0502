use std::sync::Arc;

use crate::{
    constants::grasp_prompt::{build_grasp_prompt, GRASP_CHECK_SYSTEM_PROMPT},
    models::domain::{GraspCheck, PlanInsights},
    services::model_service::CompletionModel,
};

pub struct GraspCheckService {
    model: Arc<dyn CompletionModel>,
}

impl GraspCheckService {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Generates comprehension-check questions from the session's last plan
    /// insights. The feature is supplementary, so every failure fails soft:
    /// the cause is logged and an empty list is returned.
    pub async fn generate_checks(&self, insights: &PlanInsights) -> Vec<String> {
        let user_prompt = build_grasp_prompt(
            &insights.reason,
            &insights.expected_outcome,
            &insights.resources,
        );

        match self
            .model
            .complete(GRASP_CHECK_SYSTEM_PROMPT, &user_prompt)
            .await
        {
            Ok(raw) => {
                let check = GraspCheck::parse(&raw);
                if check.questions.is_empty() {
                    log::warn!("grasp check reply contained no usable questions");
                }
                check.questions
            }
            Err(err) => {
                log::warn!("grasp check generation failed: {}", err);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::services::model_service::MockCompletionModel;
    use chrono::Utc;

    fn insights() -> PlanInsights {
        PlanInsights {
            reason: "You know CS basics already.".to_string(),
            expected_outcome: "You will train ML models.".to_string(),
            resources: vec!["ML Crash Course".to_string()],
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn generate_checks_parses_bulleted_reply() {
        let mut model = MockCompletionModel::new();
        model
            .expect_complete()
            .returning(|_, _| Ok("- What is X?\n\n- Why Y?".to_string()));

        let service = GraspCheckService::new(Arc::new(model));
        let questions = service.generate_checks(&insights()).await;

        assert_eq!(questions, vec!["What is X?", "Why Y?"]);
    }

    #[tokio::test]
    async fn generate_checks_fails_soft_on_model_error() {
        let mut model = MockCompletionModel::new();
        model
            .expect_complete()
            .returning(|_, _| Err(AppError::ModelUnavailable("timeout".to_string())));

        let service = GraspCheckService::new(Arc::new(model));
        let questions = service.generate_checks(&insights()).await;

        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn generate_checks_embeds_insights_in_prompt() {
        let mut model = MockCompletionModel::new();
        model
            .expect_complete()
            .withf(|_, user_prompt| {
                user_prompt.contains("You know CS basics already.")
                    && user_prompt.contains("You will train ML models.")
                    && user_prompt.contains("- ML Crash Course")
            })
            .returning(|_, _| Ok("What is overfitting?".to_string()));

        let service = GraspCheckService::new(Arc::new(model));
        let questions = service.generate_checks(&insights()).await;

        assert_eq!(questions, vec!["What is overfitting?"]);
    }

    #[tokio::test]
    async fn generate_checks_returns_empty_for_blank_reply() {
        let mut model = MockCompletionModel::new();
        model
            .expect_complete()
            .returning(|_, _| Ok("   \n\n".to_string()));

        let service = GraspCheckService::new(Arc::new(model));
        assert!(service.generate_checks(&insights()).await.is_empty());
    }
}
