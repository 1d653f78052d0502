#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use chrono::Utc;

    use crate::{
        app_state::AppState,
        config::Config,
        models::domain::PlanInsights,
        services::model_service::MockCompletionModel,
    };

    /// A compliant two-topic plan reply, the shape a well-behaved model
    /// returns for the plan contract.
    pub fn sample_plan_reply_json() -> String {
        serde_json::json!({
            "study_workflow": {
                "Machine Learning Fundamentals": [
                    "Introduction to Machine Learning",
                    "Types of Machine Learning",
                    "Model Evaluation Metrics"
                ],
                "Deep Learning with Python": [
                    "Introduction to Neural Networks",
                    "Convolutional Neural Networks",
                    "Transfer Learning"
                ]
            },
            "reason": "Given your background in computer science, this plan dives into the fundamentals of machine learning.",
            "expected_outcome": "After completing this plan, you will be able to design, train, and deploy machine learning models.",
            "resources": [
                "Machine Learning Crash Course - YouTube by Google Developers"
            ]
        })
        .to_string()
    }

    /// A reply that ignores the topic ceiling: six topics instead of five.
    pub fn oversized_plan_reply_json() -> String {
        let workflow: serde_json::Map<String, serde_json::Value> = (1..=6)
            .map(|i| {
                (
                    format!("Topic {i}"),
                    serde_json::json!(["first subtopic", "second subtopic"]),
                )
            })
            .collect();

        serde_json::json!({
            "study_workflow": workflow,
            "reason": "reason text",
            "expected_outcome": "outcome text",
            "resources": ["one resource"]
        })
        .to_string()
    }

    pub fn sample_insights() -> PlanInsights {
        PlanInsights {
            reason: "Given your background in computer science, this plan dives into the fundamentals of machine learning.".to_string(),
            expected_outcome: "After completing this plan, you will be able to design, train, and deploy machine learning models.".to_string(),
            resources: vec![
                "Machine Learning Crash Course - YouTube by Google Developers".to_string(),
            ],
            updated_at: Utc::now(),
        }
    }

    /// App state wired around a mock model that answers every completion
    /// with the given reply.
    pub fn app_state_with_reply(reply: &str) -> AppState {
        let reply = reply.to_string();
        let mut model = MockCompletionModel::new();
        model
            .expect_complete()
            .returning(move |_, _| Ok(reply.clone()));

        AppState::with_model(Arc::new(model), Config::test_config())
    }
}
