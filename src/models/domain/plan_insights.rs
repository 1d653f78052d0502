use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::study_plan::StudyPlan;

/// The per-session record consulted when generating grasp-check questions.
/// Overwritten on every successful plan generation for the session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlanInsights {
    pub reason: String,
    pub expected_outcome: String,
    pub resources: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<&StudyPlan> for PlanInsights {
    fn from(plan: &StudyPlan) -> Self {
        PlanInsights {
            reason: plan.reason.clone(),
            expected_outcome: plan.expected_outcome.clone(),
            resources: plan.resources.clone(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insights_copy_plan_fields() {
        let plan = StudyPlan {
            study_workflow: [("Topic".to_string(), vec!["a".to_string(), "b".to_string()])]
                .into_iter()
                .collect(),
            reason: "fits your background".to_string(),
            expected_outcome: "you can build things".to_string(),
            resources: vec!["a book".to_string()],
        };

        let insights = PlanInsights::from(&plan);
        assert_eq!(insights.reason, plan.reason);
        assert_eq!(insights.expected_outcome, plan.expected_outcome);
        assert_eq!(insights.resources, plan.resources);
    }
}
