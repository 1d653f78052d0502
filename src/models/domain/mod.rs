pub mod grasp_check;
pub mod plan_insights;
pub mod study_plan;

pub use grasp_check::GraspCheck;
pub use plan_insights::PlanInsights;
pub use study_plan::{ClarificationRequest, PlanReply, StudyPlan};
