use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        grasp_check_service::GraspCheckService,
        model_service::{CompletionModel, OpenAiModelService},
        plan_service::PlanService,
        session_store::SessionStore,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub plan_service: Arc<PlanService>,
    pub grasp_check_service: Arc<GraspCheckService>,
    pub session_store: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model: Arc<dyn CompletionModel> = Arc::new(OpenAiModelService::new(&config));
        Self::with_model(model, config)
    }

    /// Wires the services around an explicit model implementation; tests use
    /// this to swap in a mock for the LLM boundary.
    pub fn with_model(model: Arc<dyn CompletionModel>, config: Config) -> Self {
        let session_store = Arc::new(SessionStore::new());
        let plan_service = Arc::new(PlanService::new(model.clone(), session_store.clone()));
        let grasp_check_service = Arc::new(GraspCheckService::new(model));

        Self {
            plan_service,
            grasp_check_service,
            session_store,
            config: Arc::new(config),
        }
    }
}
