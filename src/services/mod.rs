pub mod grasp_check_service;
pub mod model_service;
pub mod plan_service;
pub mod session_store;
