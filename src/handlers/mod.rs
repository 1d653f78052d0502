pub mod plan_handler;
pub mod resources_handler;

pub use plan_handler::{health_check, suggest_plan};
pub use resources_handler::get_resources;
