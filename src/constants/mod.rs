pub mod grasp_prompt;
pub mod prompts;
