use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Body for both submit-profile and submit-feedback actions; feedback is the
/// only difference between the two.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SuggestPlanRequest {
    #[validate(range(min = 1, max = 120))]
    pub age: i32,

    #[validate(length(min = 1, max = 1000))]
    pub background: String,

    #[validate(length(min = 1, max = 1000))]
    pub interest: String,

    #[validate(length(max = 2000))]
    pub feedback: Option<String>,

    /// Absent on the first submission; a fresh session id is minted and
    /// returned in the response.
    pub session_id: Option<Uuid>,
}
