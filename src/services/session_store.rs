use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::domain::PlanInsights;

/// In-memory, session-scoped store of the most recent plan insights.
/// Last-writer-wins per session; entries live for the process lifetime.
/// Reading a session that has never been written is a legitimate degraded
/// state and yields `None`.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: RwLock<HashMap<Uuid, PlanInsights>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the session's insights with the latest successful plan.
    pub async fn write(&self, session_id: Uuid, insights: PlanInsights) {
        self.entries.write().await.insert(session_id, insights);
    }

    pub async fn read(&self, session_id: &Uuid) -> Option<PlanInsights> {
        self.entries.read().await.get(session_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
