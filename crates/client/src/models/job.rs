//! Job models.

use serde::Deserialize;

/// A one-off or cron job run belonging to a service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
}

impl Job {
    /// Most recent timestamp known for this run: finished, else started, else created.
    pub fn last_activity_at(&self) -> Option<&str> {
        self.finished_at
            .as_deref()
            .or(self.started_at.as_deref())
            .or(self.created_at.as_deref())
    }
}
