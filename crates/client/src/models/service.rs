//! Service models.

use serde::Deserialize;

/// Service type string the API uses for cron jobs.
pub const CRON_JOB_TYPE: &str = "cron_job";

/// A Render service (web service, worker, cron job, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub service_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub service_details: Option<ServiceDetails>,
}

/// Type-specific details; only the cron fields are modelled.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub last_successful_run_at: Option<String>,
}

impl Service {
    /// True when this service is a cron job.
    pub fn is_cron_job(&self) -> bool {
        self.service_type.as_deref() == Some(CRON_JOB_TYPE)
    }

    /// Cron schedule expression, if any.
    pub fn schedule(&self) -> Option<&str> {
        self.service_details.as_ref()?.schedule.as_deref()
    }

    /// Last successful cron run reported on the service itself.
    pub fn last_successful_run_at(&self) -> Option<&str> {
        self.service_details
            .as_ref()?
            .last_successful_run_at
            .as_deref()
    }
}
