//! Job listing endpoint.

use reqwest::Client;
use tracing::{debug, error, info};

use crate::endpoints::{encode_path_segment, fetch_json, unwrap_envelope_or_bare};
use crate::error::Result;
use crate::models::Job;

/// List jobs of a service, newest first.
///
/// Elements may arrive either wrapped under `job` or as bare job objects.
pub async fn list_jobs(
    client: &Client,
    base_url: &str,
    api_key: &str,
    service_id: &str,
) -> Result<Vec<Job>> {
    let endpoint = format!("/services/{}/jobs", encode_path_segment(service_id));
    let url = format!("{}{}", base_url, endpoint);
    debug!(%url, "Fetching jobs");

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", api_key));

    let result = async {
        let body = fetch_json(builder, &endpoint).await?;
        unwrap_envelope_or_bare::<Job>(body, "job", &endpoint)
    }
    .await;

    match &result {
        Ok(jobs) => info!("Fetched {} jobs for service {}", jobs.len(), service_id),
        Err(e) => error!("Failed to fetch jobs for {}: {}", service_id, e),
    }
    result
}
