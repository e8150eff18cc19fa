//! Service listing endpoint.

use reqwest::Client;
use tracing::{debug, error, info};

use crate::endpoints::{fetch_json, unwrap_envelope};
use crate::error::Result;
use crate::models::Service;

const SERVICES_PATH: &str = "/services";

/// List all services visible to the API key.
pub async fn list_services(client: &Client, base_url: &str, api_key: &str) -> Result<Vec<Service>> {
    let url = format!("{}{}", base_url, SERVICES_PATH);
    debug!(%url, "Fetching services");

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", api_key));

    let result = async {
        let body = fetch_json(builder, SERVICES_PATH).await?;
        unwrap_envelope::<Service>(body, "service", SERVICES_PATH)
    }
    .await;

    match &result {
        Ok(services) => info!("Fetched {} services", services.len()),
        Err(e) => error!("Failed to fetch services: {}", e),
    }
    result
}
