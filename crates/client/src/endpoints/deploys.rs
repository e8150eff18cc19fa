//! Deploy listing endpoint.

use reqwest::Client;
use tracing::{debug, error, info};

use crate::endpoints::{encode_path_segment, fetch_json, unwrap_envelope};
use crate::error::Result;
use crate::models::Deploy;

/// List deploys of a service, newest first.
///
/// `limit` is forwarded as the `limit` query parameter when given.
pub async fn list_deploys(
    client: &Client,
    base_url: &str,
    api_key: &str,
    service_id: &str,
    limit: Option<u32>,
) -> Result<Vec<Deploy>> {
    let endpoint = format!("/services/{}/deploys", encode_path_segment(service_id));
    let url = format!("{}{}", base_url, endpoint);
    debug!(%url, ?limit, "Fetching deploys");

    let mut builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", api_key));
    if let Some(limit) = limit {
        builder = builder.query(&[("limit", limit)]);
    }

    let result = async {
        let body = fetch_json(builder, &endpoint).await?;
        unwrap_envelope::<Deploy>(body, "deploy", &endpoint)
    }
    .await;

    match &result {
        Ok(deploys) => info!("Fetched {} deploys for service {}", deploys.len(), service_id),
        Err(e) => error!("Failed to fetch deploys for {}: {}", service_id, e),
    }
    result
}
