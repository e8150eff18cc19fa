//! Service, deploy and job listing methods for [`RenderClient`].

use secrecy::ExposeSecret;

use crate::client::RenderClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Deploy, Job, Service};

impl RenderClient {
    /// List all services, in API order.
    pub async fn list_services(&self) -> Result<Vec<Service>> {
        endpoints::list_services(&self.http, &self.base_url, self.api_key.expose_secret()).await
    }

    /// List deploys of a service, newest first.
    pub async fn list_deploys(&self, service_id: &str, limit: Option<u32>) -> Result<Vec<Deploy>> {
        endpoints::list_deploys(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            service_id,
            limit,
        )
        .await
    }

    /// List jobs of a service, newest first.
    pub async fn list_jobs(&self, service_id: &str) -> Result<Vec<Job>> {
        endpoints::list_jobs(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            service_id,
        )
        .await
    }
}
