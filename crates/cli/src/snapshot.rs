//! One fetch-and-render cycle.
//!
//! Responsibilities:
//! - Fetch services, then the latest deploy of each regular service and the
//!   jobs of each cron service, sequentially and in API order.
//! - Turn the fetched records into Services and Cron Jobs rows.
//! - Render a complete frame (header line plus tables) as a string.
//!
//! Does NOT handle:
//! - Sleeping, clearing the terminal or cancellation (see `watch`).
//!
//! Invariants:
//! - Every snapshot is fetched from scratch; nothing is carried between cycles.
//! - The first fetch error aborts the whole cycle.

use anyhow::{Context, Result};
use chrono_tz::Tz;
use owo_colors::OwoColorize;
use render_client::{Deploy, Job, RenderClient, Service};
use render_config::constants::MISSING_VALUE;
use tracing::debug;

use crate::display::{Cell, Styles, Table, Tier, View, timestamp};

/// Status shown for a cron service that has no job history but has run.
const IMPLIED_CRON_STATUS: &str = "succeeded";

/// Deploys requested per regular service; only the newest is displayed.
const LATEST_DEPLOY_LIMIT: u32 = 1;

/// A row of the Services table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRow {
    pub name: String,
    pub service_type: String,
    pub status: Option<String>,
    pub latest_deploy: String,
    pub updated: String,
}

/// A row of the Cron Jobs table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronRow {
    pub name: String,
    pub schedule: String,
    pub last_run: String,
    pub status: Option<String>,
}

/// Everything displayed in one cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub services: Vec<ServiceRow>,
    pub cron_jobs: Vec<CronRow>,
}

impl Snapshot {
    /// Fetch a fresh snapshot.
    pub async fn fetch(client: &RenderClient, tz: &Tz) -> Result<Self> {
        let services = client
            .list_services()
            .await
            .context("Failed to fetch services")?;
        debug!("Building snapshot for {} services", services.len());

        let mut snapshot = Snapshot::default();
        for service in &services {
            if service.is_cron_job() {
                let jobs = client
                    .list_jobs(&service.id)
                    .await
                    .with_context(|| format!("Failed to fetch jobs for {}", display_name(service)))?;
                snapshot.services.push(service_row(service, None, tz));
                snapshot.cron_jobs.push(cron_row(service, jobs.first(), tz));
            } else {
                let deploys = client
                    .list_deploys(&service.id, Some(LATEST_DEPLOY_LIMIT))
                    .await
                    .with_context(|| {
                        format!("Failed to fetch deploys for {}", display_name(service))
                    })?;
                snapshot
                    .services
                    .push(service_row(service, deploys.first(), tz));
            }
        }
        Ok(snapshot)
    }

    /// Render the frame: header line, blank line, then the tables.
    pub fn render(&self, header: &str, view: &View) -> String {
        let styles = &view.styles;
        let mut out = format!("{}\n\n", header.style(styles.dim));

        if self.services.is_empty() {
            out.push_str(&"No services found".style(styles.warning).to_string());
            out.push('\n');
            return out;
        }

        out.push_str(&self.services_table(styles).render(styles));

        if !self.cron_jobs.is_empty() {
            out.push('\n');
            out.push_str(&self.cron_table(styles).render(styles));
        }
        out
    }

    fn services_table(&self, styles: &Styles) -> Table {
        let mut table = Table::new(
            "Render Services",
            &["Name", "Type", "Status", "Latest Deploy", "Updated"],
        );
        for row in &self.services {
            table.add_row(vec![
                Cell::new(row.name.as_str(), styles.name),
                Cell::new(row.service_type.as_str(), styles.kind),
                status_cell(row.status.as_deref(), styles),
                Cell::plain(row.latest_deploy.as_str()),
                Cell::plain(row.updated.as_str()),
            ]);
        }
        table
    }

    fn cron_table(&self, styles: &Styles) -> Table {
        let mut table = Table::new("Cron Jobs", &["Name", "Schedule", "Last Run", "Status"]);
        for row in &self.cron_jobs {
            table.add_row(vec![
                Cell::new(row.name.as_str(), styles.name),
                Cell::new(row.schedule.as_str(), styles.kind),
                Cell::plain(row.last_run.as_str()),
                status_cell(row.status.as_deref(), styles),
            ]);
        }
        table
    }
}

/// `Last updated: <now>`, with the quit hint in continuous mode.
pub fn header_line(tz: &Tz, watching: bool) -> String {
    let now = timestamp::format_now(tz);
    if watching {
        format!("Last updated: {now} (Ctrl+C to quit)")
    } else {
        format!("Last updated: {now}")
    }
}

fn display_name(service: &Service) -> &str {
    service.name.as_deref().unwrap_or(&service.id)
}

fn status_cell(status: Option<&str>, styles: &Styles) -> Cell {
    match status {
        Some(status) => Cell::new(status, styles.tier(Tier::from_status(status))),
        None => Cell::plain(MISSING_VALUE),
    }
}

fn service_row(service: &Service, latest: Option<&Deploy>, tz: &Tz) -> ServiceRow {
    ServiceRow {
        name: or_missing(service.name.as_deref()),
        service_type: or_missing(service.service_type.as_deref()),
        status: latest.and_then(|d| d.status.clone()),
        latest_deploy: timestamp::format_timestamp(
            latest.and_then(|d| d.created_at.as_deref()),
            tz,
        ),
        updated: timestamp::format_timestamp(service.updated_at.as_deref(), tz),
    }
}

fn cron_row(service: &Service, latest: Option<&Job>, tz: &Tz) -> CronRow {
    let (last_run, status) = match latest {
        Some(job) => (job.last_activity_at(), job.status.clone()),
        None => match service.last_successful_run_at() {
            Some(ts) => (Some(ts), Some(IMPLIED_CRON_STATUS.to_string())),
            None => (None, None),
        },
    };

    CronRow {
        name: or_missing(service.name.as_deref()),
        schedule: or_missing(service.schedule()),
        last_run: timestamp::format_timestamp(last_run, tz),
        status,
    }
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_VALUE).to_string()
}
