//! Data models for Render API responses.
//!
//! Records are decoded from the objects nested inside each list envelope.
//! Every field except `id` is optional on the wire; unknown fields are ignored.

pub mod deploy;
pub mod job;
pub mod service;

pub use deploy::Deploy;
pub use job::Job;
pub use service::{CRON_JOB_TYPE, Service, ServiceDetails};
