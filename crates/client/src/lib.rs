//! Render REST API client.
//!
//! This crate provides a small typed client for the three read-only Render
//! endpoints needed to report service status: services, deploys per service
//! and jobs per service. Each list response is an array of single-key
//! envelopes that the client unwraps into plain records.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::RenderClient;
pub use client::builder::RenderClientBuilder;
pub use error::{ClientError, Result};
pub use models::{Deploy, Job, Service, ServiceDetails};
