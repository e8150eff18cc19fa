//! REST API endpoint implementations.
//!
//! Each function performs exactly one GET and returns the unwrapped records.
//! There is no retry layer: failures surface immediately to the caller.

mod deploys;
mod envelope;
mod jobs;
mod request;
mod services;
pub mod url_encoding;

pub use deploys::list_deploys;
pub use envelope::{unwrap_envelope, unwrap_envelope_or_bare};
pub use jobs::list_jobs;
pub use request::{fetch_json, send_request};
pub use services::list_services;
pub use url_encoding::encode_path_segment;
