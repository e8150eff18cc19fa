//! Percent-encoding for resource ids interpolated into API paths.
//!
//! Service ids come from the API itself, but they are still encoded as a
//! single path segment so a malformed id can never change the request path.
//!
//! ```
//! use render_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("srv-abc123"), "srv-abc123");
//! assert_eq!(encode_path_segment("../services"), "..%2Fservices");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments (RFC 3986 §3.3
/// plus delimiters that would alter the request path or query).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
