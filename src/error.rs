//! Error types for the Blockmove API client.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong with an API call.
///
/// Errors always propagate to the caller immediately: there is no retry,
/// no fallback endpoint, no circuit breaking.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or empty credentials. Raised before any network I/O.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP round-trip itself failed: non-200 status, connection
    /// failure, or a response body that is not valid JSON.
    #[error("transport error calling {url}: {message}")]
    Transport {
        url: String,
        /// HTTP status, when a response was received at all.
        status: Option<u16>,
        /// Raw response body, when one was received.
        body: Option<String>,
        /// Low-level transport error descriptor.
        message: String,
    },

    /// Transport succeeded but the service reported `code != 200`.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },
}
