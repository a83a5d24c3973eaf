//! Document store client error types.

/// Errors from document store calls.
#[derive(Debug, thiserror::Error)]
pub enum StoreApiError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// Method and path of the failed call, e.g. `GET /v3/b/doc/latest`,
        /// or `client_init` when the HTTP client could not be built.
        endpoint: String,
        /// Underlying transport failure.
        source: reqwest::Error,
    },
    /// The store returned a non-2xx status.
    #[error("document store {endpoint} returned {status}: {body}")]
    ApiError {
        /// Method and path of the failed call.
        endpoint: String,
        /// HTTP status code returned.
        status: u16,
        /// Response body, or empty if it could not be read.
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// Method and path of the call whose body failed to decode.
        endpoint: String,
        /// Decode failure reported by reqwest.
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
