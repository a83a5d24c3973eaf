//! # Error Types
//!
//! Field validation never produces an error value; a failed pass is reported
//! through [`crate::ValidationResult`] and the error indicators. The only
//! fallible operation in this crate is reading the photographer id from the
//! page URL.

use thiserror::Error;

/// Errors reading the photographer identifier from the page URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The `id` query parameter is absent or empty.
    #[error("page URL has no \"id\" query parameter")]
    MissingId,

    /// The `id` query parameter is not a base-10 unsigned integer.
    #[error("invalid photographer id: \"{value}\" (expected a decimal number)")]
    InvalidId {
        /// The raw query value that failed to parse.
        value: String,
    },
}
