#![deny(missing_docs)]

//! # fisheye-client -- Photographer document store client and profile loader
//!
//! Provides typed access to the JSON document store that holds the
//! FishEye photographer collection, and the [`ProfileLoader`] that uses it
//! to personalize the contact modal heading on page load.
//!
//! ## Request Shape
//!
//! One `GET {store_url}` per load, carrying the static read-only key in the
//! `X-Access-Key` header. The key is configured through [`StoreConfig`] and
//! never appears in `Debug` output.
//!
//! ## Failure Handling
//!
//! Transport errors, non-2xx statuses and undecodable bodies surface as
//! [`StoreApiError`]. The loader logs them and reports
//! [`LoadOutcome::Failed`]; it never retries.

pub mod config;
pub mod error;
pub mod loader;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreApiError;
pub use loader::{LoadOutcome, ProfileLoader, ProfileSource};
pub use store::StoreClient;
