//! # Profile Loader
//!
//! Personalizes the contact modal once per page load:
//!
//! 1. read the `id` parameter from the page URL (no id, no request);
//! 2. fetch the photographer collection from a [`ProfileSource`];
//! 3. take the leading decimal digits of the `id` value as the photographer
//!    id, find that record and write the localized greeting into the
//!    heading.
//!
//! Every failure is logged with `tracing::error!` and leaves the heading as
//! it was. Nothing is retried and nothing is cached. The single await point
//! is the fetch; the heading is only touched after it resolves.

use std::future::Future;

use fisheye_core::{
    find_profile, raw_photographer_id, Greeting, Heading, PhotographerId, ProfileRecord,
};
use url::Url;

use crate::error::StoreApiError;
use crate::store::StoreClient;

/// Anything that can produce the photographer collection.
pub trait ProfileSource {
    /// Fetch every photographer record.
    fn fetch_profiles(
        &self,
    ) -> impl Future<Output = Result<Vec<ProfileRecord>, StoreApiError>> + Send;
}

impl ProfileSource for StoreClient {
    async fn fetch_profiles(&self) -> Result<Vec<ProfileRecord>, StoreApiError> {
        self.fetch_all().await
    }
}

/// What a load attempt did.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The heading now greets this photographer.
    Rendered(ProfileRecord),
    /// The page URL has no `id`; nothing was fetched.
    MissingId,
    /// The `id` value has no leading decimal digits, so the fetched
    /// collection was not searched.
    InvalidId(String),
    /// The collection has no record with this id.
    NotFound(PhotographerId),
    /// The fetch or decode failed.
    Failed(StoreApiError),
}

impl LoadOutcome {
    /// Whether the heading was updated.
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Loads the photographer named by the page URL and greets them in the heading.
#[derive(Debug, Clone)]
pub struct ProfileLoader<S> {
    source: S,
    greeting: Greeting,
}

impl<S: ProfileSource> ProfileLoader<S> {
    /// A loader reading from `source` with the default (French) greeting.
    pub fn new(source: S) -> Self {
        Self {
            source,
            greeting: Greeting::default(),
        }
    }

    /// Use a different greeting template.
    pub fn with_greeting(mut self, greeting: Greeting) -> Self {
        self.greeting = greeting;
        self
    }

    /// The profile source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the load for `page_url`, writing into `heading` on success.
    pub async fn load<H>(&self, page_url: &Url, heading: &mut H) -> LoadOutcome
    where
        H: Heading + ?Sized,
    {
        let Ok(raw_id) = raw_photographer_id(page_url) else {
            tracing::error!(url = %page_url, "photographer id is missing from the page URL");
            return LoadOutcome::MissingId;
        };

        let records = match self.source.fetch_profiles().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(photographer_id = %raw_id, "failed to load photographer profile: {e}");
                return LoadOutcome::Failed(e);
            }
        };

        let id = match PhotographerId::from_query_value(&raw_id) {
            Ok(id) => id,
            Err(_) => {
                tracing::error!(
                    value = %raw_id,
                    searched = records.len(),
                    "photographer id has no leading digits; no photographer matches"
                );
                return LoadOutcome::InvalidId(raw_id);
            }
        };

        match find_profile(&records, id) {
            Some(record) => {
                heading.set_text(&self.greeting.render(&record.name));
                tracing::info!(photographer_id = %id, name = %record.name, "contact heading personalized");
                LoadOutcome::Rendered(record.clone())
            }
            None => {
                tracing::error!(
                    photographer_id = %id,
                    searched = records.len(),
                    "no photographer with this id"
                );
                LoadOutcome::NotFound(id)
            }
        }
    }
}
