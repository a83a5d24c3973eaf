//! # Greet Subcommand
//!
//! Runs the profile loader for a photographer page URL and prints the
//! contact heading as the page would show it afterwards.
//!
//! ```bash
//! FISHEYE_ACCESS_KEY=... fisheye greet "https://fisheye.test/photographer.html?id=243"
//! fisheye greet --lang en --store-url http://127.0.0.1:8080/b/doc --access-key k "...?id=7"
//! ```

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use fisheye_client::config::{ConfigError, ACCESS_KEY_VAR, STORE_URL_VAR, TIMEOUT_VAR};
use fisheye_client::{LoadOutcome, ProfileLoader, StoreClient, StoreConfig};
use fisheye_core::{Greeting, MemoryHeading, HEADING_ID};

/// Arguments for the `fisheye greet` subcommand.
///
/// The store flags override `FISHEYE_STORE_URL`, `FISHEYE_ACCESS_KEY` and
/// `FISHEYE_TIMEOUT_SECS`.
#[derive(Args, Debug)]
pub struct GreetArgs {
    /// Photographer page URL carrying the `id` query parameter.
    #[arg(value_name = "PAGE_URL")]
    pub page_url: Url,

    /// URL of the photographer document.
    #[arg(long)]
    pub store_url: Option<String>,

    /// Read-only access key for the document store.
    #[arg(long)]
    pub access_key: Option<String>,

    /// Request timeout in seconds. No timeout by default.
    #[arg(long)]
    pub timeout_secs: Option<String>,

    /// Greeting language (`fr` or `en`).
    #[arg(long, default_value = "fr")]
    pub lang: Greeting,

    /// Heading text before personalization.
    #[arg(long, default_value = "Contactez-moi")]
    pub heading: String,
}

impl GreetArgs {
    /// Store configuration from these flags, falling back to the process
    /// environment for any flag not given.
    pub fn store_config(&self) -> Result<StoreConfig, ConfigError> {
        self.store_config_with(|var| std::env::var(var).ok())
    }

    fn store_config_with<F>(&self, env: F) -> Result<StoreConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        StoreConfig::from_vars(|var| {
            let flag = match var {
                STORE_URL_VAR => &self.store_url,
                ACCESS_KEY_VAR => &self.access_key,
                TIMEOUT_VAR => &self.timeout_secs,
                _ => &None,
            };
            flag.clone().or_else(|| env(var))
        })
    }
}

/// Execute the greet subcommand.
///
/// Returns exit code: 0 if the heading was personalized, 1 if no photographer
/// matched the id, 2 if the id was missing or the store could not be read.
pub async fn run_greet(args: &GreetArgs) -> Result<u8> {
    let config = args
        .store_config()
        .context("invalid document store configuration")?;
    tracing::debug!(?config, "building document store client");
    let client = StoreClient::new(config).context("failed to build document store client")?;
    let loader = ProfileLoader::new(client).with_greeting(args.lang);

    let mut heading = MemoryHeading::new(args.heading.as_str());
    let outcome = loader.load(&args.page_url, &mut heading).await;
    tracing::debug!(element = HEADING_ID, writes = heading.writes(), "heading after load");
    println!("{}", heading.text());

    Ok(exit_code(&outcome))
}

/// Map a load outcome to the subcommand's exit code.
pub fn exit_code(outcome: &LoadOutcome) -> u8 {
    match outcome {
        LoadOutcome::Rendered(_) => 0,
        LoadOutcome::NotFound(_) | LoadOutcome::InvalidId(_) => 1,
        LoadOutcome::MissingId | LoadOutcome::Failed(_) => 2,
    }
}
