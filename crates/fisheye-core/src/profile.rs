//! # Photographer Profiles
//!
//! The profile record served by the remote JSON store, its typed identifier,
//! and the localized greeting written into the contact modal's heading.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Numeric identifier of a photographer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotographerId(u64);

impl PhotographerId {
    /// Wrap a raw identifier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Read an identifier from a page query value the way a base-10 page
    /// parse does.
    ///
    /// Leading whitespace and one sign are skipped, then the leading decimal
    /// digits are taken and anything after them is ignored, so `"7abc"`,
    /// `"7.0"`, `"+7"` and `" 7"` all give 7. A value without leading
    /// digits, or one naming a negative or out-of-range number, identifies
    /// no photographer.
    pub fn from_query_value(value: &str) -> Result<Self, QueryError> {
        let invalid = || QueryError::InvalidId {
            value: value.to_string(),
        };
        let rest = value.trim_start();
        let (negative, rest) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Err(invalid());
        }
        let id: u64 = rest[..digits_len].parse().map_err(|_| invalid())?;
        // "-0" is still zero.
        if negative && id != 0 {
            return Err(invalid());
        }
        Ok(Self(id))
    }
}

impl FromStr for PhotographerId {
    type Err = QueryError;

    /// Parse the canonical form: ASCII digits only. Query values go through
    /// [`PhotographerId::from_query_value`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(QueryError::InvalidId {
                value: s.to_string(),
            });
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| QueryError::InvalidId {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for PhotographerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A photographer as stored in the remote document.
///
/// Only `id` and `name` are required. The descriptive fields are decoded
/// when present; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Photographer identifier.
    pub id: PhotographerId,
    /// Display name.
    pub name: String,
    /// City of residence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Country of residence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Short tagline shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Day rate in euros.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    /// Portrait image file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<String>,
}

/// Find the record whose identifier equals `id`.
pub fn find_profile(records: &[ProfileRecord], id: PhotographerId) -> Option<&ProfileRecord> {
    records.iter().find(|r| r.id == id)
}

/// Localized greeting template for the contact modal heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Greeting {
    /// `Contactez-moi {name}`.
    #[default]
    #[serde(rename = "fr")]
    French,
    /// `Contact me {name}`.
    #[serde(rename = "en")]
    English,
}

impl Greeting {
    /// The template text; `{name}` marks where the display name goes.
    pub fn template(self) -> &'static str {
        match self {
            Self::French => "Contactez-moi {name}",
            Self::English => "Contact me {name}",
        }
    }

    /// Fill the template with `name`.
    pub fn render(self, name: &str) -> String {
        self.template().replace("{name}", name)
    }
}

impl FromStr for Greeting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" | "french" => Ok(Self::French),
            "en" | "english" => Ok(Self::English),
            other => Err(format!("unsupported greeting language: {other} (expected fr or en)")),
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::French => write!(f, "fr"),
            Self::English => write!(f, "en"),
        }
    }
}
