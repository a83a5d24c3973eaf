//! # fisheye-cli -- CLI Tool for the FishEye Contact Component
//!
//! Provides the `fisheye` command-line interface, driving the same
//! validator and profile loader the photographer page uses, with in-memory
//! page elements standing in for the DOM.
//!
//! ## Subcommands
//!
//! - `fisheye validate`: One contact-form submission over the given field values.
//! - `fisheye greet`: Personalize the contact heading for a photographer page URL.
//!
//! ```bash
//! fisheye validate --first Mimi --last Keel --email mimi@keel.fr --message "Bonjour"
//! fisheye greet "https://fisheye.test/photographer.html?id=243"
//! ```

pub mod greet;
pub mod validate;
