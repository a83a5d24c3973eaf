#![deny(missing_docs)]

//! # fisheye-core -- Contact Form and Profile Types for FishEye
//!
//! This crate holds everything the photographer page needs that does not
//! touch the network: the contact-form field rules, the submit-time
//! [`FormValidator`], the page abstractions it writes through, and the
//! [`ProfileRecord`] model the profile loader renders into the modal header.
//!
//! ## Design Principles
//!
//! 1. **No global document.** Every page element is injected. The validator
//!    reads and writes through a [`ContactFormView`]; the profile greeting is
//!    written into a [`Heading`]. Browser bindings and the in-memory views
//!    used by the CLI and tests implement the same traits.
//!
//! 2. **Failure is state, not an error.** A failed validation pass is not a
//!    `Result::Err`. It is an aggregate flag plus one visible indicator per
//!    failing field, recomputed from scratch on every submit.
//!
//! 3. **Typed identifiers.** The query-string photographer id is parsed once
//!    into a [`PhotographerId`] and compared numerically.

pub mod error;
pub mod page;
pub mod profile;
pub mod query;
pub mod rules;
pub mod validator;

pub use error::QueryError;
pub use page::{
    ContactFormView, Field, Heading, MemoryForm, MemoryHeading, SubmitEvent, Visibility,
    HEADING_ID,
};
pub use profile::{find_profile, Greeting, PhotographerId, ProfileRecord};
pub use query::{photographer_id, raw_photographer_id, ID_PARAM};
pub use validator::{validate, FormFieldState, FormValidator, ValidationResult};
