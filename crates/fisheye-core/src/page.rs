//! # Page Abstractions
//!
//! The contact form and the modal header are owned by the surrounding page.
//! The validator and the profile loader reach them only through the traits
//! in this module, so a browser binding, a server-side renderer, and the
//! in-memory views below are interchangeable.
//!
//! Element ids match the photographer page markup: inputs `first`, `last`,
//! `email`, `message`; indicators `first-error`, `last-error`,
//! `email-error`, `message-error`; heading `modal-title`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules;

/// Id of the modal heading that receives the profile greeting.
pub const HEADING_ID: &str = "modal-title";

/// One of the four contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// First name.
    FirstName,
    /// Last name.
    LastName,
    /// Email address.
    Email,
    /// Free-text message.
    Message,
}

impl Field {
    /// All fields in validation order.
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Element id of the field's input.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::FirstName => "first",
            Self::LastName => "last",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Element id of the field's error indicator.
    pub fn indicator_id(self) -> &'static str {
        match self {
            Self::FirstName => "first-error",
            Self::LastName => "last-error",
            Self::Email => "email-error",
            Self::Message => "message-error",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::Message => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_id())
    }
}

/// Display state of an error indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Indicator is shown (`display: block`).
    Visible,
    /// Indicator is hidden (`display: none`).
    #[default]
    Hidden,
}

impl Visibility {
    /// The CSS `display` value for this state.
    pub fn css_display(self) -> &'static str {
        match self {
            Self::Visible => "block",
            Self::Hidden => "none",
        }
    }
}

/// The contact form as seen by the validator.
pub trait ContactFormView {
    /// Current raw value of `field`'s input.
    fn value(&self, field: Field) -> String;

    /// The email input's own constraint-validation verdict (`validity.valid`).
    fn email_natively_valid(&self) -> bool;

    /// Show or hide `field`'s error indicator.
    fn set_indicator(&mut self, field: Field, visibility: Visibility);
}

/// A text-bearing element, such as the modal heading.
pub trait Heading {
    /// Replace the element's text content.
    fn set_text(&mut self, text: &str);
}

/// A form submission event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    /// A fresh, uncancelled submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the browser's default form submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether [`Self::prevent_default`] has been called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// An in-memory contact form.
///
/// Native email validity follows [`rules::html_email_validity`] unless
/// overridden with [`MemoryForm::with_native_email_validity`].
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    values: [String; 4],
    indicators: [Visibility; 4],
    native_email_override: Option<bool>,
}

impl MemoryForm {
    /// A form with the given field values and all indicators hidden.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            values: [
                first_name.into(),
                last_name.into(),
                email.into(),
                message.into(),
            ],
            indicators: [Visibility::Hidden; 4],
            native_email_override: None,
        }
    }

    /// Force the email input's native validity verdict.
    pub fn with_native_email_validity(mut self, valid: bool) -> Self {
        self.native_email_override = Some(valid);
        self
    }

    /// Replace the value of one field, as if the user had typed into it.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Current display state of `field`'s error indicator.
    pub fn indicator(&self, field: Field) -> Visibility {
        self.indicators[field.index()]
    }

    /// Fields whose indicator is currently visible.
    pub fn visible_indicators(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.indicator(*f) == Visibility::Visible)
            .collect()
    }
}

impl ContactFormView for MemoryForm {
    fn value(&self, field: Field) -> String {
        self.values[field.index()].clone()
    }

    fn email_natively_valid(&self) -> bool {
        self.native_email_override
            .unwrap_or_else(|| rules::html_email_validity(&self.values[Field::Email.index()]))
    }

    fn set_indicator(&mut self, field: Field, visibility: Visibility) {
        self.indicators[field.index()] = visibility;
    }
}

/// An in-memory heading element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHeading {
    text: String,
    writes: usize,
}

impl MemoryHeading {
    /// A heading with initial text content.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            writes: 0,
        }
    }

    /// Current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times the text has been replaced.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Heading for MemoryHeading {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_follow_page_markup() {
        assert_eq!(Field::FirstName.input_id(), "first");
        assert_eq!(Field::Message.indicator_id(), "message-error");
        assert_eq!(Field::Email.to_string(), "email");
    }

    #[test]
    fn visibility_maps_to_css_display() {
        assert_eq!(Visibility::Visible.css_display(), "block");
        assert_eq!(Visibility::Hidden.css_display(), "none");
        assert_eq!(Visibility::default(), Visibility::Hidden);
    }

    #[test]
    fn memory_form_starts_with_hidden_indicators() {
        let form = MemoryForm::new("a", "b", "c", "d");
        assert!(form.visible_indicators().is_empty());
        assert_eq!(form.value(Field::LastName), "b");
    }

    #[test]
    fn memory_form_native_validity_defaults_to_html_rule() {
        let form = MemoryForm::new("", "", "user@localhost", "");
        assert!(form.email_natively_valid());
        let form = MemoryForm::new("", "", "nope", "");
        assert!(!form.email_natively_valid());
        let form = MemoryForm::new("", "", "a@b.co", "").with_native_email_validity(false);
        assert!(!form.email_natively_valid());
    }

    #[test]
    fn submit_event_records_prevent_default() {
        let mut event = SubmitEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn memory_heading_counts_writes() {
        let mut heading = MemoryHeading::new("Contactez-moi");
        heading.set_text("Contactez-moi Mimi Keel");
        assert_eq!(heading.text(), "Contactez-moi Mimi Keel");
        assert_eq!(heading.writes(), 1);
    }
}
