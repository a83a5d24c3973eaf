//! # Contact Form Validator
//!
//! Runs one validation pass per submit attempt. A pass reads all four
//! fields, applies their [`rules`](crate::rules), and writes every error
//! indicator: visible on failure, hidden on success. No check
//! short-circuits another, so an indicator shown by an earlier pass is
//! always cleared once its field is fixed.
//!
//! Submission proceeds only if every field passes. In that case, and only
//! then, the injected close-modal callback runs.

use serde::Serialize;

use crate::page::{ContactFormView, Field, SubmitEvent, Visibility};
use crate::rules;

/// The state of one field as seen by a single validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldState {
    /// Which field this is; also identifies its error indicator.
    pub field: Field,
    /// The value as read from the input.
    pub raw: String,
    /// `raw` with surrounding whitespace removed.
    pub trimmed: String,
    /// Whether the field passed its rule.
    pub valid: bool,
}

impl FormFieldState {
    /// The indicator state this field's outcome calls for.
    pub fn indicator(&self) -> Visibility {
        if self.valid {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// `true` if any field failed.
    pub errors: bool,
    /// Per-field states, in [`Field::ALL`] order.
    pub fields: Vec<FormFieldState>,
}

impl ValidationResult {
    /// `true` when submission may proceed.
    pub fn passed(&self) -> bool {
        !self.errors
    }

    /// Fields that failed this pass.
    pub fn failed_fields(&self) -> Vec<Field> {
        self.fields
            .iter()
            .filter(|s| !s.valid)
            .map(|s| s.field)
            .collect()
    }
}

/// Submit handler for the contact form.
///
/// Owns the close-modal callback supplied by the surrounding page.
pub struct FormValidator<F>
where
    F: FnMut(),
{
    close_modal: F,
}

impl<F> FormValidator<F>
where
    F: FnMut(),
{
    /// Build a validator that calls `close_modal` after a clean pass.
    pub fn new(close_modal: F) -> Self {
        Self { close_modal }
    }

    /// Handle one form submission.
    ///
    /// Always cancels the default submission, runs a full validation pass,
    /// and returns `true` if the form may proceed.
    pub fn on_submit<V>(&mut self, event: &mut SubmitEvent, view: &mut V) -> bool
    where
        V: ContactFormView + ?Sized,
    {
        event.prevent_default();
        let result = validate(view);
        if result.errors {
            tracing::debug!(failed = ?result.failed_fields(), "contact form rejected");
        } else {
            tracing::debug!("contact form accepted, closing modal");
            (self.close_modal)();
        }
        result.passed()
    }
}

impl<F> std::fmt::Debug for FormValidator<F>
where
    F: FnMut(),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("close_modal", &"<callback>")
            .finish()
    }
}

/// Run one validation pass over `view`, updating all four indicators.
pub fn validate<V>(view: &mut V) -> ValidationResult
where
    V: ContactFormView + ?Sized,
{
    let mut errors = false;
    let mut fields = Vec::with_capacity(Field::ALL.len());

    for field in Field::ALL {
        let raw = view.value(field);
        let valid = match field {
            Field::FirstName | Field::LastName => rules::name_is_valid(&raw),
            Field::Email => rules::email_is_valid(&raw, view.email_natively_valid()),
            Field::Message => rules::message_is_valid(&raw),
        };
        let state = FormFieldState {
            field,
            trimmed: raw.trim().to_string(),
            raw,
            valid,
        };
        view.set_indicator(field, state.indicator());
        errors |= !valid;
        fields.push(state);
    }

    ValidationResult { errors, fields }
}
