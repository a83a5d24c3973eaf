//! # Validate Subcommand
//!
//! Runs one contact-form submission against field values given on the
//! command line and reports what the page would show: which error
//! indicators are visible and whether the modal closed.
//!
//! ```bash
//! fisheye validate --first Jean-Paul --last "O'Brien" --email a@b.co --message "Bonjour"
//! fisheye validate --first A --email nope --json
//! ```

use std::cell::Cell;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use fisheye_core::{ContactFormView, Field, FormValidator, MemoryForm, SubmitEvent, Visibility};

/// Arguments for the `fisheye validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// First name field value.
    #[arg(long, default_value = "")]
    pub first: String,

    /// Last name field value.
    #[arg(long, default_value = "")]
    pub last: String,

    /// Email field value.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Message field value.
    #[arg(long, default_value = "")]
    pub message: String,

    /// Override the email input's native validity verdict. Defaults to the
    /// HTML `type=email` rule.
    #[arg(long, value_name = "BOOL")]
    pub native_email_valid: Option<bool>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// One indicator in a [`SubmitReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorReport {
    /// The form field checked.
    pub field: Field,
    /// Element id of the field's input.
    pub input_id: &'static str,
    /// Element id of the field's error indicator.
    pub indicator_id: &'static str,
    /// CSS `display` value of the indicator after the pass.
    pub display: &'static str,
    /// Whether the field passed its rule.
    pub valid: bool,
}

/// What one submission did to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReport {
    /// What the submit handler returned: true when every field passed.
    pub proceed: bool,
    /// Whether the handler cancelled the browser's own submission.
    pub default_prevented: bool,
    /// How many times the close-modal callback ran.
    pub modal_closed: u32,
    /// One entry per field, in form order.
    pub indicators: Vec<IndicatorReport>,
}

/// Build the in-memory form described by `args`.
pub fn form_from_args(args: &ValidateArgs) -> MemoryForm {
    let form = MemoryForm::new(
        args.first.as_str(),
        args.last.as_str(),
        args.email.as_str(),
        args.message.as_str(),
    );
    match args.native_email_valid {
        Some(valid) => form.with_native_email_validity(valid),
        None => form,
    }
}

/// Submit `form` once and capture the resulting page state.
pub fn submit(form: &mut MemoryForm) -> SubmitReport {
    let closed = Cell::new(0u32);
    let mut validator = FormValidator::new(|| closed.set(closed.get() + 1));
    let mut event = SubmitEvent::new();
    let proceed = validator.on_submit(&mut event, &mut *form);

    let indicators = Field::ALL
        .into_iter()
        .map(|field| {
            let visibility = form.indicator(field);
            IndicatorReport {
                field,
                input_id: field.input_id(),
                indicator_id: field.indicator_id(),
                display: visibility.css_display(),
                valid: visibility == Visibility::Hidden,
            }
        })
        .collect();

    SubmitReport {
        proceed,
        default_prevented: event.default_prevented(),
        modal_closed: closed.get(),
        indicators,
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if the form would be submitted, 1 if it was blocked.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let mut form = form_from_args(args);
    tracing::debug!(
        email_natively_valid = form.email_natively_valid(),
        "running contact form validation pass"
    );
    let report = submit(&mut form);

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{rendered}");
    } else {
        for indicator in &report.indicators {
            let status = if indicator.valid { "OK  " } else { "FAIL" };
            println!(
                "  {status} {:<8} #{} display: {}",
                indicator.input_id, indicator.indicator_id, indicator.display
            );
        }
        if report.proceed {
            println!("Form accepted; modal closed.");
        } else {
            println!("Form rejected; submission blocked.");
        }
    }

    Ok(if report.proceed { 0 } else { 1 })
}
