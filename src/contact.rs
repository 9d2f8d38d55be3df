//! Contact form state and validation.
//!
//! A field is validated when it loses focus, which also marks it touched; after that it is
//! re-validated on every edit. Submitting validates everything. Delivery goes through a
//! [`Submitter`], and the bundled one never leaves the process.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A form input.
pub enum Field {
    /// Sender's name.
    Name,
    /// Reply address.
    Email,
    /// Subject line.
    Subject,
    /// Message body.
    Message,
}

impl Field {
    /// Fields in tab order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    #[must_use]
    /// Input label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    #[must_use]
    /// The next field in tab order, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Name,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }
}

#[must_use]
/// The validation message for `value` in `field`, or `None` when it is acceptable.
pub fn validate(field: Field, value: &str) -> Option<&'static str> {
    let chars = value.chars().count();
    match field {
        Field::Name if chars < 2 => Some("Name must be at least 2 characters"),
        Field::Email if !EMAIL.is_match(value) => Some("Please enter a valid email"),
        Field::Subject if chars < 3 => Some("Subject must be at least 3 characters"),
        Field::Message if chars < 10 => Some("Message must be at least 10 characters"),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A validated message ready for delivery.
pub struct ContactMessage {
    /// Sender's name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// Delivers contact messages.
pub trait Submitter {
    /// Sends `message`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Submission`] when delivery fails.
    fn submit(&self, message: &ContactMessage) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
/// Accepts every message without sending it anywhere.
pub struct LocalSubmitter;

impl Submitter for LocalSubmitter {
    fn submit(&self, message: &ContactMessage) -> Result<()> {
        tracing::info!(
            subject = %message.subject,
            chars = message.message.chars().count(),
            "contact message accepted locally"
        );
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// What happened on submit.
pub enum SubmitOutcome {
    /// At least one field failed validation; nothing was sent.
    Invalid,
    /// Delivered; the form was cleared.
    Sent,
    /// Delivery failed; the form keeps its contents.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Values, touched flags and messages for the four fields.
pub struct ContactForm {
    values: [String; 4],
    touched: [bool; 4],
    errors: [Option<&'static str>; 4],
}

impl ContactForm {
    #[must_use]
    /// An empty, untouched form.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Current text of `field`.
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    #[must_use]
    /// Validation message shown under `field`.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors[field.index()]
    }

    #[must_use]
    /// Whether `field` has lost focus at least once.
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[field.index()]
    }

    /// Replaces the text of `field`.
    pub fn input(&mut self, field: Field, value: &str) {
        value.clone_into(&mut self.values[field.index()]);
        self.revalidate_if_touched(field);
    }

    /// Appends a character to `field`.
    pub fn push_char(&mut self, field: Field, c: char) {
        self.values[field.index()].push(c);
        self.revalidate_if_touched(field);
    }

    /// Removes the last character of `field`.
    pub fn pop_char(&mut self, field: Field) {
        self.values[field.index()].pop();
        self.revalidate_if_touched(field);
    }

    /// Marks `field` touched and validates it.
    pub fn blur(&mut self, field: Field) {
        let i = field.index();
        self.touched[i] = true;
        self.errors[i] = validate(field, &self.values[i]);
    }

    fn revalidate_if_touched(&mut self, field: Field) {
        let i = field.index();
        if self.touched[i] {
            self.errors[i] = validate(field, &self.values[i]);
        }
    }

    /// Validates every field and, if all pass, hands the message to `submitter`.
    pub fn submit(&mut self, submitter: &dyn Submitter) -> SubmitOutcome {
        for field in Field::ALL {
            self.blur(field);
        }
        if self.errors.iter().any(Option::is_some) {
            return SubmitOutcome::Invalid;
        }

        let message = ContactMessage {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            subject: self.value(Field::Subject).to_string(),
            message: self.value(Field::Message).to_string(),
        };
        match submitter.submit(&message) {
            Ok(()) => {
                *self = Self::new();
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact submission failed");
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/contact.rs"]
mod tests;
