//! Contact form state management
//!
//! [`ContactForm`] is the only owner of the field values, the validation
//! errors and the submission lifecycle. Everything else reads snapshots.

use super::errors::{ErrorSet, ValidationError};
use super::field::{ContactField, FormFields, ServiceOption, UnknownField};
use crate::state::deferred::DeferredTask;
use crate::transport::{ContactSubmission, ContactTransport, TransportError};
use crate::validation::{is_non_empty, is_valid_email_shape};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

/// How long the thank-you state is shown before the form resets
pub const DEFAULT_RESET_DWELL: Duration = Duration::from_millis(3000);

/// Form-level message shown when the submission could not be delivered
pub const TRANSPORT_FAILURE_MESSAGE: &str = "We couldn't send your message. Please try again.";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Submission lifecycle. Idle is both the start and the reset state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionLifecycle {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight or being acknowledged
    Ignored,
    /// Validation failed for this many fields
    Rejected(usize),
    /// The submission was handed to the transport
    Started,
}

/// What has keyboard focus inside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(ContactField),
    SubmitButton,
}

/// Completions reported back by deferred tasks
#[derive(Debug)]
enum FormEvent {
    SubmissionFinished {
        generation: u64,
        result: Result<(), TransportError>,
    },
    ResetDue {
        generation: u64,
    },
}

impl FormEvent {
    fn generation(&self) -> u64 {
        match self {
            Self::SubmissionFinished { generation, .. } | Self::ResetDue { generation } => {
                *generation
            }
        }
    }
}

/// Run every validator over the fields
pub fn validate(fields: &FormFields) -> ErrorSet {
    let mut errors = ErrorSet::default();

    if !is_non_empty(&fields.name) {
        errors.insert(ContactField::Name, ValidationError::MissingRequired);
    }

    if !is_non_empty(&fields.email) {
        errors.insert(ContactField::Email, ValidationError::MissingRequired);
    } else if !is_valid_email_shape(&fields.email) {
        errors.insert(ContactField::Email, ValidationError::InvalidEmailFormat);
    }

    if !is_non_empty(&fields.service) {
        errors.insert(ContactField::Service, ValidationError::MissingRequired);
    }

    if !is_non_empty(&fields.message) {
        errors.insert(ContactField::Message, ValidationError::MissingRequired);
    }

    errors
}

/// Contact form controller.
///
/// Submission and the post-submit dwell run as [`DeferredTask`]s that only
/// send an event back; the owner applies them with [`ContactForm::poll`].
/// Dropping the form aborts whatever is still pending.
pub struct ContactForm {
    fields: FormFields,
    errors: ErrorSet,
    lifecycle: SubmissionLifecycle,
    form_error: Option<String>,
    active_field_index: usize,
    reset_dwell: Duration,
    transport: Arc<dyn ContactTransport>,
    events_tx: UnboundedSender<FormEvent>,
    events_rx: UnboundedReceiver<FormEvent>,
    pending: Option<DeferredTask>,
    generation: u64,
}

impl ContactForm {
    /// Index of the submit button in the focus ring
    const BUTTON_INDEX: usize = ContactField::ALL.len();

    pub fn new(transport: Arc<dyn ContactTransport>, reset_dwell: Duration) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            fields: FormFields::default(),
            errors: ErrorSet::default(),
            lifecycle: SubmissionLifecycle::Idle,
            form_error: None,
            active_field_index: 0,
            reset_dwell,
            transport,
            events_tx,
            events_rx,
            pending: None,
            generation: 0,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn lifecycle(&self) -> SubmissionLifecycle {
        self.lifecycle
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn focus(&self) -> FormFocus {
        ContactField::ALL
            .get(self.active_field_index)
            .map_or(FormFocus::SubmitButton, |field| FormFocus::Field(*field))
    }

    pub fn focus_field(&mut self, field: ContactField) {
        if let Some(index) = ContactField::ALL.iter().position(|f| *f == field) {
            self.set_active_field(index);
        }
    }

    /// Store a value. Any error on that field is dropped without
    /// re-validating; the next submit decides again.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.fields.slot_mut(field) = value.into();
        if self.errors.remove(field).is_some() {
            debug!(%field, "cleared field error on edit");
        }
    }

    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field = name.parse::<ContactField>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        match self.focus() {
            FormFocus::Field(ContactField::Service) => {
                if c == ' ' {
                    self.cycle_service(true);
                }
            }
            FormFocus::Field(field) => {
                let mut value = self.fields.get(field).to_string();
                value.push(c);
                self.set_field(field, value);
            }
            FormFocus::SubmitButton => {}
        }
    }

    /// Remove the last character of the focused field. On the service
    /// selector this clears the selection.
    pub fn backspace(&mut self) {
        match self.focus() {
            FormFocus::Field(ContactField::Service) => {
                if !self.fields.service.is_empty() {
                    self.set_field(ContactField::Service, String::new());
                }
            }
            FormFocus::Field(field) => {
                let mut value = self.fields.get(field).to_string();
                if value.pop().is_some() {
                    self.set_field(field, value);
                }
            }
            FormFocus::SubmitButton => {}
        }
    }

    /// Line break, only meaningful in the message body
    pub fn newline(&mut self) {
        if self.focus() == FormFocus::Field(ContactField::Message) {
            self.input_char('\n');
        }
    }

    pub fn cycle_service(&mut self, forward: bool) {
        let next = ServiceOption::cycle(self.fields.service_option(), forward);
        self.set_field(ContactField::Service, next.value());
    }

    /// Validate and, if everything passes, start the submission.
    ///
    /// The lifecycle guard runs before anything is spawned, so a second
    /// call while a submission is in flight does nothing.
    pub fn attempt_submit(&mut self) -> SubmitOutcome {
        if self.lifecycle != SubmissionLifecycle::Idle {
            debug!(lifecycle = ?self.lifecycle, "submit ignored, form busy");
            return SubmitOutcome::Ignored;
        }

        self.form_error = None;

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            let count = errors.len();
            debug!(count, "contact form has invalid fields");
            if let Some((field, _)) = errors.iter().next() {
                self.focus_field(field);
            }
            self.errors = errors;
            return SubmitOutcome::Rejected(count);
        }

        self.errors.clear();
        self.lifecycle = SubmissionLifecycle::Submitting;
        self.generation += 1;

        let generation = self.generation;
        let submission = ContactSubmission::new(self.fields.clone());
        info!(id = %submission.id, service = %submission.fields.service, "submitting contact form");

        let transport = Arc::clone(&self.transport);
        let events = self.events_tx.clone();
        self.pending = Some(DeferredTask::spawn(async move {
            let result = transport.submit(&submission).await;
            // The receiver is gone only if the form was dropped
            let _ = events.send(FormEvent::SubmissionFinished { generation, result });
        }));

        SubmitOutcome::Started
    }

    /// Apply every completion that has arrived. Returns true if anything
    /// visible changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// Wait for the next lifecycle transition. Returns `None` when nothing
    /// is pending.
    #[cfg(test)]
    pub async fn next_transition(&mut self) -> Option<SubmissionLifecycle> {
        loop {
            if self.pending.is_none() {
                return None;
            }
            let event = self.events_rx.recv().await?;
            if self.apply(event) {
                return Some(self.lifecycle);
            }
        }
    }

    fn apply(&mut self, event: FormEvent) -> bool {
        if event.generation() != self.generation {
            debug!(
                event_generation = event.generation(),
                current = self.generation,
                "dropping stale form event"
            );
            return false;
        }

        match event {
            FormEvent::SubmissionFinished { result, .. } => {
                if self.lifecycle != SubmissionLifecycle::Submitting {
                    return false;
                }
                match result {
                    Ok(()) => {
                        info!("contact form submitted");
                        self.lifecycle = SubmissionLifecycle::Submitted;
                        let events = self.events_tx.clone();
                        let generation = self.generation;
                        self.pending = Some(DeferredTask::after(self.reset_dwell, move || {
                            let _ = events.send(FormEvent::ResetDue { generation });
                        }));
                    }
                    Err(error) => {
                        warn!(%error, "contact form submission failed");
                        self.lifecycle = SubmissionLifecycle::Idle;
                        self.form_error = Some(TRANSPORT_FAILURE_MESSAGE.to_string());
                        self.pending = None;
                    }
                }
                true
            }
            FormEvent::ResetDue { .. } => {
                if self.lifecycle != SubmissionLifecycle::Submitted {
                    return false;
                }
                self.reset();
                true
            }
        }
    }

    fn reset(&mut self) {
        debug!("resetting contact form");
        self.fields = FormFields::default();
        self.errors.clear();
        self.form_error = None;
        self.lifecycle = SubmissionLifecycle::Idle;
        self.active_field_index = 0;
        self.pending = None;
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        Self::BUTTON_INDEX + 1 // four fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTON_INDEX);
    }
}
