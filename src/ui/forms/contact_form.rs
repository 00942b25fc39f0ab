//! Contact form rendering

use super::field_renderer::field_lines;
use crate::content::{CTA_LABEL, THANK_YOU_BODY, THANK_YOU_HEADING};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{ContactField, ContactForm, FormFocus, SubmissionLifecycle};
use crate::ui::components::button_line;
use crate::ui::text::center_pad;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Lines for the contact form in its current lifecycle state
pub fn contact_form_lines(form: &ContactForm, is_editing: bool, width: u16) -> Vec<Line<'static>> {
    if form.lifecycle() == SubmissionLifecycle::Submitted {
        return thank_you_lines(width);
    }

    let focus = form.focus();
    let mut lines = Vec::new();

    for field in ContactField::ALL {
        let is_active = is_editing && focus == FormFocus::Field(field);
        lines.extend(field_lines(
            field,
            form.fields(),
            form.errors().message(field),
            is_active,
            width,
        ));
        lines.push(Line::default());
    }

    if let Some(message) = form.form_error() {
        lines.push(Line::from(vec![
            Span::raw(center_pad(message.chars().count(), width)),
            Span::styled(message.to_string(), Style::default().fg(Color::LightRed)),
        ]));
        lines.push(Line::default());
    }

    let is_submitting = form.lifecycle() == SubmissionLifecycle::Submitting;
    let label = if is_submitting { "Sending..." } else { CTA_LABEL };
    lines.push(button_line(
        label,
        width,
        is_editing && focus == FormFocus::SubmitButton,
        !is_submitting,
    ));

    if is_editing {
        let hint = format!("Enter on the button or {SUBMIT_SHORTCUT} to send");
        lines.push(Line::from(vec![
            Span::raw(center_pad(hint.chars().count(), width)),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines
}

fn thank_you_lines(width: u16) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(vec![
            Span::raw(center_pad(THANK_YOU_HEADING.len(), width)),
            Span::styled(
                THANK_YOU_HEADING,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(vec![
            Span::raw(center_pad(THANK_YOU_BODY.len(), width)),
            Span::styled(THANK_YOU_BODY, Style::default().fg(Color::Gray)),
        ]),
        Line::default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SubmitOutcome, DEFAULT_RESET_DWELL};
    use crate::transport::SimulatedTransport;
    use std::sync::Arc;
    use std::time::Duration;

    fn form() -> ContactForm {
        ContactForm::new(
            Arc::new(SimulatedTransport::new(Duration::from_millis(10))),
            DEFAULT_RESET_DWELL,
        )
    }

    fn rendered(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_idle_form_shows_fields_and_button() {
        let text = rendered(&contact_form_lines(&form(), false, 70));
        for field in ContactField::ALL {
            assert!(text.contains(field.label()));
        }
        assert!(text.contains("[ Begin the Conversation ]"));
        assert!(!text.contains(SUBMIT_SHORTCUT));
    }

    #[test]
    fn test_errors_render_inline() {
        let mut form = form();
        assert_eq!(form.attempt_submit(), SubmitOutcome::Rejected(4));
        let text = rendered(&contact_form_lines(&form, true, 70));
        assert!(text.contains("Name is required"));
        assert!(text.contains("Email is required"));
        assert!(text.contains("Please select a service"));
        assert!(text.contains("Message is required"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submitting_then_thank_you() {
        let mut form = form();
        form.set_field(ContactField::Name, "Jane");
        form.set_field(ContactField::Email, "jane@x.com");
        form.set_field(ContactField::Service, "mentorship");
        form.set_field(ContactField::Message, "Hello");
        form.attempt_submit();

        let text = rendered(&contact_form_lines(&form, true, 70));
        assert!(text.contains("[ Sending... ]"));

        form.next_transition().await;
        let text = rendered(&contact_form_lines(&form, true, 70));
        assert!(text.contains("Thank You"));
        assert!(text.contains(THANK_YOU_BODY));
        assert!(!text.contains("Name *"));
    }
}
