//! Application state and core logic

use crate::config::SiteConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{
    AppState, ContactField, ContactForm, Form, FormFocus, InputMode, PendingReveal, Section,
    ServiceOption, SubmissionLifecycle, SubmitOutcome,
};
use crate::transport::ContactTransport;
use crate::ui::{build_page, create_layout};
use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Main application struct
pub struct App {
    /// Page-level state
    pub state: AppState,
    /// The contact form controller
    pub form: ContactForm,
    /// Section to open at once the page has been laid out
    initial_section: Option<Section>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &SiteConfig, transport: Arc<dyn ContactTransport>) -> Self {
        Self {
            state: AppState::new(config.scroll_threshold()),
            form: ContactForm::new(transport, config.reset_dwell()),
            initial_section: None,
            quit: false,
        }
    }

    /// Apply command line arguments, the terminal's version of a deep link.
    ///
    /// A bare word is a section anchor (`contact`, `#services`, ...). A
    /// `field=value` pair pre-fills the contact form and opens it.
    pub fn apply_launch_args<I>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        for arg in args {
            match arg.split_once('=') {
                Some((name, value)) => {
                    if name == ContactField::Service.name()
                        && ServiceOption::from_value(value).is_none()
                    {
                        bail!("unknown service {value:?}");
                    }
                    self.form.set_field_by_name(name, value)?;
                    self.state.reveal_contact_form();
                    self.initial_section = Some(Section::Contact);
                }
                None => match Section::from_anchor(&arg) {
                    Some(section) => self.initial_section = Some(section),
                    None => bail!("unknown section {arg:?}"),
                },
            }
        }
        Ok(())
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while something on screen is moving and wants fast redraws
    pub fn is_animating(&self) -> bool {
        self.state.scroll_animation.is_some()
            || self.state.pending_reveal.is_some()
            || self.form.lifecycle() == SubmissionLifecycle::Submitting
    }

    /// Recompute where sections sit for the current terminal size
    pub fn update_layout(&mut self, width: u16, height: u16) {
        let (_, body, _) = create_layout(Rect::new(0, 0, width, height));
        let view = build_page(&self.state, &self.form, body.width, body.height);
        self.state.layout = view.layout;
        self.state.viewport_height = body.height;

        let max = self.state.max_offset();
        if let Some(section) = self.initial_section.take() {
            let start = self.state.layout.offset_of(section).unwrap_or_default();
            debug!(?section, start, "opening at section");
            self.state.scroll.set_offset(start.min(max));
        } else if self.state.scroll.offset() > max {
            self.state.scroll.set_offset(max);
        }
    }

    /// Advance timers: smooth scroll, delayed form reveal, form completions.
    /// Returns true if anything changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.state.update_scroll_animation();
        changed |= self.state.update_pending_reveal(Instant::now());

        let before = self.form.lifecycle();
        if self.form.poll() {
            changed = true;
            self.on_form_transition(before, self.form.lifecycle());
        }
        changed
    }

    fn on_form_transition(&mut self, before: SubmissionLifecycle, after: SubmissionLifecycle) {
        debug!(?before, ?after, "contact form transition");
        self.state.status_message = match (before, after) {
            (_, SubmissionLifecycle::Submitted) => Some("Message sent".to_string()),
            _ => None,
        };
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        match self.state.input_mode {
            InputMode::Browse => self.handle_browse_key(key),
            InputMode::Form => self.handle_form_key(key),
        }
    }

    /// Handle keys while reading the page
    fn handle_browse_key(&mut self, key: KeyEvent) {
        let page = self.state.viewport_height.saturating_sub(1).max(1) as i32;

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.state.scroll_by(page),
            KeyCode::PageUp => self.state.scroll_by(-page),
            KeyCode::Home | KeyCode::Char('g') => self.state.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.state.scroll_to_bottom(),
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(section) = Section::from_nav_key(c) {
                    self.state.scroll_to_section(section);
                }
            }
            KeyCode::Enter | KeyCode::Char('c') => self.begin_conversation(),
            KeyCode::Tab | KeyCode::Char('f') if self.state.contact_form_visible => {
                self.state.input_mode = InputMode::Form;
                self.state.scroll_to_section(Section::Contact);
            }
            _ => {}
        }
    }

    /// "Begin the Conversation". From the contact section the form opens at
    /// once; from anywhere else the page scrolls there first.
    fn begin_conversation(&mut self) {
        if self.state.current_section() == Section::Contact {
            self.state.reveal_contact_form();
            return;
        }
        self.state.scroll_to_section(Section::Contact);
        self.state.pending_reveal = Some(PendingReveal::new());
    }

    /// Handle keys while editing the contact form
    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.state.input_mode = InputMode::Browse;
            return;
        }

        // Thank-you screen is read-only until the reset
        if self.form.lifecycle() == SubmissionLifecycle::Submitted {
            return;
        }

        let page = self.state.viewport_height.saturating_sub(1).max(1) as i32;
        let focus = self.form.focus();

        match key.code {
            KeyCode::Char('s')
                if key.modifiers.contains(SUBMIT_MODIFIER)
                    || key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::PageDown => self.state.scroll_by(page),
            KeyCode::PageUp => self.state.scroll_by(-page),
            KeyCode::Left if focus == FormFocus::Field(ContactField::Service) => {
                self.form.cycle_service(false)
            }
            KeyCode::Right if focus == FormFocus::Field(ContactField::Service) => {
                self.form.cycle_service(true)
            }
            KeyCode::Enter => match focus {
                FormFocus::SubmitButton => self.submit(),
                FormFocus::Field(ContactField::Message) => self.form.newline(),
                FormFocus::Field(_) => self.form.next_field(),
            },
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.form.input_char(c)
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        self.state.status_message = match self.form.attempt_submit() {
            SubmitOutcome::Started => Some("Sending...".to_string()),
            SubmitOutcome::Rejected(1) => Some("Please fix the highlighted field".to_string()),
            SubmitOutcome::Rejected(count) => {
                Some(format!("Please fix the {count} highlighted fields"))
            }
            SubmitOutcome::Ignored => return,
        };
    }

    /// Handle mouse input. Only the wheel is used; it scrolls the page.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.state.scroll_by(-WHEEL_STEP),
            _ => {}
        }
    }
}
