//! Application state definitions

use super::page::{PageLayout, Section};
use super::scroll::{ScrollAnimation, ScrollState};
use std::time::{Duration, Instant};

/// Where key presses go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys scroll and navigate the page
    #[default]
    Browse,
    /// Keys edit the contact form
    Form,
}

/// Pending reveal of the contact form after the call-to-action scroll
#[derive(Debug, Clone, Copy)]
pub struct PendingReveal {
    pub due: Instant,
}

impl PendingReveal {
    /// Delay between the call-to-action and the form appearing
    pub const DELAY: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self {
            due: Instant::now() + Self::DELAY,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

impl Default for PendingReveal {
    fn default() -> Self {
        Self::new()
    }
}

/// Page-level state: scrolling, layout and what the contact section shows
#[derive(Debug, Default)]
pub struct AppState {
    pub scroll: ScrollState,
    pub scroll_animation: Option<ScrollAnimation>,
    /// Layout from the last draw
    pub layout: PageLayout,
    /// Rows available to the page body in the last draw
    pub viewport_height: u16,
    pub input_mode: InputMode,
    /// The contact form replaces its teaser button once revealed
    pub contact_form_visible: bool,
    pub pending_reveal: Option<PendingReveal>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(scroll_threshold: u16) -> Self {
        Self {
            scroll: ScrollState::new(scroll_threshold),
            ..Default::default()
        }
    }

    pub fn max_offset(&self) -> u16 {
        self.layout.max_offset(self.viewport_height)
    }

    /// Scroll manually, cancelling any smooth scroll in progress
    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll_animation = None;
        let max = self.max_offset();
        self.scroll.scroll_by(delta, max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_animation = None;
        self.scroll.set_offset(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_animation = None;
        let max = self.max_offset();
        self.scroll.set_offset(max);
    }

    /// Start a smooth scroll to the section's anchor
    pub fn scroll_to_section(&mut self, section: Section) {
        let Some(start) = self.layout.offset_of(section) else {
            tracing::debug!(?section, "section not laid out yet");
            return;
        };
        let target = start.min(self.max_offset());
        self.scroll_animation = Some(ScrollAnimation::new(self.scroll.offset(), target));
    }

    /// Advance the smooth scroll. Returns true while it is still running.
    pub fn update_scroll_animation(&mut self) -> bool {
        if let Some(ref mut animation) = self.scroll_animation {
            let offset = animation.update();
            self.scroll.set_offset(offset);
            if animation.is_complete() {
                self.scroll_animation = None;
                return false;
            }
            return true;
        }
        false
    }

    /// Show the contact form now
    pub fn reveal_contact_form(&mut self) {
        self.pending_reveal = None;
        self.contact_form_visible = true;
        self.input_mode = InputMode::Form;
    }

    /// Apply a scheduled reveal once it is due
    pub fn update_pending_reveal(&mut self, now: Instant) -> bool {
        match self.pending_reveal {
            Some(reveal) if reveal.is_due(now) => {
                self.reveal_contact_form();
                true
            }
            _ => false,
        }
    }

    pub fn current_section(&self) -> Section {
        self.layout.section_at(self.scroll.offset())
    }
}
