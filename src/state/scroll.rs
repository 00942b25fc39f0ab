//! Page scroll position, the nav bar's scrolled flag, and smooth scrolling

use std::time::{Duration, Instant};

/// Rows the page must scroll past before the nav bar switches style
pub const DEFAULT_SCROLL_THRESHOLD: u16 = 50;

/// Current scroll position of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    threshold: u16,
    is_scrolled: bool,
}

impl ScrollState {
    pub fn new(threshold: u16) -> Self {
        Self {
            offset: 0,
            threshold,
            is_scrolled: false,
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// True once the page is scrolled strictly past the threshold
    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    /// Record a new position. Every scroll source goes through here.
    pub fn set_offset(&mut self, offset: u16) {
        self.offset = offset;
        self.is_scrolled = offset > self.threshold;
    }

    /// Move by `delta` rows, clamped to `[0, max]`
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let target = (self.offset as i32 + delta).clamp(0, max as i32);
        self.set_offset(target as u16);
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

/// Animation phase for smooth scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Running,
    Complete,
}

/// Eased scroll from one offset to another
#[derive(Debug)]
pub struct ScrollAnimation {
    /// When the animation started
    pub start_time: Instant,
    pub from: u16,
    pub to: u16,
    pub phase: AnimationPhase,
}

impl ScrollAnimation {
    /// Duration of a scroll-to-section animation
    const DURATION: Duration = Duration::from_millis(600);

    pub fn new(from: u16, to: u16) -> Self {
        Self {
            start_time: Instant::now(),
            from,
            to,
            phase: if from == to {
                AnimationPhase::Complete
            } else {
                AnimationPhase::Running
            },
        }
    }

    /// Offset for a given time since the animation started
    pub fn offset_at(&self, elapsed: Duration) -> u16 {
        if elapsed >= Self::DURATION {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        // Cubic ease-out: fast start, gentle landing on the section
        let eased = simple_easing::cubic_out(progress);
        let from = self.from as f32;
        let to = self.to as f32;
        (from + (to - from) * eased).round() as u16
    }

    /// Advance based on wall time and return the offset to apply
    pub fn update(&mut self) -> u16 {
        let elapsed = self.start_time.elapsed();
        if elapsed >= Self::DURATION {
            self.phase = AnimationPhase::Complete;
        }
        self.offset_at(elapsed)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == AnimationPhase::Complete
    }
}
