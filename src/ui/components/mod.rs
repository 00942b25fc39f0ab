//! Reusable UI components

mod button;

pub use button::button_line;
