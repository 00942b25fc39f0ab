//! Button component for the page

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::text::center_pad;

/// Build a centered `[ label ]` button line
pub fn button_line(content: &str, width: u16, is_selected: bool, is_enabled: bool) -> Line<'static> {
    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let label = format!("[ {content} ]");
    let pad = center_pad(label.chars().count(), width);
    Line::from(vec![Span::raw(pad), Span::styled(label, text_style)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_button_is_bracketed_and_centered() {
        let line = button_line("Go", 20, false, true);
        assert_eq!(text_of(&line), "       [ Go ]");
    }

    #[test]
    fn test_selected_button_is_highlighted() {
        let line = button_line("Go", 20, true, true);
        assert_eq!(line.spans[1].style.bg, Some(Color::White));
    }

    #[test]
    fn test_disabled_button_is_dimmed() {
        let line = button_line("Sending...", 20, true, false);
        assert_eq!(line.spans[1].style.fg, Some(Color::DarkGray));
        assert_eq!(line.spans[1].style.bg, None);
    }
}
