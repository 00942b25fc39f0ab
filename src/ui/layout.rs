//! Layout components (nav bar, page body, status bar)

use crate::app::App;
use crate::content::BRAND;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{InputMode, Section, SubmissionLifecycle};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Nav bar height in rows (content + bottom border)
pub const NAV_HEIGHT: u16 = 2;

/// Split the screen into nav bar, page body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT), // Nav bar
            Constraint::Min(0),             // Page
            Constraint::Length(1),          // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the nav bar. It turns solid once the page is scrolled.
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let is_scrolled = app.state.scroll.is_scrolled();
    let current = app.state.current_section();

    let (bar_style, link_style, border_style) = if is_scrolled {
        (
            Style::default().bg(Color::White).fg(Color::Black),
            Style::default().bg(Color::White).fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        )
    } else {
        (
            Style::default().fg(Color::White),
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::Black),
        )
    };

    let mut spans = vec![Span::styled(
        format!(" {BRAND} "),
        bar_style.add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled("   ", bar_style));
    for (idx, section) in Section::NAV.iter().enumerate() {
        let style = if *section == current {
            link_style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
        } else {
            link_style
        };
        spans.push(Span::styled(format!("{} ", idx + 1), bar_style.fg(Color::DarkGray)));
        spans.push(Span::styled(section.nav_label(), style));
        spans.push(Span::styled("   ", bar_style));
    }

    let nav = Paragraph::new(Line::from(spans))
        .style(bar_style)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(border_style),
        );
    frame.render_widget(nav, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_mode_hints(app.state.input_mode, app.form.lifecycle());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // How far down the page, like a pager
    let position = format!(" {}% ", scroll_percent(app));
    let position_area = Rect {
        x: area.x + area.width.saturating_sub(position.len() as u16),
        y: area.y,
        width: (position.len() as u16).min(area.width),
        height: 1,
    };
    let position_widget =
        Paragraph::new(position).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(position_widget, position_area);
}

fn scroll_percent(app: &App) -> u32 {
    let total = app.state.layout.total_height() as u32;
    if total == 0 {
        return 100;
    }
    let seen = app.state.scroll.offset() as u32 + app.state.viewport_height as u32;
    (seen.min(total) * 100) / total
}

/// Get keyboard hints for the current input mode
fn get_mode_hints(mode: InputMode, lifecycle: SubmissionLifecycle) -> String {
    match (mode, lifecycle) {
        (InputMode::Browse, _) => {
            "j/k:scroll  PgUp/PgDn:page  1-4:sections  Enter:begin  q:quit".to_string()
        }
        (InputMode::Form, SubmissionLifecycle::Submitting) => "Sending...  Esc:page".to_string(),
        (InputMode::Form, SubmissionLifecycle::Submitted) => "Thank you!  Esc:page".to_string(),
        (InputMode::Form, SubmissionLifecycle::Idle) => format!(
            "Tab:next  ←/→:service  {}:send  Esc:page",
            SUBMIT_SHORTCUT
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_nav_and_status() {
        let (nav, body, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(nav.height, NAV_HEIGHT);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
        assert_eq!(body.height, 24 - NAV_HEIGHT - 1);
    }

    #[test]
    fn test_hints_follow_mode() {
        assert!(get_mode_hints(InputMode::Browse, SubmissionLifecycle::Idle).contains("q:quit"));
        assert!(get_mode_hints(InputMode::Form, SubmissionLifecycle::Idle)
            .contains(SUBMIT_SHORTCUT));
        assert!(get_mode_hints(InputMode::Form, SubmissionLifecycle::Submitting)
            .starts_with("Sending"));
    }
}
