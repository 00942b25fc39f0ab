//! Field rendering utilities for the contact form

use crate::state::{ContactField, FormFields};
use crate::ui::text::chunk;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Rows a multiline field always occupies, so the page doesn't jump while typing
const MESSAGE_MIN_ROWS: usize = 5;

const GUTTER: &str = "  │ ";
const GUTTER_WIDTH: u16 = 4;

/// Lines for one field: label, value, and the inline error if any
pub fn field_lines(
    field: ContactField,
    fields: &FormFields,
    error: Option<&str>,
    is_active: bool,
    width: u16,
) -> Vec<Line<'static>> {
    let accent = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("  {}", field.label()),
        accent.add_modifier(Modifier::BOLD),
    ))];

    let value = fields.display_value(field);
    let cursor = if is_active { "▌" } else { "" };
    let inner_width = width.saturating_sub(GUTTER_WIDTH + 1);

    if field == ContactField::Service {
        lines.push(service_line(value, field.placeholder(), is_active, accent));
    } else if value.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(GUTTER, accent),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray)),
        ]));
    } else {
        let mut value_lines: Vec<Line> = chunk(value, inner_width)
            .into_iter()
            .map(|text| {
                Line::from(vec![
                    Span::styled(GUTTER, accent),
                    Span::styled(text, Style::default().fg(Color::White)),
                ])
            })
            .collect();
        if let Some(last) = value_lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        lines.extend(value_lines);
    }

    if field.is_multiline() {
        // label + value rows
        while lines.len() < 1 + MESSAGE_MIN_ROWS {
            lines.push(Line::from(Span::styled(GUTTER, accent)));
        }
    }

    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!("    {message}"),
            Style::default().fg(Color::LightRed),
        )));
    }

    lines
}

/// Selector row for the service dropdown
fn service_line(label: &str, placeholder: &str, is_active: bool, accent: Style) -> Line<'static> {
    let (text, text_style) = if label.is_empty() {
        (placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (label.to_string(), Style::default().fg(Color::White))
    };

    if is_active {
        Line::from(vec![
            Span::styled(GUTTER, accent),
            Span::styled("◀ ", accent),
            Span::styled(text, text_style),
            Span::styled(" ▶", accent),
        ])
    } else {
        Line::from(vec![
            Span::styled(GUTTER, accent),
            Span::styled(text, text_style),
            Span::styled(" ▾", Style::default().fg(Color::DarkGray)),
        ])
    }
}
