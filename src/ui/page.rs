//! The scrolled page body: every section laid out as lines

use super::components::button_line;
use super::forms::contact_form_lines;
use super::text::{center_pad, wrap};
use crate::content::{
    Prose, ABOUT, ABOUT_HIGHLIGHTS, BRAND, CONTACT, CTA_LABEL, HERO_TAGLINE, PHILOSOPHY,
    SERVICES, SERVICE_CARDS,
};
use crate::state::{AppState, ContactForm, InputMode, PageLayout, Section};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Widest the copy gets, however wide the terminal is
const MAX_CONTENT_WIDTH: u16 = 76;

/// Rows of breathing room after each section
const SECTION_GAP: usize = 3;

/// Rendered page plus the row each section starts at
pub struct PageView {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
}

/// Lay out the whole page for a terminal `width` columns wide
pub fn build_page(state: &AppState, form: &ContactForm, width: u16, hero_height: u16) -> PageView {
    let content_width = width.min(MAX_CONTENT_WIDTH).max(20);
    let margin = " ".repeat(width.saturating_sub(content_width) as usize / 2);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut starts = Vec::with_capacity(Section::ALL.len());

    for section in Section::ALL {
        starts.push((section, row_count(&lines)));
        let body = match section {
            Section::Hero => hero_lines(content_width, hero_height),
            Section::About => about_lines(content_width),
            Section::Philosophy => prose_lines(&PHILOSOPHY, content_width),
            Section::Services => services_lines(content_width),
            Section::Contact => contact_lines(state, form, content_width),
        };
        lines.extend(body.into_iter().map(|line| indent(line, &margin)));
        lines.extend(std::iter::repeat_with(Line::default).take(SECTION_GAP));
    }

    // Let the last section scroll all the way to the top
    if let Some((_, last_start)) = starts.last() {
        let min_len = *last_start as usize + hero_height as usize;
        if lines.len() < min_len {
            lines.resize_with(min_len, Line::default);
        }
    }

    let total_height = row_count(&lines);
    PageView {
        lines,
        layout: PageLayout::new(starts, total_height),
    }
}

/// Row count as a scroll offset, saturating for absurdly long pages
fn row_count(lines: &[Line<'static>]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX)
}

fn indent(mut line: Line<'static>, margin: &str) -> Line<'static> {
    if !margin.is_empty() {
        line.spans.insert(0, Span::raw(margin.to_string()));
    }
    line
}

fn centered(text: String, width: u16, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(center_pad(text.chars().count(), width)),
        Span::styled(text, style),
    ])
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn paragraph(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

fn hero_lines(width: u16, hero_height: u16) -> Vec<Line<'static>> {
    // Letter-spaced wordmark
    let wordmark: String = BRAND
        .to_uppercase()
        .chars()
        .flat_map(|c| [c, ' '])
        .collect::<String>()
        .trim_end()
        .to_string();

    let mut content = vec![
        centered(
            wordmark,
            width,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];
    content.extend(
        wrap(HERO_TAGLINE, width)
            .into_iter()
            .map(|line| centered(line, width, Style::default().fg(Color::Gray))),
    );
    content.push(Line::default());
    content.push(button_line(CTA_LABEL, width, true, true));
    content.push(centered(
        "press Enter".to_string(),
        width,
        Style::default().fg(Color::DarkGray),
    ));

    // Center the block vertically in the first screenful
    let top = (hero_height as usize).saturating_sub(content.len()) / 2;
    let mut lines: Vec<Line<'static>> = std::iter::repeat_with(Line::default).take(top).collect();
    lines.extend(content);
    while lines.len() < hero_height as usize {
        lines.push(Line::default());
    }
    lines
}

fn prose_lines(prose: &Prose, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![heading(prose.heading), Line::default()];
    for text in prose.paragraphs {
        lines.extend(paragraph(text, width, Style::default().fg(Color::Gray)));
        lines.push(Line::default());
    }
    lines
}

fn about_lines(width: u16) -> Vec<Line<'static>> {
    let mut lines = prose_lines(&ABOUT, width);
    for item in ABOUT_HIGHLIGHTS {
        lines.push(Line::from(vec![
            Span::styled("  ─ ", Style::default().fg(Color::DarkGray)),
            Span::styled(item, Style::default().fg(Color::White)),
        ]));
    }
    lines
}

fn services_lines(width: u16) -> Vec<Line<'static>> {
    let mut lines = prose_lines(&SERVICES, width);
    let card_width = width.saturating_sub(4);
    for card in &SERVICE_CARDS {
        lines.push(Line::from(Span::styled(
            format!("  {}", card.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        for line in wrap(card.description, card_width) {
            lines.push(Line::from(Span::styled(
                format!("  {line}"),
                Style::default().fg(Color::Gray),
            )));
        }
        for line in wrap(card.details, card_width) {
            lines.push(Line::from(Span::styled(
                format!("  {line}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::default());
    }
    lines
}

fn contact_lines(state: &AppState, form: &ContactForm, width: u16) -> Vec<Line<'static>> {
    let mut lines = prose_lines(&CONTACT, width);
    if state.contact_form_visible {
        let is_editing = state.input_mode == InputMode::Form;
        lines.extend(contact_form_lines(form, is_editing, width));
    } else {
        lines.push(button_line(CTA_LABEL, width, false, true));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContactField, DEFAULT_RESET_DWELL};
    use crate::transport::SimulatedTransport;
    use std::sync::Arc;
    use std::time::Duration;

    fn form() -> ContactForm {
        ContactForm::new(
            Arc::new(SimulatedTransport::new(Duration::from_millis(10))),
            DEFAULT_RESET_DWELL,
        )
    }

    fn text_at(view: &PageView, row: u16) -> String {
        view.lines[row as usize]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_sections_in_page_order() {
        let view = build_page(&AppState::default(), &form(), 80, 24);
        let starts: Vec<u16> = Section::ALL
            .iter()
            .map(|s| view.layout.offset_of(*s).unwrap())
            .collect();
        assert_eq!(starts[0], 0);
        assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(view.layout.total_height() as usize, view.lines.len());
    }

    #[test]
    fn test_anchor_rows_start_with_headings() {
        let view = build_page(&AppState::default(), &form(), 80, 24);
        let cases = [
            (Section::About, "A Place of Strategic Learning"),
            (Section::Philosophy, "Our Philosophy"),
            (Section::Services, "What We Do"),
            (Section::Contact, "Talk to Us"),
        ];
        for (section, title) in cases {
            let row = view.layout.offset_of(section).unwrap();
            assert_eq!(text_at(&view, row).trim(), title);
        }
    }

    #[test]
    fn test_hero_fills_first_screen() {
        let view = build_page(&AppState::default(), &form(), 80, 30);
        assert_eq!(view.layout.offset_of(Section::About), Some(30 + SECTION_GAP as u16));
    }

    #[test]
    fn test_contact_shows_teaser_until_revealed() {
        let mut state = AppState::default();
        let view = build_page(&state, &form(), 80, 24);
        let contact = view.layout.offset_of(Section::Contact).unwrap() as usize;
        let tail: String = view.lines[contact..]
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(tail.contains("[ Begin the Conversation ]"));
        assert!(!tail.contains("Name *"));

        state.reveal_contact_form();
        let view = build_page(&state, &form(), 80, 24);
        let tail: String = view.lines[contact..]
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(tail.contains("Name *"));
    }

    #[test]
    fn test_contact_anchor_reachable_at_bottom() {
        let view = build_page(&AppState::default(), &form(), 80, 24);
        let contact = view.layout.offset_of(Section::Contact).unwrap();
        assert!(view.layout.max_offset(24) >= contact);
        assert_eq!(view.layout.section_at(view.layout.max_offset(24)), Section::Contact);
    }

    #[test]
    fn test_huge_message_saturates_height() {
        let mut form = form();
        form.set_field(ContactField::Message, "\n".repeat(70_000));
        let mut state = AppState::default();
        state.reveal_contact_form();

        let view = build_page(&state, &form, 80, 24);
        let contact = view.layout.offset_of(Section::Contact).unwrap();
        assert!(view.lines.len() > u16::MAX as usize);
        assert_eq!(view.layout.max_offset(0), u16::MAX);
        assert!(contact < 1_000);
        assert_eq!(text_at(&view, contact).trim(), "Talk to Us");
    }

    #[test]
    fn test_wide_terminal_centers_content() {
        let view = build_page(&AppState::default(), &form(), 120, 24);
        let row = view.layout.offset_of(Section::About).unwrap();
        assert!(text_at(&view, row).starts_with(&" ".repeat(22)));
    }
}
