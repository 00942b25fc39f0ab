//! UI module for rendering the site in the terminal

mod components;
mod forms;
mod layout;
mod page;
mod terminal;
mod text;

pub use layout::create_layout;
pub use page::build_page;
pub use terminal::TerminalSession;

use crate::app::App;
use ratatui::{widgets::Paragraph, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (nav_area, body_area, status_area) = layout::create_layout(frame.area());

    let view = build_page(&app.state, &app.form, body_area.width, body_area.height);
    let page = Paragraph::new(view.lines).scroll((app.state.scroll.offset(), 0));
    frame.render_widget(page, body_area);

    layout::draw_nav_bar(frame, nav_area, app);
    layout::draw_status_bar(frame, status_area, app);
}
