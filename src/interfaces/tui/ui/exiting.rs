//! Quit confirmation popup

use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::pages::CreatePage;

pub fn draw_exiting_screen(frame: &mut Frame, app: &App, area: Rect) {
    let theme = if app.page.is_in_flight() {
        Color::Yellow
    } else {
        Color::Magenta
    };
    let inner_area = Popup::new("Quit shortfront", popup::EXITING)
        .theme_color(theme)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let paragraph = Paragraph::new(exit_prompt(&app.page))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_area);
}

/// What quitting would throw away, most important first
fn exit_prompt(page: &CreatePage) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    if page.is_in_flight() {
        lines.push(Line::from(Span::styled(
            "A short URL is still being created.",
            Style::default().fg(Color::Yellow).bold(),
        )));
        lines.push(Line::from(Span::styled(
            "Quitting now drops the result.",
            Style::default().fg(Color::Yellow),
        )));
    } else if !page.input().trim().is_empty() {
        lines.push(Line::from(Span::styled(
            "The URL in the input has not been shortened.",
            Style::default().fg(Color::White).bold(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Quit shortfront?",
            Style::default().fg(Color::White).bold(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press [y] to quit, [n] to stay",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
