use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::widgets::InputField;
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::{INPUT_PLACEHOLDER, colors};
use crate::pages::NotificationLevel;

pub fn draw_create_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inline_error = app.page.inline_error().map(|e| e.message());
    let input = InputField::new("Long URL", app.page.input())
        .active(app.current_screen == CurrentScreen::Main && app.page.can_submit())
        .error(inline_error)
        .placeholder(INPUT_PLACEHOLDER);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),              // Heading
            Constraint::Length(input.height()), // Input
            Constraint::Length(3),              // Result
            Constraint::Min(3),                 // Notifications
        ])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Make your URL shorter!",
        Style::default().fg(colors::PRIMARY).bold(),
    )))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    input.render(frame, chunks[1]);

    match app.page.short_url() {
        Some(short_url) => InputField::new("Short URL", short_url)
            .readonly()
            .render(frame, chunks[2]),
        None => {
            let empty = Paragraph::new(Span::styled(
                "Your short URL will appear here",
                Style::default().fg(colors::MUTED),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(colors::MUTED)),
            );
            frame.render_widget(empty, chunks[2]);
        }
    }

    let items: Vec<ListItem> = app
        .page
        .notifications()
        .iter()
        .rev()
        .map(|n| {
            let color = match n.level {
                NotificationLevel::Success => colors::SUCCESS,
                NotificationLevel::Warning => colors::WARNING,
                NotificationLevel::Error => colors::ERROR,
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", n.title), Style::default().fg(color).bold()),
                Span::raw(n.description.clone()),
            ]))
        })
        .collect();

    let notifications = List::new(items).block(
        Block::default()
            .title("Notifications")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::MUTED)),
    );
    frame.render_widget(notifications, chunks[3]);
}
