use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

const KEYS: &[(&str, &str)] = &[
    ("Enter", "Shorten the URL in the input"),
    ("Backspace", "Delete the last character"),
    ("Ctrl+U", "Clear the input"),
    ("Ctrl+Y", "Copy the short URL to the clipboard"),
    ("F1", "Toggle this help"),
    ("Esc", "Quit (asks for confirmation)"),
    ("Ctrl+C", "Quit immediately"),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help", popup::HELP)
        .theme_color(Color::Blue)
        .render(frame, area);

    let mut text = vec![Line::from("")];
    for (key, desc) in KEYS {
        text.push(Line::from(vec![
            Span::styled(format!("{:>10}  ", key), Style::default().fg(Color::Cyan).bold()),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ]));
    }
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Only http:// and https:// URLs are accepted",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(text), inner_area);
}
