use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::{App, Screen};
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SHOWCASE_GOLD, STATUS_OK, STATUS_PAUSED,
};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let title_style = Style::default().fg(SHOWCASE_GOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let screen_label = match app.screen() {
            Screen::Main => "Main",
            Screen::Intermediate => "Intermediate",
            Screen::Carousel => "Carousel",
        };

        let mut spans = vec![
            Span::styled("  VOUGHT SHOWCASE", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(screen_label, text_style),
        ];

        if let Some(session) = app.session() {
            let (dot, dot_style) = if session.progress().is_paused() {
                ("⏸ paused", Style::default().fg(STATUS_PAUSED))
            } else {
                ("▶ auto", Style::default().fg(STATUS_OK))
            };
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(dot, dot_style));
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!(
                    "slide {}/{}",
                    session.story().current() + 1,
                    session.story().count()
                ),
                text_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
