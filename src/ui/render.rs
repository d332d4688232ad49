use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, CarouselSession, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::progress::SegmentedProgressBar;
use crate::ui::story::{page_indicator, SlidePanel};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, SHOWCASE_GOLD};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::Main => draw_main(frame, body),
        Screen::Intermediate => draw_intermediate(frame, body),
        Screen::Carousel => {
            if let Some(session) = app.session() {
                draw_carousel(frame, body, session);
            }
        }
    }

    frame.render_widget(Footer::new().widget(app, footer), footer);
}

fn draw_main(frame: &mut Frame<'_>, body: Rect) {
    let panel = centered_rect(60, 40, body);
    let lines = vec![
        Line::from(Span::styled(
            "VOUGHT SHOWCASE",
            Style::default().fg(SHOWCASE_GOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "A story-style carousel demo",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, panel);
}

fn draw_intermediate(frame: &mut Frame<'_>, body: Rect) {
    let button = centered_rect(40, 20, body);
    let widget = Paragraph::new(Line::from(Span::styled(
        "▶ Open Carousel",
        Style::default().fg(SHOWCASE_GOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, button);
}

fn draw_carousel(frame: &mut Frame<'_>, body: Rect, session: &CarouselSession) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(body);

    let bar = Rect {
        x: rows[0].x.saturating_add(1),
        width: rows[0].width.saturating_sub(2),
        ..rows[0]
    };
    frame.render_widget(SegmentedProgressBar::new(session.progress()), bar);
    frame.render_widget(SlidePanel::new(session.current_item()), rows[1]);
    frame.render_widget(
        Paragraph::new(page_indicator(session.story())),
        rows[2],
    );
}
