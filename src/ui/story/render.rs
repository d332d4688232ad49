//! Slide panel and page indicator widgets.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::carousel::CarouselItem;
use crate::ui::story::state::StoryState;
use crate::ui::theme::{GLOBAL_BORDER, PAGE_DOT_ACTIVE, PAGE_DOT_INACTIVE};

/// The current slide, framed and centered in its area.
pub struct SlidePanel<'a> {
    item: &'a dyn CarouselItem,
}

impl<'a> SlidePanel<'a> {
    pub fn new(item: &'a dyn CarouselItem) -> Self {
        Self { item }
    }
}

impl Widget for SlidePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.item.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let view = self.item.view();
        let art_height = view.lines.len() as u16;
        let top_pad = inner.height.saturating_sub(art_height) / 2;
        let body = Rect {
            x: inner.x,
            y: inner.y + top_pad,
            width: inner.width,
            height: inner.height.saturating_sub(top_pad),
        };
        Paragraph::new(view)
            .alignment(Alignment::Center)
            .render(body, buf);
    }
}

/// One dot per slide, the current one highlighted.
pub fn page_indicator(state: &StoryState) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for index in 0..state.count() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        if index == state.current() {
            spans.push(Span::styled("●", Style::default().fg(PAGE_DOT_ACTIVE)));
        } else {
            spans.push(Span::styled("○", Style::default().fg(PAGE_DOT_INACTIVE)));
        }
    }
    Line::from(spans).alignment(Alignment::Center)
}
