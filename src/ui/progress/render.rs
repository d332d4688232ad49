//! Ratatui widget for the segmented progress bar.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::ui::progress::state::ProgressBarState;
use crate::ui::theme::{SEGMENT_EMPTY, SEGMENT_FILLED};

/// Partial-fill glyphs, one per eighth of a cell.
const EIGHTHS: [&str; 8] = ["▏", "▎", "▍", "▌", "▋", "▊", "▉", "█"];

pub struct SegmentedProgressBar<'a> {
    state: &'a ProgressBarState,
}

impl<'a> SegmentedProgressBar<'a> {
    pub fn new(state: &'a ProgressBarState) -> Self {
        Self { state }
    }
}

impl Widget for SegmentedProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let segments = self.state.segments();
        let gaps = segments.saturating_sub(1);
        let available = (area.width as usize).saturating_sub(gaps);
        if available < segments {
            return;
        }

        let filled_style = Style::default().fg(SEGMENT_FILLED);
        let empty_style = Style::default().fg(SEGMENT_EMPTY);

        let base = available / segments;
        let remainder = available % segments;

        let mut spans: Vec<Span<'static>> = Vec::new();
        for index in 0..segments {
            // Leftover cells go to the leading segments; the bar
            // always spans the full width.
            let cell_width = base + usize::from(index < remainder);
            let fill = self.state.segment_fill(index);
            let eighths = (fill * cell_width as f64 * 8.0).round() as usize;
            let full_cells = (eighths / 8).min(cell_width);
            let partial = eighths % 8;

            if full_cells > 0 {
                spans.push(Span::styled("█".repeat(full_cells), filled_style));
            }
            let mut rest = cell_width - full_cells;
            if partial > 0 && rest > 0 {
                spans.push(Span::styled(EIGHTHS[partial - 1], filled_style));
                rest -= 1;
            }
            if rest > 0 {
                spans.push(Span::styled("░".repeat(rest), empty_style));
            }
            if index + 1 < segments {
                spans.push(Span::raw(" "));
            }
        }

        Line::from(spans).render(Rect { height: 1, ..area }, buf);
    }
}
