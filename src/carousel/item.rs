//! Carousel item variants, one per character.
//!
//! Each item exposes a single capability: produce a displayable view
//! for its slide. The variants carry no shared state, so plain unit
//! structs behind a trait object are enough.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Text};

use crate::carousel::assets;

/// One slide's content provider.
pub trait CarouselItem: Send {
    /// Stable name, used for asset lookup and the slide title.
    fn name(&self) -> &'static str;

    /// Display title for the slide frame.
    fn title(&self) -> &'static str;

    /// Accent color for the slide's art.
    fn accent(&self) -> Color;

    /// Produce the displayable view for this slide.
    ///
    /// Items whose art asset is missing fall back to a bare title card;
    /// asset lookup is never an error path.
    fn view(&self) -> Text<'static> {
        let style = Style::default().fg(self.accent());
        match assets::art_for(self.name()) {
            Some(art) => {
                let lines: Vec<Line<'static>> = art
                    .lines()
                    .skip_while(|line| line.is_empty())
                    .map(|line| Line::styled(line, style))
                    .collect();
                Text::from(lines)
            }
            None => Text::from(Line::styled(self.title(), style)),
        }
    }
}

pub struct HomelanderItem;

impl CarouselItem for HomelanderItem {
    fn name(&self) -> &'static str {
        "homelander"
    }

    fn title(&self) -> &'static str {
        "Homelander"
    }

    fn accent(&self) -> Color {
        Color::Rgb(0xdc, 0x26, 0x26)
    }
}

pub struct MaeveItem;

impl CarouselItem for MaeveItem {
    fn name(&self) -> &'static str {
        "maeve"
    }

    fn title(&self) -> &'static str {
        "Queen Maeve"
    }

    fn accent(&self) -> Color {
        Color::Rgb(0xd9, 0x77, 0x06)
    }
}

pub struct BlackNoirItem;

impl CarouselItem for BlackNoirItem {
    fn name(&self) -> &'static str {
        "black-noir"
    }

    fn title(&self) -> &'static str {
        "Black Noir"
    }

    fn accent(&self) -> Color {
        Color::Rgb(0x6b, 0x72, 0x80)
    }
}

pub struct ATrainItem;

impl CarouselItem for ATrainItem {
    fn name(&self) -> &'static str {
        "a-train"
    }

    fn title(&self) -> &'static str {
        "A-Train"
    }

    fn accent(&self) -> Color {
        Color::Rgb(0x25, 0x63, 0xeb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_uses_art_when_present() {
        let view = HomelanderItem.view();
        assert!(view.lines.len() > 1, "expected multi-line art panel");
    }

    struct MissingArtItem;

    impl CarouselItem for MissingArtItem {
        fn name(&self) -> &'static str {
            "translucent"
        }

        fn title(&self) -> &'static str {
            "Translucent"
        }

        fn accent(&self) -> Color {
            Color::White
        }
    }

    #[test]
    fn view_falls_back_to_title_card() {
        let view = MissingArtItem.view();
        assert_eq!(view.lines.len(), 1);
    }
}
