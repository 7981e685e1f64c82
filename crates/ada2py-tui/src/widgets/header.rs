//! Header bar widget
//!
//! Shows the app title, a one-line description, and the backend in use.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

pub const TITLE: &str = "Ada to Python Converter";
pub const SUBTITLE: &str =
    "Upload your Ada files and get Python code with unit tests and explanations";

/// Main header showing title, subtitle, and backend URL
pub struct MainHeader<'a> {
    base_url: &'a str,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(base_url: &'a str, icons: IconSet) -> Self {
        Self { base_url, icons }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Title on the left, backend on the right
        let title = Line::from(vec![Span::raw(" "), Span::styled(TITLE, styles::accent_bold())]);
        let title_width = title.width() as u16;
        Paragraph::new(title).render(
            Rect {
                height: 1,
                ..inner
            },
            buf,
        );

        let backend = Line::from(vec![
            Span::styled(self.icons.globe(), styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.base_url, styles::text_secondary()),
            Span::raw(" "),
        ]);
        let backend_width = backend.width() as u16;
        if title_width + backend_width + 2 <= inner.width {
            let x = inner.x + inner.width - backend_width;
            Paragraph::new(backend).render(
                Rect {
                    x,
                    y: inner.y,
                    width: backend_width,
                    height: 1,
                },
                buf,
            );
        }

        if inner.height >= 2 {
            let subtitle = Line::from(vec![Span::raw(" "), Span::styled(SUBTITLE, styles::text_muted())]);
            Paragraph::new(subtitle).render(
                Rect {
                    y: inner.y + 1,
                    height: 1,
                    ..inner
                },
                buf,
            );
        }
    }
}
