//! Error banner shown when a conversion fails

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};

pub struct ErrorBanner<'a> {
    message: &'a str,
    icons: IconSet,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str, icons: IconSet) -> Self {
        Self { message, icons }
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.alert(), styles::status_red()),
            Span::raw(" "),
            Span::styled("Error:", styles::status_red().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(self.message, styles::text_primary()),
        ]);

        Paragraph::new(line)
            .block(styles::error_block())
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ada2py_app::config::IconMode;

    #[test]
    fn test_banner_shows_message_verbatim() {
        let mut term = TestTerminal::with_size(60, 3);
        let banner = ErrorBanner::new("File is empty", IconSet::new(IconMode::Unicode));
        term.render_widget(banner, term.area());

        assert!(term.buffer_contains("Error: File is empty"));
    }
}
