//! In-memory terminal for widget and screen tests

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

/// Renders into a `TestBackend` and reads the result back as plain text.
///
/// ```ignore
/// let mut term = TestTerminal::with_size(60, 3);
/// term.render_widget(StatusBar::new(&state), term.area());
/// assert!(term.buffer_contains("Ready"));
/// ```
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// An 80x24 screen, the size the full-layout tests assume
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.terminal.backend().buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.draw_with(|frame| frame.render_stateful_widget(widget, area, state));
    }

    pub fn draw_with<F: FnOnce(&mut Frame)>(&mut self, f: F) {
        self.terminal.draw(f).expect("draw into test backend");
    }

    /// Screen text, one line per row with trailing blanks kept
    pub fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let width = usize::from(buffer.area.width.max(1));
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>() + "\n")
            .collect()
    }

    /// Whether `text` appears on a single row
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().lines().any(|line| line.contains(text))
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_content_has_one_line_per_row() {
        let mut term = TestTerminal::with_size(12, 3);
        term.render_widget(Paragraph::new("hello.adb"), term.area());

        let content = term.content();
        assert_eq!(content.lines().count(), 3);
        assert_eq!(content.lines().next(), Some("hello.adb   "));
        assert!(term.buffer_contains("hello.adb"));
        assert!(!term.buffer_contains("hello.ada"));
    }

    #[test]
    fn test_text_split_across_rows_is_not_found() {
        let mut term = TestTerminal::with_size(5, 2);
        term.render_widget(Paragraph::new("ab\ncd"), term.area());
        assert!(!term.buffer_contains("abcd"));
    }
}
