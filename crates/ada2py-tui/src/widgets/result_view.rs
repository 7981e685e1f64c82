//! Result display widget
//!
//! Renders the three result sections (logic explanation, unit tests,
//! generated code) into one scrollable panel. The two code sections carry
//! a copy control whose label comes from [`CopyFeedback`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use ada2py_app::result_view::{CopyFeedback, ResultViewState};
use ada2py_core::{CodeSection, ConversionResult};

use crate::theme::{icons::IconSet, palette, styles};

pub const LOGIC_TITLE: &str = "Logic Explanation";

/// Scrollable view over a [`ConversionResult`]
pub struct ResultView<'a> {
    result: &'a ConversionResult,
    feedback: &'a CopyFeedback,
    focused_copy: Option<CodeSection>,
    icons: IconSet,
}

impl<'a> ResultView<'a> {
    pub fn new(result: &'a ConversionResult, feedback: &'a CopyFeedback, icons: IconSet) -> Self {
        Self {
            result,
            feedback,
            focused_copy: None,
            icons,
        }
    }

    /// Highlight the copy control of `section`
    pub fn focused_copy(mut self, section: Option<CodeSection>) -> Self {
        self.focused_copy = section;
        self
    }

    fn section_title(&self, title: &str, width: usize) -> Line<'static> {
        Line::from(vec![
            Span::styled("▌ ", styles::accent()),
            Span::styled(title.to_string(), styles::accent_bold()),
            Span::styled(
                " ".to_string() + &"─".repeat(width.saturating_sub(title.width() + 3)),
                styles::border_inactive(),
            ),
        ])
    }

    /// Title row with the copy control right-aligned
    fn code_title(&self, section: CodeSection, width: usize) -> Line<'static> {
        let copied = self.feedback.is_copied(section);
        let icon = if copied {
            self.icons.check()
        } else {
            self.icons.copy()
        };
        let button = format!("[ {} {} ]", icon, self.feedback.label(section));

        let button_style = if self.focused_copy == Some(section) {
            styles::focused_selected()
        } else if copied {
            styles::status_green()
        } else {
            styles::accent()
        };

        let title = section.title();
        let used = 2 + title.width() + 1 + button.width();
        let rule = "─".repeat(width.saturating_sub(used + 1));

        Line::from(vec![
            Span::styled("▌ ", styles::accent()),
            Span::styled(title.to_string(), styles::accent_bold()),
            Span::raw(" "),
            Span::styled(rule, styles::border_inactive()),
            Span::raw(" "),
            Span::styled(button, button_style),
        ])
    }

    /// All content lines for a given inner width
    pub fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let width = width.max(1);
        let mut lines = Vec::new();

        lines.push(self.section_title(LOGIC_TITLE, width));
        lines.extend(logic_lines(&self.result.logic, width));
        lines.push(Line::default());

        for section in CodeSection::ALL {
            lines.push(self.code_title(section, width));
            for text_line in self.result.section_text(section).lines() {
                for chunk in wrap_hard(text_line, width) {
                    lines.push(Line::from(Span::styled(chunk, styles::code())));
                }
            }
            lines.push(Line::default());
        }

        // No trailing separator after the last section
        lines.pop();
        lines
    }
}

impl StatefulWidget for ResultView<'_> {
    type State = ResultViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let focused = self.focused_copy.is_some();
        let block = styles::glass_block(focused)
            .title(Span::styled(" Result ", styles::text_primary()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);

        if inner.height == 0 || inner.width == 0 {
            block.render(area, buf);
            return;
        }

        let lines = self.build_lines(inner.width as usize);
        let visible = inner.height as usize;
        state.update_content_size(lines.len(), visible);

        let block = if lines.len() > visible {
            let last = (state.offset + visible).min(lines.len());
            block.title_bottom(
                Line::from(Span::styled(
                    format!(" {}-{}/{} ", state.offset + 1, last, lines.len()),
                    styles::text_muted(),
                ))
                .right_aligned(),
            )
        } else {
            block
        };
        block.render(area, buf);

        let shown: Vec<Line> = lines.into_iter().skip(state.offset).take(visible).collect();
        Paragraph::new(shown).render(inner, buf);
    }
}

/// Lightly formatted logic explanation.
///
/// Markdown headings are shown bold without their `#` markers. Fenced code
/// blocks are dimmed and their fence lines dropped. Prose is word-wrapped.
pub fn logic_lines(text: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut in_fence = false;

    for raw in text.lines() {
        let trimmed = raw.trim_start();

        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }

        if in_fence {
            for chunk in wrap_hard(raw, width) {
                lines.push(Line::from(Span::styled(chunk, styles::code_dimmed())));
            }
            continue;
        }

        if let Some(heading) = heading_text(trimmed) {
            for chunk in wrap_words(heading, width) {
                lines.push(Line::from(Span::styled(chunk, styles::heading())));
            }
            continue;
        }

        for chunk in wrap_words(raw, width) {
            lines.push(Line::from(Span::styled(chunk, styles::text_primary())));
        }
    }

    lines
}

/// Text of a `#`-style heading, or `None` for other lines
fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if rest.is_empty() || rest.starts_with(' ') {
        Some(rest.trim())
    } else {
        None
    }
}

/// Split a line into chunks of at most `width` display columns, keeping
/// every character.
pub fn wrap_hard(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if line.width() <= width {
        return vec![line.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Word-wrap prose to `width` columns. Words wider than a line are split.
fn wrap_words(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if line.width() <= width {
        return vec![line.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }

        if word.width() > width {
            let mut pieces = wrap_hard(word, width);
            current = pieces.pop().unwrap_or_default();
            chunks.extend(pieces);
        } else {
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
