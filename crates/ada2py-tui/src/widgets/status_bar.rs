//! Status bar widget
//!
//! One row at the bottom of the screen: conversion state on the left, key
//! hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use ada2py_app::state::{AppState, Focus};
use ada2py_app::ConversionOutcome;

use crate::theme::{icons::spinner_frame, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn status_spans(&self) -> Vec<Span<'static>> {
        let state = self.state;

        if let Some(in_flight) = state.conversion.in_flight() {
            return vec![
                Span::styled(spinner_frame(state.spinner_frame), styles::status_yellow()),
                Span::styled(
                    format!(" Converting {}", in_flight.file_name),
                    styles::status_yellow(),
                ),
            ];
        }

        match &state.outcome {
            ConversionOutcome::Converted(_) => {
                let mut text = String::from("Converted");
                if let Some(file) = &state.converted_file {
                    text.push(' ');
                    text.push_str(file);
                }
                if let Some(at) = state.converted_at {
                    text.push_str(&format!(" at {}", at.format("%H:%M:%S")));
                }
                vec![
                    Span::styled("●", styles::status_green()),
                    Span::styled(format!(" {}", text), styles::text_secondary()),
                ]
            }
            ConversionOutcome::Failed(_) => vec![
                Span::styled("●", styles::status_red()),
                Span::styled(" Conversion failed", styles::text_secondary()),
            ],
            ConversionOutcome::Empty => vec![
                Span::styled("○", styles::text_muted()),
                Span::styled(" Ready", styles::text_secondary()),
            ],
        }
    }

    fn hint_spans(&self) -> Vec<Span<'static>> {
        let mut hints: Vec<(&str, &str)> = vec![("Tab", "focus")];

        match self.state.focus {
            Focus::PathInput => hints.push(("Enter", "pick")),
            Focus::ConvertButton => hints.push(("Enter", "convert")),
            Focus::CopyUnitTests | Focus::CopyGeneratedCode => hints.push(("c", "copy")),
        }

        if self.state.result().is_some() && self.state.focus != Focus::PathInput {
            hints.push(("↑↓", "scroll"));
        }
        hints.push(("Esc", "quit"));

        let mut spans = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            spans.push(Span::styled(key.to_string(), styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        spans.push(Span::raw(" "));
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut left = vec![Span::raw(" ")];
        left.extend(self.status_spans());
        let left = Line::from(left);
        let left_width = left.width() as u16;
        Paragraph::new(left).render(area, buf);

        let hints = Line::from(self.hint_spans());
        let hints_width = hints.width() as u16;
        if left_width + hints_width + 1 <= area.width {
            Paragraph::new(hints).render(
                Rect {
                    x: area.x + area.width - hints_width,
                    width: hints_width,
                    ..area
                },
                buf,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ada2py_core::ConversionResult;

    #[test]
    fn test_status_ready() {
        let state = AppState::new();
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Ready"));
        assert!(term.buffer_contains("Esc quit"));
    }

    #[test]
    fn test_status_converting_shows_file() {
        let mut state = AppState::new();
        state.conversion.begin("hello.adb");

        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Converting hello.adb"));
    }

    #[test]
    fn test_status_converted_shows_file_and_time() {
        let mut state = AppState::new();
        state.apply_result(ConversionResult::default(), "hello.adb".into());

        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Converted hello.adb at "));
    }

    #[test]
    fn test_status_hints_follow_focus() {
        let mut state = AppState::new();
        state.apply_result(ConversionResult::default(), "hello.adb".into());
        state.focus = Focus::CopyUnitTests;

        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("c copy"));
        assert!(term.buffer_contains("scroll"));
    }
}
