//! Upload form widget
//!
//! Path input with the accepted-extension hint, the selection or validation
//! message, and the Convert control.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use ada2py_app::state::Focus;
use ada2py_app::upload::{UploadFormState, ACCEPT_HINT};

use crate::theme::{
    icons::{spinner_frame, IconSet},
    palette, styles,
};

pub const CONVERT_LABEL: &str = "Convert";
pub const CONVERTING_LABEL: &str = "Converting...";

pub struct UploadForm<'a> {
    form: &'a UploadFormState,
    focus: Focus,
    converting: bool,
    spinner: u64,
    icons: IconSet,
}

impl<'a> UploadForm<'a> {
    pub fn new(form: &'a UploadFormState, focus: Focus, icons: IconSet) -> Self {
        Self {
            form,
            focus,
            converting: false,
            spinner: 0,
            icons,
        }
    }

    /// Disable the form and animate the Convert control
    pub fn converting(mut self, converting: bool, spinner: u64) -> Self {
        self.converting = converting;
        self.spinner = spinner;
        self
    }

    fn input_line(&self) -> Line<'a> {
        let editing = self.focus == Focus::PathInput && !self.converting;

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.icons.file(), styles::accent()),
            Span::styled(" Path: ", styles::text_secondary()),
        ];

        if self.form.input.is_empty() && !editing {
            spans.push(Span::styled("type a file path", styles::text_muted()));
        } else {
            spans.push(Span::styled(self.form.input.as_str(), styles::text_primary()));
        }

        if editing {
            spans.push(Span::styled("▏", styles::accent()));
        }

        Line::from(spans)
    }

    fn message_line(&self) -> Line<'a> {
        if let Some(error) = &self.form.error {
            return Line::from(vec![
                Span::raw("   "),
                Span::styled(self.icons.alert(), styles::status_red()),
                Span::raw(" "),
                Span::styled(error.as_str(), styles::status_red()),
            ]);
        }

        if let Some(file) = &self.form.selected {
            return Line::from(vec![
                Span::raw("   "),
                Span::styled(self.icons.check(), styles::status_green()),
                Span::styled(" Selected: ", styles::text_secondary()),
                Span::styled(file.name.clone(), styles::status_green()),
            ]);
        }

        Line::from(vec![
            Span::raw("   "),
            Span::styled("Press Enter to pick the file and convert it", styles::text_muted()),
        ])
    }

    fn button_line(&self) -> Line<'a> {
        let label = if self.converting {
            format!("[ {} {} ]", spinner_frame(self.spinner), CONVERTING_LABEL)
        } else {
            format!("[ {} ]", CONVERT_LABEL)
        };

        let style = if self.converting {
            styles::status_yellow()
        } else if self.focus == Focus::ConvertButton {
            styles::focused_selected()
        } else {
            styles::accent()
        };

        Line::from(vec![Span::raw("   "), Span::styled(label, style)])
    }
}

impl Widget for UploadForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = matches!(self.focus, Focus::PathInput | Focus::ConvertButton);
        let block = styles::glass_block(focused && !self.converting)
            .title(Span::styled(
                " Upload Ada File ",
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(
                Line::from(Span::styled(format!(" {} ", ACCEPT_HINT), styles::text_muted()))
                    .right_aligned(),
            );

        let lines = vec![self.input_line(), self.message_line(), self.button_line()];
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ada2py_app::config::IconMode;
    use ada2py_core::SourceFile;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_form_shows_hint_and_convert() {
        let form = UploadFormState::new();
        let mut term = TestTerminal::with_size(70, 5);
        term.render_widget(UploadForm::new(&form, Focus::PathInput, icons()), term.area());

        assert!(term.buffer_contains("Accepts: .ada, .adb"));
        assert!(term.buffer_contains("[ Convert ]"));
        assert!(!term.buffer_contains("Converting..."));
    }

    #[test]
    fn test_form_shows_validation_error() {
        let mut form = UploadFormState::new();
        form.set_input("test.js");
        form.pick();

        let mut term = TestTerminal::with_size(70, 5);
        term.render_widget(UploadForm::new(&form, Focus::PathInput, icons()), term.area());

        assert!(term.buffer_contains("Please select a valid Ada file (.ada or .adb)"));
    }

    #[test]
    fn test_form_shows_selected_file() {
        let mut form = UploadFormState::new();
        form.selected = Some(SourceFile::from_path("/src/hello.adb"));

        let mut term = TestTerminal::with_size(70, 5);
        term.render_widget(UploadForm::new(&form, Focus::ConvertButton, icons()), term.area());

        assert!(term.buffer_contains("Selected: hello.adb"));
    }

    #[test]
    fn test_form_converting_label() {
        let form = UploadFormState::new();
        let mut term = TestTerminal::with_size(70, 5);
        term.render_widget(
            UploadForm::new(&form, Focus::ConvertButton, icons()).converting(true, 3),
            term.area(),
        );

        assert!(term.buffer_contains("Converting..."));
        assert!(!term.buffer_contains("[ Convert ]"));
    }
}
