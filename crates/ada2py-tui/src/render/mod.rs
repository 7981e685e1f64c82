//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use ada2py_app::state::AppState;
use ada2py_app::ConversionOutcome;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette, styles};

pub const IDLE_HINT: &str = "Pick an .ada or .adb file above and press Convert";

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it should not modify state
/// except for widget state that tracks rendering info (scroll position).
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let failure = state.outcome.error_message();
    let areas = layout::create(area, failure.is_some());

    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::MainHeader::new(&state.api_base_url, icons),
        areas.header,
    );

    frame.render_widget(
        widgets::UploadForm::new(&state.upload, state.focus, icons)
            .converting(state.is_converting(), state.spinner_frame),
        areas.form,
    );

    if let (Some(message), Some(banner_area)) = (failure, areas.banner) {
        frame.render_widget(widgets::ErrorBanner::new(message, icons), banner_area);
    }

    // The previous result stays on screen while the next conversion runs
    if let ConversionOutcome::Converted(result) = &state.outcome {
        let view = widgets::ResultView::new(result, &state.copy_feedback, icons)
            .focused_copy(state.focus.copy_section());
        frame.render_stateful_widget(view, areas.result, &mut state.result_view);
    } else {
        render_idle(frame, areas.result, state);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

/// Placeholder for the result area before anything has been converted
fn render_idle(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let text = match state.conversion.in_flight() {
        Some(in_flight) => Line::from(Span::styled(
            format!("Converting {}...", in_flight.file_name),
            styles::status_yellow(),
        )),
        None => Line::from(Span::styled(IDLE_HINT, styles::text_muted())),
    };

    // Vertically centered
    let y = inner.y + inner.height / 2;
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        Rect {
            y,
            height: 1,
            ..inner
        },
    );
}
