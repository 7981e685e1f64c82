//! Screen layout definitions for the TUI
//!
//! Stacks the header, upload form, optional error banner, result area, and
//! status bar from top to bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: border + title row + subtitle row + border
pub const HEADER_HEIGHT: u16 = 4;

/// Upload form: border + path row + message row + button row + border
pub const FORM_HEIGHT: u16 = 5;

/// Error banner: border + one text row + border
pub const BANNER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    /// Present only while a failure is shown
    pub banner: Option<Rect>,
    /// Result display, or the idle hint
    pub result: Rect,
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_banner` - Reserve space for the error banner
pub fn create(area: Rect, show_banner: bool) -> ScreenAreas {
    let mut constraints = vec![
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(FORM_HEIGHT),
    ];
    if show_banner {
        constraints.push(Constraint::Length(BANNER_HEIGHT));
    }
    constraints.push(Constraint::Min(3));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::vertical(constraints).split(area);

    let (banner, rest) = if show_banner {
        (Some(chunks[2]), 3)
    } else {
        (None, 2)
    };

    ScreenAreas {
        header: chunks[0],
        form: chunks[1],
        banner,
        result: chunks[rest],
        status: chunks[rest + 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_banner() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.form.y, 4);
        assert_eq!(layout.form.height, 5);
        assert!(layout.banner.is_none());
        assert_eq!(layout.result.y, 9);
        assert_eq!(layout.result.height, 14); // 24 - 4 - 5 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_with_banner() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        let banner = layout.banner.unwrap();
        assert_eq!(banner.y, 9);
        assert_eq!(banner.height, 3);
        assert_eq!(layout.result.y, 12);
        assert_eq!(layout.result.height, 11);
        assert_eq!(layout.status.height, 1);
    }
}
