//! Upload form state
//!
//! Holds the typed path, the currently selected file, and the inline
//! validation error. Validation is by file name extension only; the form
//! never reads the file.

use tracing::debug;

use ada2py_core::prelude::*;
use ada2py_core::SourceFile;

/// Shown when submitting with nothing selected
pub const NO_FILE_ERROR: &str = "Please select a file";

/// Shown when the chosen file is not an Ada source
pub const INVALID_EXTENSION_ERROR: &str = "Please select a valid Ada file (.ada or .adb)";

/// Presentation hint next to the path input
pub const ACCEPT_HINT: &str = "Accepts: .ada, .adb";

#[derive(Debug, Clone, Default)]
pub struct UploadFormState {
    /// Text in the path input
    pub input: String,
    /// File confirmed by the last pick
    pub selected: Option<SourceFile>,
    /// Inline validation error
    pub error: Option<String>,
    /// Number of rejected picks and submits so far
    pub rejections: u64,
}

impl UploadFormState {
    pub fn new() -> Self {
        Self::default()
    }

    // Editing the path drops the selection; it is re-validated on the next pick.

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
        self.selected = None;
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.selected = None;
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.selected = None;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.selected = None;
    }

    /// Whether the input holds text that has not been picked yet
    pub fn has_unpicked_input(&self) -> bool {
        self.selected.is_none() && !self.input.trim().is_empty()
    }

    /// Confirm the typed path as the selected file.
    ///
    /// An empty input clears the selection. An unaccepted extension sets the
    /// validation error and clears both input and selection. Returns `true`
    /// when a valid file is now selected.
    pub fn pick(&mut self) -> bool {
        if self.input.trim().is_empty() {
            self.selected = None;
            return false;
        }

        let file = SourceFile::from_input(&self.input);
        if !file.has_accepted_extension() {
            debug!("Rejected file '{}': unaccepted extension", file.name);
            self.reject(INVALID_EXTENSION_ERROR);
            return false;
        }

        debug!("Selected {}", file.path.display());
        self.selected = Some(file);
        self.error = None;
        true
    }

    /// Validate and take the selected file for submission.
    ///
    /// A typed but unconfirmed path is picked first. On success the form is
    /// reset and the file is returned; on failure the error is also stored
    /// for inline display.
    pub fn submit(&mut self) -> Result<SourceFile> {
        if self.has_unpicked_input() && !self.pick() {
            return Err(Error::validation(INVALID_EXTENSION_ERROR));
        }

        let Some(file) = self.selected.take() else {
            self.error = Some(NO_FILE_ERROR.to_string());
            self.rejections += 1;
            return Err(Error::validation(NO_FILE_ERROR));
        };

        if !file.has_accepted_extension() {
            self.reject(INVALID_EXTENSION_ERROR);
            return Err(Error::validation(INVALID_EXTENSION_ERROR));
        }

        self.input.clear();
        self.error = None;
        Ok(file)
    }

    fn reject(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.rejections += 1;
        self.selected = None;
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(input: &str) -> UploadFormState {
        let mut form = UploadFormState::new();
        form.set_input(input);
        form
    }

    #[test]
    fn test_pick_valid_file() {
        let mut form = form_with("src/hello.adb");
        assert!(form.pick());
        assert_eq!(form.selected.as_ref().map(|f| f.name.as_str()), Some("hello.adb"));
        assert!(form.error.is_none());
        // Input stays so the user sees what was picked
        assert_eq!(form.input, "src/hello.adb");
    }

    #[test]
    fn test_pick_invalid_extension_clears_input_and_selection() {
        let mut form = form_with("hello.adb");
        form.pick();

        form.set_input("test.js");
        assert!(!form.pick());

        assert_eq!(form.error.as_deref(), Some(INVALID_EXTENSION_ERROR));
        assert!(form.selected.is_none());
        assert!(form.input.is_empty());
    }

    #[test]
    fn test_pick_clears_previous_error() {
        let mut form = form_with("test.js");
        form.pick();
        assert!(form.error.is_some());

        form.set_input("main.ada");
        assert!(form.pick());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_editing_input_drops_selection() {
        let mut form = form_with("main.ada");
        form.pick();
        form.backspace();
        assert!(form.selected.is_none());
        assert!(form.has_unpicked_input());
    }

    #[test]
    fn test_pick_empty_input_clears_selection() {
        let mut form = form_with("main.ada");
        form.pick();
        form.input.clear();

        assert!(!form.pick());
        assert!(form.selected.is_none());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_submit_without_file() {
        let mut form = UploadFormState::new();
        let err = form.submit().unwrap_err();
        assert_eq!(err.to_string(), "Please select a file");
        assert_eq!(form.error.as_deref(), Some(NO_FILE_ERROR));
        assert_eq!(form.rejections, 1);

        form.submit().unwrap_err();
        assert_eq!(form.rejections, 2);
    }

    #[test]
    fn test_submit_valid_returns_same_file_and_resets() {
        let mut form = form_with("/tmp/hello.adb");
        form.pick();
        let picked = form.selected.clone().unwrap();

        let file = form.submit().unwrap();
        assert_eq!(file, picked);
        assert!(form.selected.is_none());
        assert!(form.input.is_empty());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_submit_picks_unconfirmed_input() {
        let mut form = form_with("pkg.ADA");
        let file = form.submit().unwrap();
        assert_eq!(file.name, "pkg.ADA");
    }

    #[test]
    fn test_submit_unconfirmed_invalid_input() {
        let mut form = form_with("notes.txt");
        let err = form.submit().unwrap_err();
        assert_eq!(err.to_string(), INVALID_EXTENSION_ERROR);
        assert!(form.selected.is_none());
        assert!(form.input.is_empty());
    }

    #[test]
    fn test_submit_rejects_invalid_selected_file() {
        let mut form = UploadFormState::new();
        form.selected = Some(SourceFile::from_path("build.gpr"));

        let err = form.submit().unwrap_err();
        assert_eq!(err.to_string(), INVALID_EXTENSION_ERROR);
        assert!(form.selected.is_none());
    }

    #[test]
    fn test_editing_input() {
        let mut form = UploadFormState::new();
        for c in "a.adbx".chars() {
            form.insert_char(c);
        }
        form.backspace();
        assert_eq!(form.input, "a.adb");
        form.clear_input();
        assert!(form.input.is_empty());
    }
}
