//! Core domain types for ada2py

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name suffixes accepted as Ada sources, lower-case with leading dot.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".ada", ".adb"];

/// Check a file name against [`ACCEPTED_EXTENSIONS`].
///
/// The suffix starting at the last `.` is compared case-insensitively, so
/// `Main.ADB` is accepted and a name without any `.` is not.
pub fn has_accepted_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    match lower.rfind('.') {
        Some(idx) => ACCEPTED_EXTENSIONS.contains(&&lower[idx..]),
        None => false,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Phase
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Interactive, accepting input
    #[default]
    Running,
    /// Shutdown requested, the event loop exits after the current frame
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Source File
// ─────────────────────────────────────────────────────────────────────────────

/// A file chosen in the upload form.
///
/// Only the location and display name are held here; the bytes are read by
/// the transport when the multipart body is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub name: String,
}

impl SourceFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, name }
    }

    /// Build from text typed by the user, expanding a leading `~/`.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if let Some(rest) = trimmed.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return Self::from_path(home.join(rest));
            }
        }
        Self::from_path(trimmed)
    }

    pub fn has_accepted_extension(&self) -> bool {
        has_accepted_extension(&self.name)
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion Result
// ─────────────────────────────────────────────────────────────────────────────

/// Successful answer from the conversion service.
///
/// Taken verbatim from the response body: missing fields become empty
/// strings, nothing is reshaped. The generated code travels on the wire as
/// `python_code`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Human-readable explanation of the source's logic
    #[serde(default)]
    pub logic: String,

    /// Generated unit tests
    #[serde(default)]
    pub unit_tests: String,

    /// Generated output code
    #[serde(default, rename = "python_code")]
    pub converted_code: String,
}

impl ConversionResult {
    /// Text of a copyable section
    pub fn section_text(&self, section: CodeSection) -> &str {
        match section {
            CodeSection::UnitTests => &self.unit_tests,
            CodeSection::GeneratedCode => &self.converted_code,
        }
    }
}

/// The two result sections that carry a copy control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSection {
    UnitTests,
    GeneratedCode,
}

impl CodeSection {
    pub const ALL: [CodeSection; 2] = [CodeSection::UnitTests, CodeSection::GeneratedCode];

    pub fn title(&self) -> &'static str {
        match self {
            CodeSection::UnitTests => "Unit Tests",
            CodeSection::GeneratedCode => "Generated Code",
        }
    }
}

impl fmt::Display for CodeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
