//! Formatting options.
//!
//! The core recognizes the options below; anything else lives in the opaque
//! [`FormatOptions::extra`] map and is passed through to rules untouched.
//! Callers never observe engine-side adjustments: the engine works on its
//! own copy.

use rustc_hash::FxHashMap;

use crate::error::FormatError;

/// File-header handling for the `file_header` rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FileHeader {
    /// Leave any existing header comment alone.
    #[default]
    Ignore,
    /// Replace the leading comment block with this text (empty string strips
    /// the header entirely).
    Text(String),
}

/// Options shared by the tokenizer diagnostics and the rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// One level of indentation.
    pub indent: String,
    /// Linebreak string rules emit; inferred from the source when it uses a
    /// consistent different style.
    pub linebreak: String,
    /// Treat the input as a code fragment: dangling-scope errors do not fail
    /// the format call.
    pub fragment: bool,
    /// Suppress merge-conflict-marker detection.
    pub ignore_conflict_markers: bool,
    /// Tab width used for column computation only. Must be at least 1.
    pub tab_width: usize,
    /// File-header replacement mode.
    pub file_header: FileHeader,
    /// Language version the source targets. Opaque to the core; rules that
    /// care parse it themselves.
    pub swift_version: String,
    /// Unrecognized options, passed through to rules unchanged.
    pub extra: FxHashMap<String, String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            linebreak: "\n".to_string(),
            fragment: false,
            ignore_conflict_markers: false,
            tab_width: 4,
            file_header: FileHeader::Ignore,
            swift_version: String::new(),
            extra: FxHashMap::default(),
        }
    }
}

impl FormatOptions {
    /// Check option values the engine depends on.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.tab_width < 1 {
            return Err(FormatError::Options("tab width must be at least 1".to_string()));
        }
        Ok(())
    }
}
