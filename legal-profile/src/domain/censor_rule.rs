//! Censor rule records produced for the downstream redaction renderer.

use serde::{Deserialize, Serialize};

/// A text-to-replacement mapping consumed by the redaction renderer.
///
/// This crate only ever inserts rules; it never updates or deletes them,
/// so rules for superseded identity card numbers keep redacting historical
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensorRule {
    /// Exact text to redact; the match key for find-or-create.
    pub text: String,
    /// Replacement shown instead of the matched text.
    pub replacement: String,
    /// Attribution for the editor that created the rule.
    pub last_edit_editor: String,
    /// Audit comment recorded at creation.
    pub last_edit_comment: String,
}
