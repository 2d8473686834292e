use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the board was asked to recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionKind {
    /// OCR of a captured registration document.
    Document,
    /// Transcription of a recorded patient question.
    Speech,
}

/// One recognition result, as handed to the consultation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionOutcome {
    pub id: Uuid,
    pub kind: RecognitionKind,
    /// Cleaned text (speech transcripts are normalized, OCR is trimmed).
    pub text: String,
    /// Length in bytes of the raw payload the board returned.
    pub raw_len: usize,
    pub received_at: DateTime<Utc>,
}

impl RecognitionOutcome {
    pub fn new(kind: RecognitionKind, text: String, raw_len: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text,
            raw_len,
            received_at: Utc::now(),
        }
    }
}
