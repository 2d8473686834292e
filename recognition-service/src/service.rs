use std::path::Path;

use device_gateway::DeviceTransferClient;
use tracing::{debug, info};

use crate::config::RecognitionConfig;
use crate::error::{RecognitionError, RecognitionResult};
use crate::normalize::normalize_transcript;
use crate::staging::{TempStore, STAGED_AUDIO_NAME, STAGED_DOCUMENT_NAME};
use crate::transport::DeviceTransport;
use crate::types::{RecognitionKind, RecognitionOutcome};

/// Recognition flows for one kiosk.
///
/// Strictly sequential by design: the board owns a single result port, so
/// the service handles one capture at a time, exactly as the kiosk UI
/// drives it.
pub struct RecognitionService {
    transport: Box<dyn DeviceTransport>,
    staging: TempStore,
}

impl RecognitionService {
    /// Create a service talking to the real board from `config`.
    pub async fn new(config: RecognitionConfig) -> RecognitionResult<Self> {
        let transport = Box::new(DeviceTransferClient::new(config.device.clone()));
        Self::with_transport(config, transport).await
    }

    /// Create a service over a caller-supplied transport.
    pub async fn with_transport(
        config: RecognitionConfig,
        transport: Box<dyn DeviceTransport>,
    ) -> RecognitionResult<Self> {
        let staging = TempStore::create(config.temp_dir.clone()).await?;
        Ok(Self { transport, staging })
    }

    /// Transcribe a recorded patient question.
    ///
    /// Stages the capture, hands it to the board, and normalizes the
    /// transcript. A board answer that is empty after trimming is an
    /// error here: the consultation layer has nothing to work with.
    pub async fn transcribe_speech(&self, capture: &Path) -> RecognitionResult<RecognitionOutcome> {
        let staged = self.staging.stage(capture, STAGED_AUDIO_NAME).await?;
        let raw = self.transport.exchange_file(&staged).await?;
        debug!(raw_len = raw.len(), "speech transcript received");

        let text = normalize_transcript(&raw);
        if text.is_empty() {
            return Err(RecognitionError::EmptyTranscript);
        }

        let outcome = RecognitionOutcome::new(RecognitionKind::Speech, text, raw.len());
        info!(id = %outcome.id, chars = outcome.text.chars().count(), "question transcribed");
        Ok(outcome)
    }

    /// OCR a captured registration document.
    ///
    /// OCR output is passed through trimmed but otherwise untouched; an
    /// empty answer is legitimate for a blank capture and is returned
    /// as-is for the operator to re-shoot.
    pub async fn recognize_document(&self, capture: &Path) -> RecognitionResult<RecognitionOutcome> {
        let staged = self.staging.stage(capture, STAGED_DOCUMENT_NAME).await?;
        let raw = self.transport.exchange_file(&staged).await?;
        debug!(raw_len = raw.len(), "document text received");

        let outcome =
            RecognitionOutcome::new(RecognitionKind::Document, raw.trim().to_string(), raw.len());
        info!(id = %outcome.id, chars = outcome.text.chars().count(), "document recognized");
        Ok(outcome)
    }

    /// Drop staged captures from finished or aborted requests.
    pub async fn clear_staging(&self) {
        self.staging.clear().await;
    }
}
