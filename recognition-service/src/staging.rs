use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use crate::error::{RecognitionError, RecognitionResult};

/// Staged name for a voice capture awaiting hand-off.
pub const STAGED_AUDIO_NAME: &str = "temp_audio.wav";
/// Staged name for a captured registration document.
pub const STAGED_DOCUMENT_NAME: &str = "captured_document.jpg";

/// Staging area for captured files.
///
/// Each capture is copied here under a fixed name before hand-off, so the
/// caller's original file is never touched and a crashed request leaves at
/// most one stale file per kind behind.
#[derive(Debug, Clone)]
pub struct TempStore {
    dir: PathBuf,
}

impl TempStore {
    /// Open the staging directory, creating it if needed.
    pub async fn create(dir: impl Into<PathBuf>) -> RecognitionResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| RecognitionError::Staging {
                path: dir.clone(),
                source,
            })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copy a capture into the staging area under `name` and return the
    /// staged path.
    pub async fn stage(&self, src: &Path, name: &str) -> RecognitionResult<PathBuf> {
        let dest = self.dir.join(name);
        fs::copy(src, &dest)
            .await
            .map_err(|source| RecognitionError::Staging {
                path: src.to_path_buf(),
                source,
            })?;
        debug!(src = %src.display(), dest = %dest.display(), "capture staged");
        Ok(dest)
    }

    /// Best-effort removal of everything in the staging area.
    pub async fn clear(&self) {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "cannot list staging dir");
                return;
            }
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            if let Err(e) = fs::remove_file(entry.path()).await {
                warn!(path = %entry.path().display(), error = %e, "stale staging file left behind");
            }
        }
    }
}
