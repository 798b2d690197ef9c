// In-app media browser picker.
// Lists media files in a directory and waits for the UI modal to resolve.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::{mpsc::UnboundedSender, oneshot};
use tracing::debug;

use super::{ImagePicker, MediaTypes, PickOutcome, PickerRequest};
use crate::app::AppEvent;
use crate::error::{Result, SnapError};
use crate::todo::ImageRef;

/// A pending browse request handed to the event loop.
///
/// Dropping the session without resolving it counts as a cancellation.
#[derive(Debug)]
pub struct BrowseSession {
    pub dir: PathBuf,
    pub entries: Vec<PathBuf>,
    pub request: PickerRequest,
    reply: oneshot::Sender<PickOutcome>,
}

impl BrowseSession {
    /// Pick the entry at `index`. Out of range resolves as cancelled.
    pub fn select(self, index: usize) {
        let outcome = match self.entries.get(index) {
            Some(path) => PickOutcome::Selected(ImageRef::from_path(path)),
            None => PickOutcome::Cancelled,
        };
        self.resolve(outcome);
    }

    pub fn cancel(self) {
        self.resolve(PickOutcome::Cancelled);
    }

    fn resolve(self, outcome: PickOutcome) {
        // The picker task may already be gone; nothing to do then.
        let _ = self.reply.send(outcome);
    }

    /// Display name of an entry relative to the browsed directory.
    pub fn entry_label(&self, index: usize) -> Option<String> {
        let path = self.entries.get(index)?;
        let name = path.strip_prefix(&self.dir).unwrap_or(path);
        Some(name.display().to_string())
    }
}

/// Picker that browses a directory inside the TUI.
pub struct BrowsePicker {
    dir: PathBuf,
    events: UnboundedSender<AppEvent>,
}

impl BrowsePicker {
    pub fn new(dir: PathBuf, events: UnboundedSender<AppEvent>) -> Self {
        Self { dir, events }
    }
}

#[async_trait]
impl ImagePicker for BrowsePicker {
    async fn pick(&self, request: PickerRequest) -> Result<PickOutcome> {
        let dir = tokio::fs::canonicalize(&self.dir).await?;
        let entries = scan_media(&dir, request.media).await?;
        debug!(dir = %dir.display(), count = entries.len(), "browse session opened");

        let (reply, outcome) = oneshot::channel();
        let session = BrowseSession {
            dir,
            entries,
            request,
            reply,
        };

        self.events
            .send(AppEvent::BrowseRequested(session))
            .map_err(|_| SnapError::Picker("event loop is not running".to_string()))?;

        Ok(outcome.await.unwrap_or(PickOutcome::Cancelled))
    }
}

/// List accepted media files directly inside `dir`, sorted by name.
async fn scan_media(dir: &Path, media: MediaTypes) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    let mut read_dir = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_file() && media.accepts(&path) {
            entries.push(path);
        }
    }

    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use tokio::sync::mpsc;

    fn media_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.png", "a.jpg", "clip.mp4", "notes.txt"] {
            fs::write(temp_dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(temp_dir.path().join("nested.png")).unwrap();
        temp_dir
    }

    #[tokio::test]
    async fn test_scan_media_filters_and_sorts() {
        let temp_dir = media_dir();
        let entries = scan_media(temp_dir.path(), MediaTypes::ALL).await.unwrap();
        let names: Vec<_> = entries
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "clip.mp4"]);
    }

    #[tokio::test]
    async fn test_pick_selected() {
        let temp_dir = media_dir();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let picker = BrowsePicker::new(temp_dir.path().to_path_buf(), tx);

        let task = tokio::spawn(async move { picker.pick(PickerRequest::default()).await });

        let Some(AppEvent::BrowseRequested(session)) = rx.recv().await else {
            panic!("expected a browse session");
        };
        assert_eq!(session.entries.len(), 3);
        assert_eq!(session.entry_label(1).as_deref(), Some("b.png"));
        session.select(1);

        let outcome = task.await.unwrap().unwrap();
        match outcome {
            PickOutcome::Selected(image) => {
                assert!(image.as_str().starts_with("file://"));
                assert!(image.as_str().ends_with("b.png"));
            }
            PickOutcome::Cancelled => panic!("expected a selection"),
        }
    }

    #[tokio::test]
    async fn test_dropped_session_is_cancelled() {
        let temp_dir = media_dir();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let picker = BrowsePicker::new(temp_dir.path().to_path_buf(), tx);

        let task = tokio::spawn(async move { picker.pick(PickerRequest::default()).await });

        let session = rx.recv().await.unwrap();
        drop(session);

        assert_eq!(task.await.unwrap().unwrap(), PickOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_select_out_of_range_is_cancelled() {
        let temp_dir = media_dir();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let picker = BrowsePicker::new(temp_dir.path().to_path_buf(), tx);

        let task = tokio::spawn(async move { picker.pick(PickerRequest::default()).await });

        let Some(AppEvent::BrowseRequested(session)) = rx.recv().await else {
            panic!("expected a browse session");
        };
        session.select(99);

        assert_eq!(task.await.unwrap().unwrap(), PickOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_missing_dir_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();
        let picker = BrowsePicker::new(temp_dir.path().join("missing"), tx);

        assert!(picker.pick(PickerRequest::default()).await.is_err());
    }
}
