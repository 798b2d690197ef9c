// Image picker gateway.
// Async media selection that resolves to a picked reference or a cancellation.

pub mod browse;
pub mod command;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use crate::app::AppEvent;
use crate::config::{PickerConfig, default_browse_dir};
use crate::error::Result;
use crate::todo::ImageRef;

pub use browse::{BrowsePicker, BrowseSession};
pub use command::CommandPicker;

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "heic", "heif", "tif", "tiff",
];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "webm", "mkv", "avi"];

/// Kind of media file, judged by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn of(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Image)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

/// Which media kinds the picker may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaTypes {
    pub images: bool,
    pub videos: bool,
}

impl MediaTypes {
    pub const ALL: MediaTypes = MediaTypes {
        images: true,
        videos: true,
    };

    pub fn accepts(&self, path: &Path) -> bool {
        match MediaKind::of(path) {
            Some(MediaKind::Image) => self.images,
            Some(MediaKind::Video) => self.videos,
            None => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match (self.images, self.videos) {
            (true, true) => "all",
            (true, false) => "images",
            (false, true) => "videos",
            (false, false) => "none",
        }
    }
}

/// Parameters for one picker launch.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerRequest {
    pub media: MediaTypes,
    pub allows_editing: bool,
    /// Crop aspect ratio (width, height).
    pub aspect: (u16, u16),
    /// Compression quality, 0.0..=1.0.
    pub quality: f32,
}

impl Default for PickerRequest {
    /// All media, editing on, 4:3, max quality.
    fn default() -> Self {
        Self {
            media: MediaTypes::ALL,
            allows_editing: true,
            aspect: (4, 3),
            quality: 1.0,
        }
    }
}

/// Result of a picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Selected(ImageRef),
    Cancelled,
}

/// A device capability that lets the user choose a media asset.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Suspend until the user picks something or cancels.
    async fn pick(&self, request: PickerRequest) -> Result<PickOutcome>;
}

/// Build the configured picker.
pub fn from_config(config: &PickerConfig, events: UnboundedSender<AppEvent>) -> Arc<dyn ImagePicker> {
    match config {
        PickerConfig::Browse { dir } => {
            let dir = dir.clone().unwrap_or_else(default_browse_dir);
            Arc::new(BrowsePicker::new(dir, events))
        }
        PickerConfig::Command { program, args } => {
            Arc::new(CommandPicker::new(program.clone(), args.clone()))
        }
    }
}
