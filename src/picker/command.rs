// External command picker.
// Runs a user-configured program that prints the chosen path or URI.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::{ImagePicker, PickOutcome, PickerRequest};
use crate::error::{Result, SnapError};
use crate::todo::ImageRef;

/// Picker backed by an external program such as `zenity --file-selection`.
///
/// Request parameters are passed through `SNAPTODO_PICKER_*` variables.
/// A non-zero exit status or empty output means the user cancelled.
pub struct CommandPicker {
    program: String,
    args: Vec<String>,
}

impl CommandPicker {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

#[async_trait]
impl ImagePicker for CommandPicker {
    async fn pick(&self, request: PickerRequest) -> Result<PickOutcome> {
        let (width, height) = request.aspect;
        let output = Command::new(&self.program)
            .args(&self.args)
            .env("SNAPTODO_PICKER_MEDIA", request.media.label())
            .env(
                "SNAPTODO_PICKER_EDIT",
                if request.allows_editing { "1" } else { "0" },
            )
            .env("SNAPTODO_PICKER_ASPECT", format!("{}:{}", width, height))
            .env("SNAPTODO_PICKER_QUALITY", request.quality.to_string())
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| SnapError::Picker(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            debug!(program = %self.program, status = %output.status, "picker exited without a selection");
            return Ok(PickOutcome::Cancelled);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .next()
            .and_then(ImageRef::parse)
            .map_or(PickOutcome::Cancelled, PickOutcome::Selected))
    }
}
