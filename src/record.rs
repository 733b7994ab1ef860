//! Capture of engine-emitted frames into sequentially numbered files.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use base64::Engine as _;

use crate::foundation::error::{ScenelinkError, ScenelinkResult};

/// Output format of a recording session. Raster frames arrive as base64
/// data URIs, vector frames as raw markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameFormat {
    Png,
    Svg,
}

impl FrameFormat {
    pub fn extension(self) -> &'static str {
        match self {
            FrameFormat::Png => "png",
            FrameFormat::Svg => "svg",
        }
    }

    pub fn is_vector(self) -> bool {
        matches!(self, FrameFormat::Svg)
    }

    fn for_event(is_vector: bool) -> Self {
        if is_vector {
            FrameFormat::Svg
        } else {
            FrameFormat::Png
        }
    }
}

struct ActiveRecording {
    dir: PathBuf,
    format: FrameFormat,
    next_index: u64,
    written: u64,
    first_error: Option<String>,
}

/// Writes emitted frames to `{n}.{ext}` with `n` starting at 1 per session.
///
/// Frame events arrive on the connection's pump thread with no awaiting
/// caller, so write failures are held and surfaced by [`FrameRecorder::stop`]
/// rather than swallowed.
pub struct FrameRecorder {
    inner: Mutex<Option<ActiveRecording>>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<ActiveRecording>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clear pre-existing frame files of `format`'s extension in `dir`, then
    /// arm capture. Numbering continues from the count of matching files
    /// still present at arm time, so after the clear it restarts at 1.
    pub fn begin(&self, dir: impl Into<PathBuf>, format: FrameFormat) -> ScenelinkResult<()> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| ScenelinkError::recording(format!("create '{}': {e}", dir.display())))?;

        clear_frames(&dir, format.extension())?;
        let present = count_frames(&dir, format.extension())?;

        *self.lock() = Some(ActiveRecording {
            dir,
            format,
            next_index: present + 1,
            written: 0,
            first_error: None,
        });
        Ok(())
    }

    /// Whether a recording session is armed.
    pub fn is_armed(&self) -> bool {
        self.lock().is_some()
    }

    /// Disarm capture. Returns the number of frames written this session, or
    /// the first write error that occurred while armed. Frame events after
    /// this are dropped.
    pub fn stop(&self) -> ScenelinkResult<u64> {
        match self.lock().take() {
            Some(rec) => match rec.first_error {
                Some(msg) => Err(ScenelinkError::recording(msg)),
                None => Ok(rec.written),
            },
            None => Ok(0),
        }
    }

    /// Route one frame event from the pump thread.
    pub(crate) fn handle_frame(&self, is_vector: bool, payload: &str) {
        let mut guard = self.lock();
        let Some(rec) = guard.as_mut() else {
            tracing::debug!("dropping frame: no recording armed");
            return;
        };

        let event_format = FrameFormat::for_event(is_vector);
        if event_format != rec.format {
            tracing::warn!(
                session = rec.format.extension(),
                frame = event_format.extension(),
                "frame format differs from recording session format"
            );
        }

        let path = rec
            .dir
            .join(format!("{}.{}", rec.next_index, event_format.extension()));
        match write_frame(&path, event_format, payload) {
            Ok(()) => {
                rec.next_index += 1;
                rec.written += 1;
            }
            Err(e) => {
                tracing::warn!("frame write failed: {e}");
                if rec.first_error.is_none() {
                    rec.first_error = Some(e.to_string());
                }
            }
        }
    }
}

impl Default for FrameRecorder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_frame(path: &Path, format: FrameFormat, payload: &str) -> ScenelinkResult<()> {
    let bytes = match format {
        FrameFormat::Svg => payload.as_bytes().to_vec(),
        FrameFormat::Png => decode_data_uri(payload)?,
    };
    std::fs::write(path, bytes)
        .map_err(|e| ScenelinkError::recording(format!("write '{}': {e}", path.display())))
}

/// Strip the `data:<mime>;base64,` prefix and decode the remainder.
fn decode_data_uri(payload: &str) -> ScenelinkResult<Vec<u8>> {
    let (_, encoded) = payload
        .split_once(',')
        .ok_or_else(|| ScenelinkError::recording("raster payload is not a data URI"))?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| ScenelinkError::recording(format!("raster payload base64: {e}")))
}

fn clear_frames(dir: &Path, extension: &str) -> ScenelinkResult<()> {
    for entry in list_dir(dir)? {
        if entry.extension().and_then(|e| e.to_str()) == Some(extension) {
            std::fs::remove_file(&entry).map_err(|e| {
                ScenelinkError::recording(format!("remove '{}': {e}", entry.display()))
            })?;
        }
    }
    Ok(())
}

fn count_frames(dir: &Path, extension: &str) -> ScenelinkResult<u64> {
    let n = list_dir(dir)?
        .into_iter()
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(extension))
        .count();
    Ok(n as u64)
}

fn list_dir(dir: &Path) -> ScenelinkResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| ScenelinkError::recording(format!("read '{}': {e}", dir.display())))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| ScenelinkError::recording(format!("read '{}': {e}", dir.display())))?;
        paths.push(entry.path());
    }
    Ok(paths)
}

#[cfg(test)]
#[path = "../tests/unit/record.rs"]
mod tests;
