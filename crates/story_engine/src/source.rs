use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use engine_logging::engine_debug;

use crate::decode::{decode_text, DecodeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryText {
    pub path: PathBuf,
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode { path: PathBuf, source: DecodeError },
}

/// Reads and decodes one story file.
pub fn load_story(path: &Path) -> Result<StoryText, LoadError> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    let decoded = decode_text(&bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    engine_debug!(
        "Loaded {:?}: {} bytes as {}",
        path,
        bytes.len(),
        decoded.encoding_label
    );

    Ok(StoryText {
        path: path.to_path_buf(),
        text: decoded.text,
        encoding_label: decoded.encoding_label,
    })
}
