//! Error types for preset file operations.

/// Errors that can occur while loading or saving a preset file.
#[derive(Debug)]
pub enum PresetError {
    /// Reading or writing the preset file failed.
    Io(std::io::Error),
    /// The preset file is not valid preset JSON.
    Parse(serde_json::Error),
}

impl std::fmt::Display for PresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "preset i/o failed: {err}"),
            Self::Parse(err) => write!(f, "preset parse failed: {err}"),
        }
    }
}

impl std::error::Error for PresetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PresetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PresetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Result type for preset file operations.
pub type Result<T> = std::result::Result<T, PresetError>;
