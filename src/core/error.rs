//! Error types for the block editor

use thiserror::Error;

/// Which selection marker could not be resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    First,
    Second,
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::First => write!(f, "Marker 1"),
            Marker::Second => write!(f, "Marker 2"),
        }
    }
}

/// Main error type for the editor
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} Not Found")]
    MarkersUnavailable(Marker),

    #[error("Paint Block Not Found")]
    PaintTargetUnavailable,

    #[error("Clipboard is empty")]
    EmptyClipboard,

    #[error("Nothing to undo or redo")]
    EmptyHistory,

    #[error("Edited Region Not Loaded")]
    RegionUnavailable,

    #[error("Region of {cells} blocks exceeds the limit of {limit}")]
    RegionTooLarge { cells: u64, limit: u64 },

    #[error("Invalid clipboard: {0}")]
    InvalidClipboard(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Conditions that are a quiet no-op for the user rather than an advisory.
    pub fn is_silent(&self) -> bool {
        matches!(self, Error::EmptyClipboard | Error::EmptyHistory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_hints() {
        assert_eq!(Error::MarkersUnavailable(Marker::First).to_string(), "Marker 1 Not Found");
        assert_eq!(Error::MarkersUnavailable(Marker::Second).to_string(), "Marker 2 Not Found");
        assert_eq!(Error::PaintTargetUnavailable.to_string(), "Paint Block Not Found");
    }

    #[test]
    fn test_silent_errors() {
        assert!(Error::EmptyClipboard.is_silent());
        assert!(Error::EmptyHistory.is_silent());
        assert!(!Error::PaintTargetUnavailable.is_silent());
        assert!(!Error::RegionUnavailable.is_silent());
        assert!(!Error::RegionTooLarge { cells: 10, limit: 5 }.is_silent());
    }
}
