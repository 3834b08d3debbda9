use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the pattern demos and the runner around them.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("No captured content to restore for {}", .0.display())]
    MissingUndoState(PathBuf),

    #[error("'{0}' is a file and cannot hold entries")]
    NotADirectory(String),

    #[error("Invalid file name pattern '{pattern}'")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Invalid permission '{0}' (expected r, w or x)")]
    InvalidPermission(String),

    #[error("Observer failed: {0}")]
    Observer(String),

    #[error("Unknown pattern: '{0}'")]
    UnknownPattern(String),

    #[error("Failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl PatternError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Maps a failed filesystem call on `path`, keeping missing files distinct.
    pub fn from_fs(action: &str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound(path)
        } else {
            Self::io(format!("{} {}", action, path.display()), source)
        }
    }

    /// Process exit code for the runner (sysexits.h values).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownPattern(_) | Self::InvalidPermission(_) | Self::InvalidGlob { .. } => 64,
            Self::FileNotFound(_) => 66,
            Self::Io { .. } => 74,
            Self::Config { .. } => 78,
            _ => 70,
        }
    }
}

pub type PatternResult<T> = Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let err = PatternError::from_fs(
            "delete",
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, PatternError::FileNotFound(ref p) if p == &PathBuf::from("missing.txt")));
        assert_eq!(err.exit_code(), 66);
    }

    #[test]
    fn test_other_io_keeps_context() {
        let err = PatternError::from_fs(
            "write",
            "locked.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error: write locked.txt");
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_underflow_message() {
        assert_eq!(PatternError::NothingToUndo.to_string(), "Nothing to undo");
    }
}
