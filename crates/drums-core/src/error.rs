use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Corrupt record store at line {line} ({content:?}): {reason}")]
    StoreCorrupt {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Failed to write record store: {0}")]
    StoreWrite(#[source] std::io::Error),

    #[error("Invalid scoring rules: {0}")]
    InvalidRules(String),

    #[error("Session has already ended")]
    SessionEnded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if this error came from persisting the leaderboard
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Error::StoreWrite(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_write_failure_is_distinct() {
        let err = Error::StoreWrite(std::io::Error::other("disk full"));
        assert!(err.is_write_failure());
        assert!(!err.is_not_found());
        assert!(!Error::SessionEnded.is_write_failure());
    }

    #[test]
    fn test_corrupt_message_names_line() {
        let err = Error::StoreCorrupt {
            line: 3,
            content: "Bob;abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("Bob;abc"));
    }
}
