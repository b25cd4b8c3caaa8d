//! Error taxonomy
//!
//! Every failure a command can surface, with the process exit code each
//! kind maps to. Errors are raised at the component boundary and
//! propagated unchanged up to `main`; nothing in the core retries or
//! silently recovers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A search term matched zero records, or more than one after
    /// exact-id refinement. The message carries the offending term.
    #[error("{0}")]
    ImpreciseQuery(String),

    #[error("500 internal server error from host")]
    InternalServer,

    #[error("failed to parse response JSON")]
    JsonParse(#[source] serde_json::Error),

    #[error("editor execution failed or bad exit code")]
    EditorBadExitCode,

    #[error("no editor configured, please set $EDITOR")]
    EditorDoesNotExist,

    #[error("temp file not changed, no update needed")]
    EditorChange,

    #[error("401 unauthorized (check user/password, see `facts config`)")]
    Unauthorized,

    #[error("422 unprocessable entity (validation error? duplicate?)")]
    UnprocessableEntity,

    #[error("unexpected HTTP status {0} from host")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Process exit code for this kind.
    pub fn status_code(&self) -> i32 {
        match self {
            Error::ImpreciseQuery(_) => 2,
            Error::InternalServer => 3,
            Error::JsonParse(_) => 4,
            Error::EditorBadExitCode => 5,
            Error::EditorDoesNotExist => 6,
            Error::EditorChange => 7,
            Error::Unauthorized => 8,
            Error::UnprocessableEntity => 9,
            Error::UnexpectedStatus(_) | Error::Transport(_) | Error::Io(_) | Error::Other(_) => 1,
        }
    }

    /// Expected user-facing outcomes: reported as a plain message and
    /// the process exits cleanly. Everything else is reported on stderr
    /// and exits with `status_code`.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            Error::ImpreciseQuery(_)
                | Error::EditorDoesNotExist
                | Error::EditorBadExitCode
                | Error::EditorChange
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_are_stable() {
        assert_eq!(Error::ImpreciseQuery("x".into()).status_code(), 2);
        assert_eq!(Error::InternalServer.status_code(), 3);
        assert_eq!(Error::EditorBadExitCode.status_code(), 5);
        assert_eq!(Error::EditorDoesNotExist.status_code(), 6);
        assert_eq!(Error::EditorChange.status_code(), 7);
        assert_eq!(Error::Unauthorized.status_code(), 8);
        assert_eq!(Error::UnprocessableEntity.status_code(), 9);
    }

    #[test]
    fn benign_kinds() {
        assert!(Error::ImpreciseQuery("x".into()).is_benign());
        assert!(Error::EditorChange.is_benign());
        assert!(!Error::Unauthorized.is_benign());
        assert!(!Error::InternalServer.is_benign());
    }
}
