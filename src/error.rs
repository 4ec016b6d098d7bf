//! RL-010: Error taxonomy for resume generation, checking and compilation.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Every fatal condition the tool can hit.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid resume data in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("{} resume validation error(s)", .0.len())]
    InvalidRecord(Vec<String>),

    #[error("invalid file path: {0}")]
    InvalidPath(String),

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings error: {0}")]
    Settings(String),

    #[error("{0} syntax issue(s) found")]
    ValidationFailed(usize),

    #[error("{0} not found in PATH or common install locations")]
    CompilerNotFound(String),

    #[error("compiler '{0}' is not in the allowed list")]
    CompilerNotAllowed(String),

    #[error("LaTeX compilation failed with exit code {code}")]
    CompileFailed {
        code: i32,
        stdout: String,
        stderr: String,
    },

    #[error("compiler exited successfully but {} was not produced", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("operation interrupted")]
    Interrupted,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rl010_display_read() {
        let e = Error::Read {
            path: PathBuf::from("resume.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(e.to_string(), "cannot read resume.json: missing");
    }

    #[test]
    fn test_rl010_display_compile_failed() {
        let e = Error::CompileFailed {
            code: 1,
            stdout: "! Undefined control sequence.".into(),
            stderr: String::new(),
        };
        assert!(e.to_string().contains("exit code 1"));
    }

    #[test]
    fn test_rl010_display_invalid_record_counts() {
        let e = Error::InvalidRecord(vec!["a".into(), "b".into()]);
        assert_eq!(e.to_string(), "2 resume validation error(s)");
    }

    #[test]
    fn test_rl010_io_from() {
        let e: Error = std::io::Error::other("boom").into();
        assert!(matches!(e, Error::Io(_)));
    }
}
