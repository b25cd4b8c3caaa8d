//! External editor round trip
//!
//! Interactive content capture: seed a temp file, run the user's
//! editor on it synchronously, and decide from the file's modification
//! timestamp whether anything was actually edited. The temp file is
//! owned by one round trip and removed on every exit path, editor
//! launch failure included.

use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::SystemTime;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

/// Handle on the environment-configured editor command.
#[derive(Debug, Clone)]
pub struct Editor {
    command: String,
}

impl Editor {
    /// Resolve the editor from `$EDITOR`. Unset or blank fails before
    /// any file is created.
    pub fn from_env() -> Result<Self> {
        match std::env::var("EDITOR") {
            Ok(command) if !command.trim().is_empty() => Ok(Self { command }),
            _ => Err(Error::EditorDoesNotExist),
        }
    }

    /// Editor with an explicit command string.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// One round trip: seed a temp file with `initial`, run the editor,
    /// and return the trimmed contents if the file changed.
    pub fn edit(&self, initial: &str) -> Result<String> {
        let file = NamedTempFile::new()?;
        fs::write(file.path(), initial)?;
        let before = modified(file.path())?;

        self.run(file.path())?;

        let after = modified(file.path())?;
        if before == after {
            return Err(Error::EditorChange);
        }

        let content = fs::read_to_string(file.path())?;
        Ok(content.trim().to_string())
    }

    /// Batch creation input: one value per non-blank line.
    pub fn capture_lines(&self) -> Result<Vec<String>> {
        let content = self.edit("")?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Run the editor to completion on `path`. The command string is
    /// split on whitespace so values like `code -w` work.
    fn run(&self, path: &Path) -> Result<()> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or(Error::EditorDoesNotExist)?;
        debug!(editor = %self.command, path = %path.display(), "launching editor");

        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|_| Error::EditorBadExitCode)?;
        if !status.success() {
            return Err(Error::EditorBadExitCode);
        }
        Ok(())
    }
}

fn modified(path: &Path) -> Result<SystemTime> {
    Ok(fs::metadata(path)?.modified()?)
}
