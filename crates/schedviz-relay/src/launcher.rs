//! Child process launcher for the external scheduler executable.
//!
//! Spawns the pre-compiled binary with no arguments, stdout and stderr
//! captured, and hands back a line-buffered reader over stdout. There
//! is no timeout, no restart, and no exit-code inspection: the run's
//! lifetime is tied to the child's own termination.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::BufReader;
use tokio::process::{Child, ChildStdout, Command};
use tracing::info;

/// Errors that can occur when launching the scheduler executable.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The executable does not exist at the configured path.
    #[error("could not find executable '{path}'")]
    NotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// Any other spawn failure (permissions, resource limits, ...).
    #[error("failed to launch executable: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// The spawned child had no stdout handle.
    ///
    /// Should not happen when stdout is piped; kept as a typed error
    /// rather than a panic path.
    #[error("child process has no stdout handle")]
    NoStdout,
}

/// A running scheduler child process with its stdout reader.
///
/// The [`Child`] handle is kept alive alongside the reader so the
/// process is not reaped while output is still being consumed.
pub struct ScheduledChild {
    /// The child process handle.
    pub process: Child,
    /// Line-buffered reader over the child's stdout.
    pub stdout: BufReader<ChildStdout>,
}

/// Spawn the scheduler executable with stdout and stderr piped.
///
/// stderr is captured but not relayed, matching the demo's behavior.
///
/// # Errors
///
/// Returns [`LaunchError::NotFound`] when the OS reports the executable
/// missing, or [`LaunchError::Io`] for any other spawn failure.
pub fn spawn(path: &Path) -> Result<ScheduledChild, LaunchError> {
    let mut process = Command::new(path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LaunchError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LaunchError::Io { source }
            }
        })?;

    let stdout = process.stdout.take().ok_or(LaunchError::NoStdout)?;

    info!(executable = %path.display(), "scheduler executable started");

    Ok(ScheduledChild {
        process,
        stdout: BufReader::new(stdout),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_executable_is_not_found() {
        let result = spawn(Path::new("/nonexistent/schedviz/os_project"));
        assert!(matches!(result, Err(LaunchError::NotFound { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn existing_executable_spawns() {
        use tokio::io::AsyncBufReadExt as _;

        let child = spawn(Path::new("/bin/echo"));
        assert!(child.is_ok());

        // Stream ends after echo's single empty line.
        if let Ok(child) = child {
            let mut lines = child.stdout.lines();
            let first = lines.next_line().await.ok().flatten();
            assert_eq!(first.as_deref(), Some(""));
        }
    }
}
