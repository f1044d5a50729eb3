use std::path::{Path, PathBuf};
use tracing::debug;

const SHELL_CLIENT: &str = "kea-shell";

/// How a command reaches the control socket.
///
/// Selected once at channel construction rather than re-probed per call:
/// when the `kea-shell` client is installed it is preferred, otherwise the
/// socket is spoken to directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Pipe the envelope through an external client binary.
    Shell(PathBuf),
    /// Connect to the unix socket and speak the wire format directly.
    Socket,
}

impl Transport {
    pub fn detect() -> Self {
        match find_on_path(SHELL_CLIENT) {
            Some(path) => {
                debug!(client = %path.display(), "Using shell client transport");
                Transport::Shell(path)
            }
            None => Transport::Socket,
        }
    }
}

fn find_on_path(binary: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(binary))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
