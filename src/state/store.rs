//! State storage backends.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::state::{MonitorState, StateError, StateResult};

/// Load/save access to the last known monitor state.
pub trait StateStore {
    /// Return the persisted state, or `Operational` when nothing has been stored.
    fn load(&self) -> StateResult<MonitorState>;

    /// Overwrite the persisted state.
    fn save(&self, state: MonitorState) -> StateResult<()>;
}

/// State kept in a single-token text file.
///
/// There is no locking: two concurrent runs may race on the file.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Trimmed raw contents of the file, or `None` if it does not exist.
    pub fn load_token(&self) -> StateResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StateError::Read {
                path: self.path.display().to_string(),
                source,
            }),
        }
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> StateResult<MonitorState> {
        let Some(token) = self.load_token()? else {
            tracing::debug!(path = %self.path.display(), "No state file, assuming operational");
            return Ok(MonitorState::default());
        };

        match token.parse() {
            Ok(state) => Ok(state),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring unreadable state token, assuming operational"
                );
                Ok(MonitorState::default())
            }
        }
    }

    fn save(&self, state: MonitorState) -> StateResult<()> {
        let write_err = |source: std::io::Error| StateError::Write {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(&self.path, state.as_str()).map_err(write_err)?;

        tracing::debug!(path = %self.path.display(), state = %state, "State saved");
        Ok(())
    }
}

/// In-memory store, used to fake persistence in tests.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    state: Mutex<Option<MonitorState>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a prior state.
    pub fn with_state(state: MonitorState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }

    /// Whatever was last saved (or seeded), `None` if never written.
    pub fn stored(&self) -> Option<MonitorState> {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> StateResult<MonitorState> {
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, state: MonitorState) -> StateResult<()> {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = Some(state);
        Ok(())
    }
}
