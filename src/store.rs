//! Application state store with JSON persistence.
//!
//! A `Store` is a cheaply clonable handle over shared state guarded by a
//! `parking_lot::RwLock`. Saves are atomic: the JSON is written to a temp
//! file in the target directory and renamed over the old one, so a crash
//! mid-write never leaves a truncated state file behind.

use crate::project::Project;
use anyhow::Context as _;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Where the state file lives by default (platform data dir). `None` on
/// systems with no resolvable data directory.
static DEFAULT_STATE_PATH: Lazy<Option<PathBuf>> =
    Lazy::new(|| dirs::data_dir().map(|dir| dir.join("brandboard").join("state.json")));

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("failed to replace state file: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// Which builder surface the user is working in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderMode {
    #[default]
    Logo,
    Menu,
    Site,
}

/// The persisted application state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub active_project: Option<Project>,
    pub active_mode: BuilderMode,
}

/// Shared, persistent application state.
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
    path: PathBuf,
}

impl Store {
    /// Open a store backed by `path`, hydrating from an existing state file
    /// when present. A missing file yields the default state; an unreadable
    /// or corrupt one is logged and replaced on the next save rather than
    /// aborting startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<AppState>(&raw) {
                Ok(state) => {
                    debug!(path = %path.display(), "hydrated state");
                    state
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "corrupt state file, starting fresh");
                    AppState::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppState::default(),
            Err(err) => {
                warn!(path = %path.display(), %err, "unreadable state file, starting fresh");
                AppState::default()
            }
        };
        Self { state: Arc::new(RwLock::new(state)), path }
    }

    /// Open a store at the platform-default location.
    pub fn open_default() -> anyhow::Result<Self> {
        let path = DEFAULT_STATE_PATH
            .clone()
            .ok_or(StoreError::NoDataDir)
            .context("resolving state file location")?;
        Ok(Self::open(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // ========================================================================
    // State access
    // ========================================================================

    /// Read access to the state under the lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.read())
    }

    /// Mutate the state under the lock. Does not persist; call
    /// [`Store::save`] when the mutation should hit disk.
    pub fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.state.write())
    }

    pub fn active_project(&self) -> Option<Project> {
        self.state.read().active_project.clone()
    }

    pub fn active_mode(&self) -> BuilderMode {
        self.state.read().active_mode
    }

    pub fn set_active_mode(&self, mode: BuilderMode) {
        self.state.write().active_mode = mode;
    }

    pub fn set_active_project(&self, project: Option<Project>) {
        self.state.write().active_project = project;
    }

    /// Mutate the active project in place. Returns `false` (without calling
    /// `f`) when no project is active.
    pub fn update_project(&self, f: impl FnOnce(&mut Project)) -> bool {
        let mut state = self.state.write();
        match state.active_project.as_mut() {
            Some(project) => {
                f(project);
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Write the current state to disk atomically.
    pub fn save(&self) -> Result<(), StoreError> {
        let json = {
            let state = self.state.read();
            serde_json::to_string_pretty(&*state)?
        };

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        // Temp file must live in the target directory so the rename stays
        // on one filesystem.
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path)?;
        debug!(path = %self.path.display(), "saved state");
        Ok(())
    }
}
