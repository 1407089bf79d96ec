use serde::Deserialize;
use serde_json::json;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Persistent storage for the single best score.
///
/// Both operations are best-effort: failures are logged by the implementation
/// and never reach the game.
pub(crate) trait HighScoreStore {
    /// Return the stored high score, or 0 if there is none or it cannot be
    /// read
    fn load(&mut self) -> u32;

    /// Store `score` as the new high score
    fn save(&mut self, score: u32);
}

/// A high score kept in a JSON file of the form `{"high": 42}`
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct JsonFileStore {
    path: Option<PathBuf>,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.  If `path` is `None` (no
    /// location could be determined), loading yields 0 and saving does
    /// nothing but log.
    pub(crate) fn new(path: Option<PathBuf>) -> JsonFileStore {
        JsonFileStore { path }
    }

    fn path(&self) -> Result<&Path, StoreError> {
        self.path.as_deref().ok_or(StoreError::NoPath)
    }

    fn try_load(&self) -> Result<u32, StoreError> {
        let path = self.path()?;
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_owned(),
                    source,
                })
            }
        };
        serde_json::from_slice::<HighScoreRecord>(&src)
            .map(|rec| rec.high)
            .map_err(|source| StoreError::Corrupt {
                path: path.to_owned(),
                source,
            })
    }

    fn try_save(&self, score: u32) -> Result<(), StoreError> {
        let path = self.path()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(|source| StoreError::Mkdir {
                dir: parent.to_owned(),
                source,
            })?;
        }
        let src = format!("{}\n", json!({ "high": score }));
        fs_err::write(path, src).map_err(|source| StoreError::Write {
            path: path.to_owned(),
            score,
            source,
        })
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> u32 {
        match self.try_load() {
            Ok(high) => high,
            Err(e) => {
                log::warn!("{:#}; treating high score as 0", anyhow::Error::new(e));
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        match self.try_save(score) {
            Ok(()) => log::info!("Saved new high score {score}"),
            Err(e) => log::warn!("{:#}", anyhow::Error::new(e)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
struct HighScoreRecord {
    #[serde(default)]
    high: u32,
}

/// Why the high score file could not be used
#[derive(Debug, Error)]
enum StoreError {
    #[error("no location for the high score file could be determined")]
    NoPath,
    #[error("failed to read high score from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("high score file {} does not hold a valid record", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to create directory {} for the high score file", dir.display())]
    Mkdir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write high score {score} to {}", path.display())]
    Write {
        path: PathBuf,
        score: u32,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
pub(crate) mod testing {
    use super::HighScoreStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// An in-memory store that records every save, for inspecting from tests
    /// after the store has been moved into a game
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub(crate) struct MemoryStore {
        high: u32,
        saves: Rc<RefCell<Vec<u32>>>,
    }

    impl MemoryStore {
        pub(crate) fn with_high(high: u32) -> MemoryStore {
            MemoryStore {
                high,
                saves: Rc::default(),
            }
        }

        /// Return a handle onto the list of saved scores
        pub(crate) fn saves(&self) -> Rc<RefCell<Vec<u32>>> {
            Rc::clone(&self.saves)
        }
    }

    impl HighScoreStore for MemoryStore {
        fn load(&mut self) -> u32 {
            self.high
        }

        fn save(&mut self, score: u32) {
            self.high = score;
            self.saves.borrow_mut().push(score);
        }
    }
}
