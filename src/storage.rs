//! Storage layer for task-cli
//!
//! The whole collection lives in one JSON document, read in full at the
//! start of a command and written back in full at the end of a mutating
//! one. The location is always a value held by the store, never a global.
//!
//! ```text
//! tasks.json                    # JSON array of task records
//! ```
//!
//! There is no locking. Two invocations that overlap between load and save
//! race, and the last writer wins.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::repository::TaskList;
use crate::task::Task;

/// Default storage file, relative to the working directory
pub const DEFAULT_FILE: &str = "tasks.json";

/// Where a task collection is persisted between invocations.
pub trait Store {
    /// Read the full collection, sorted by id.
    fn load(&self) -> Result<TaskList>;

    /// Replace the persisted collection with `tasks`.
    fn save(&self, tasks: &TaskList) -> Result<()>;
}

/// Decode a storage document. Blank documents are an empty collection.
pub fn decode(origin: &Path, content: &[u8]) -> Result<TaskList> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(TaskList::new());
    }

    let tasks: Vec<Task> = serde_json::from_slice(content).map_err(|source| Error::Decode {
        path: origin.to_path_buf(),
        source,
    })?;

    TaskList::from_tasks(tasks).map_err(|id| Error::DuplicateId {
        path: origin.to_path_buf(),
        id,
    })
}

/// Encode a collection as a storage document.
pub fn encode(tasks: &TaskList) -> Result<String> {
    let mut json = serde_json::to_string_pretty(tasks.as_slice())?;
    json.push('\n');
    Ok(json)
}

/// Store backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<TaskList> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no storage file; starting empty");
                return Ok(TaskList::new());
            }
            Err(err) => return Err(err.into()),
        };

        let tasks = decode(&self.path, &content)?;
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Write to a temp file next to the target, then rename it into place.
    ///
    /// Readers see either the old or the new document, never a partial one.
    fn save(&self, tasks: &TaskList) -> Result<()> {
        let json = encode(tasks)?;
        let dir = self.parent_dir();
        fs::create_dir_all(&dir)?;

        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(json.as_bytes())?;
        if let Ok(metadata) = fs::metadata(&self.path) {
            file.as_file().set_permissions(metadata.permissions())?;
        }
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| err.error)?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

/// Store that keeps the encoded document in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(Some(document.into())),
        }
    }

    /// The last saved document, if any
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<TaskList> {
        match self.document.borrow().as_deref() {
            Some(document) => decode(Path::new("<memory>"), document.as_bytes()),
            None => Ok(TaskList::new()),
        }
    }

    fn save(&self, tasks: &TaskList) -> Result<()> {
        let json = encode(tasks)?;
        *self.document.borrow_mut() = Some(json);
        Ok(())
    }
}
