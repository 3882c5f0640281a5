use crate::EntryStore;
use crate::error::{StoreError, StoreErrorExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Version written to every document; loading any other version fails.
pub const DOCUMENT_VERSION: u32 = 1;

const TMP_MARKER: &str = ".xrkittmp.";

#[derive(Serialize)]
struct DocumentRef<'a, E> {
    version: u32,
    entries: &'a [E],
}

#[derive(Deserialize)]
struct Document<E> {
    version: u32,
    #[serde(default = "Vec::new")]
    entries: Vec<E>,
}

/// [`EntryStore`] backed by one JSON document on disk.
///
/// Cheap to clone; clones share the temp-name counter.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    tmp_counter: Arc<AtomicU64>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), tmp_counter: Arc::new(AtomicU64::new(0)) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Removes temp files left next to the document by an interrupted save.
    /// Returns how many were removed.
    pub fn purge_tmp(&self) -> usize {
        let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return 0;
        };
        let Some(prefix) =
            self.path.file_name().and_then(|n| n.to_str()).map(|n| format!("{n}{TMP_MARKER}"))
        else {
            return 0;
        };

        let Ok(read_dir) = fs::read_dir(dir) else { return 0 };
        read_dir
            .flatten()
            .filter(|entry| {
                entry.file_name().to_str().is_some_and(|name| name.starts_with(&prefix))
            })
            .filter(|entry| match fs::remove_file(entry.path()) {
                Ok(()) => true,
                Err(err) => {
                    warn!(
                        path = %entry.path().display(),
                        error = %err,
                        "Failed to remove temp file"
                    );
                    false
                },
            })
            .count()
    }

    fn write_atomic(&self, data: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Failed to create directory for {}", self.path.display()))?;
        }

        let temp = unique_tmp_path(&self.path, &self.tmp_counter);
        let mut file = fs::OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&temp)
            .context(format!("Temp creation failed: {}", temp.display()))?;
        let written = file
            .write_all(data)
            .context("Write failed")
            .and_then(|()| file.sync_all().context("Hardware sync failed"));
        drop(file);
        discard_on_error(&temp, written)?;

        if let Err(err) = fs::rename(&temp, &self.path) {
            if err.kind() == ErrorKind::AlreadyExists {
                fs::remove_file(&self.path).context(format!(
                    "Failed to replace existing file: {}",
                    self.path.display()
                ))?;
                fs::rename(&temp, &self.path).context(format!(
                    "Atomic swap failed: {} -> {}",
                    temp.display(),
                    self.path.display()
                ))?;
            } else {
                let _ = fs::remove_file(&temp);
                return Err(StoreError::Io {
                    source: err,
                    context: Some(
                        format!("Atomic swap failed: {} -> {}", temp.display(), self.path.display())
                            .into(),
                    ),
                });
            }
        }

        Ok(())
    }
}

impl<E> EntryStore<E> for JsonFileStore
where
    E: Serialize + DeserializeOwned,
{
    fn load_entries(&self) -> Result<Vec<E>, StoreError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::FileNotFound {
                    message: self.path.display().to_string().into(),
                    context: None,
                });
            },
            Err(err) => {
                return Err(StoreError::Io {
                    source: err,
                    context: Some(format!("Read failed: {}", self.path.display()).into()),
                });
            },
        };

        let document: Document<E> = serde_json::from_slice(&raw)
            .context(format!("Parsing {}", self.path.display()))?;

        if document.version != DOCUMENT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                message: format!("found {}, expected {DOCUMENT_VERSION}", document.version).into(),
                context: Some(self.path.display().to_string().into()),
            });
        }

        debug!(path = %self.path.display(), count = document.entries.len(), "Entries loaded");
        Ok(document.entries)
    }

    fn save_entries(&self, entries: &[E]) -> Result<(), StoreError> {
        let document = DocumentRef { version: DOCUMENT_VERSION, entries };
        let mut data = serde_json::to_vec_pretty(&document).context("Serializing entries")?;
        data.push(b'\n');

        self.write_atomic(&data)?;
        debug!(path = %self.path.display(), count = entries.len(), "Entries saved atomically");
        Ok(())
    }
}

fn unique_tmp_path(target: &Path, counter: &AtomicU64) -> PathBuf {
    let counter = counter.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("profile");
    target.with_file_name(format!("{file_name}{TMP_MARKER}{}.{counter}", std::process::id()))
}

/// Removes the temp file when filling it failed, so no partial document is left behind.
fn discard_on_error<T>(temp: &Path, result: Result<T, StoreError>) -> Result<T, StoreError> {
    if result.is_err()
        && let Err(err) = fs::remove_file(temp)
    {
        warn!(path = %temp.display(), error = %err, "Failed to remove temp file");
    }
    result
}
