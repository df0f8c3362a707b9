//! Record Store
//!
//! Collection-scoped CRUD over JSON record files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Config, SyncStrategy};
use crate::error::{KvError, Result};
use crate::lock::LockRegistry;
use crate::logger::{Logger, TracingLogger};

use super::layout;

/// File-backed record store
///
/// ## Concurrency Model: one lock per collection
///
/// - Every operation takes the collection's lock from `locks` and holds it
///   until the operation returns, on success and on error alike
/// - Reads and writes to one collection are totally ordered
/// - Operations on different collections never block each other
/// - Scans (`read_all`, `keys`) hold the lock for the whole directory walk,
///   so one call never mixes state from before and after a mutation
///
/// All methods take `&self`; share the store across threads with `Arc`.
#[derive(Debug)]
pub struct RecordStore {
    /// Store configuration
    config: Config,

    /// Normalized root directory
    data_dir: PathBuf,

    /// Per-collection locks
    locks: LockRegistry,

    /// Injected logging capability
    logger: Arc<dyn Logger>,
}

impl RecordStore {
    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Normalize the data directory path
    /// 2. Create it (rwxr-xr-x) if missing, or reuse it if present
    /// 3. Ready to serve requests
    pub fn open(config: Config) -> Result<Self> {
        let logger: Arc<dyn Logger> = match &config.logger {
            Some(logger) => Arc::clone(logger),
            None => Arc::new(TracingLogger),
        };
        let data_dir = layout::normalize_path(&config.data_dir);

        match fs::metadata(&data_dir) {
            Ok(meta) if meta.is_dir() => {
                logger.debug(format_args!(
                    "Using existing database directory '{}'",
                    data_dir.display()
                ));
            }
            Ok(_) => {
                return Err(KvError::Initialization {
                    path: data_dir,
                    reason: "path exists and is not a directory".to_string(),
                });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                logger.info(format_args!(
                    "Creating database directory at '{}'",
                    data_dir.display()
                ));
                layout::create_dir(&data_dir).map_err(|e| KvError::Initialization {
                    path: data_dir.clone(),
                    reason: e.to_string(),
                })?;
            }
            Err(e) => {
                return Err(KvError::Initialization {
                    path: data_dir,
                    reason: e.to_string(),
                });
            }
        }

        Ok(Self {
            config,
            data_dir,
            locks: LockRegistry::new(),
            logger,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }

    // =========================================================================
    // Record Operations
    // =========================================================================

    /// Write a record, replacing any existing record with the same key
    ///
    /// Steps:
    /// 1. Acquire collection lock
    /// 2. Create collection directory if missing
    /// 3. Serialize payload (pretty JSON)
    /// 4. Write `.tmp`, rename over `{key}.json`
    pub fn write<T: Serialize + ?Sized>(&self, collection: &str, key: &str, value: &T) -> Result<()> {
        layout::validate_name("collection", collection)?;
        layout::validate_name("key", key)?;

        let lock = self.locks.lock_for(collection);
        let _guard = lock.lock();

        let sync = self.config.sync_strategy == SyncStrategy::EveryWrite;

        let dir = layout::collection_dir(&self.data_dir, collection);
        if layout::create_dir(&dir)? && sync {
            // New collection entry lives in the root directory
            layout::sync_dir(&self.data_dir)?;
        }

        let bytes = serde_json::to_vec_pretty(value).map_err(KvError::Serialization)?;

        layout::write_atomic(
            &layout::record_path(&dir, key),
            &layout::temp_path(&dir),
            &bytes,
            sync,
        )?;

        self.logger.info(format_args!(
            "Wrote record {} to collection {}",
            key, collection
        ));
        Ok(())
    }

    /// Read a single record
    ///
    /// Returns:
    /// - `Ok(value)` — record decoded
    /// - `Err(NotFound)` — no file for this key
    /// - `Err(Deserialization)` — file content is not a valid `T`
    pub fn read<T: DeserializeOwned>(&self, collection: &str, key: &str) -> Result<T> {
        layout::validate_name("collection", collection)?;
        layout::validate_name("key", key)?;

        let lock = self.locks.lock_for(collection);
        let _guard = lock.lock();

        self.read_unlocked(&layout::collection_dir(&self.data_dir, collection), collection, key)
    }

    /// Read every record in a collection
    ///
    /// A record that fails to load is logged and skipped. Order follows the
    /// directory listing and is not guaranteed.
    pub fn read_all<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        Ok(self
            .read_all_entries(collection)?
            .into_iter()
            .map(|(_, value)| value)
            .collect())
    }

    /// Read every record in a collection together with its key
    ///
    /// Same skip-and-log policy as [`RecordStore::read_all`]. Fails only if
    /// the collection directory cannot be listed.
    pub fn read_all_entries<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<(String, T)>> {
        layout::validate_name("collection", collection)?;

        let lock = self.locks.lock_for(collection);
        let _guard = lock.lock();

        let dir = layout::collection_dir(&self.data_dir, collection);
        let mut records = Vec::new();

        for file_name in self.record_file_names(&dir)? {
            let Some(key) = layout::key_from_file_name(&file_name) else {
                continue;
            };

            match self.read_unlocked(&dir, collection, key) {
                Ok(value) => records.push((key.to_string(), value)),
                Err(e) => {
                    self.logger.error(format_args!(
                        "Error reading record file {}: {}",
                        file_name, e
                    ));
                }
            }
        }

        Ok(records)
    }

    /// List the keys of a collection, sorted
    pub fn keys(&self, collection: &str) -> Result<Vec<String>> {
        layout::validate_name("collection", collection)?;

        let lock = self.locks.lock_for(collection);
        let _guard = lock.lock();

        let dir = layout::collection_dir(&self.data_dir, collection);
        let mut keys: Vec<String> = self
            .record_file_names(&dir)?
            .iter()
            .filter_map(|name| layout::key_from_file_name(name))
            .map(str::to_string)
            .collect();

        keys.sort();
        Ok(keys)
    }

    /// Delete a record
    ///
    /// Returns `Err(NotFound)` if the key has no file.
    pub fn delete(&self, collection: &str, key: &str) -> Result<()> {
        layout::validate_name("collection", collection)?;
        layout::validate_name("key", key)?;

        let lock = self.locks.lock_for(collection);
        let _guard = lock.lock();

        let path = layout::record_path(&layout::collection_dir(&self.data_dir, collection), key);
        fs::remove_file(&path).map_err(|e| Self::not_found_or_io(e, collection, key))?;

        self.logger.info(format_args!(
            "Deleted record {} from collection {}",
            key, collection
        ));
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the normalized data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the per-collection lock registry
    pub fn locks(&self) -> &LockRegistry {
        &self.locks
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Load and decode one record (caller holds the collection lock)
    fn read_unlocked<T: DeserializeOwned>(&self, dir: &Path, collection: &str, key: &str) -> Result<T> {
        let bytes = fs::read(layout::record_path(dir, key))
            .map_err(|e| Self::not_found_or_io(e, collection, key))?;

        serde_json::from_slice(&bytes).map_err(|source| KvError::Deserialization {
            collection: collection.to_string(),
            key: key.to_string(),
            source,
        })
    }

    /// Names of record files directly inside `dir`
    ///
    /// Symlinks are followed. A `*.json` entry that is not a readable
    /// regular file is logged at error level and skipped.
    fn record_file_names(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;

            // Keys are UTF-8; anything else was not written by us
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if layout::key_from_file_name(&name).is_none() {
                continue;
            }

            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => names.push(name),
                Ok(_) => {
                    self.logger.error(format_args!(
                        "Error reading record file {}: not a regular file",
                        name
                    ));
                }
                Err(e) => {
                    self.logger.error(format_args!(
                        "Error reading record file {}: {}",
                        name, e
                    ));
                }
            }
        }

        Ok(names)
    }

    fn not_found_or_io(e: io::Error, collection: &str, key: &str) -> KvError {
        if e.kind() == io::ErrorKind::NotFound {
            KvError::NotFound {
                collection: collection.to_string(),
                key: key.to_string(),
            }
        } else {
            KvError::Io(e)
        }
    }
}
