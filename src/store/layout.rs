//! Path layout and file helpers for the record store.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use crate::error::{KvError, Result};

/// Suffix of every record file
pub const RECORD_EXTENSION: &str = ".json";

/// Name of the in-flight write file inside a collection directory
///
/// One per collection is enough since writers hold the collection lock.
/// Shorter than any record name, so a key that fits as `{key}.json` also
/// fits through the temp file.
pub const TEMP_FILE_NAME: &str = ".tmp";

/// Lexically clean a path: drop `.` and fold `..` into its parent.
///
/// No filesystem access happens here, so symlinks are not resolved.
/// `a/./b/../c` → `a/c`, `/../x` → `/x`, `` → `.`
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Reject names that could escape their directory.
///
/// `kind` is "collection" or "key", used only for the error message.
pub(crate) fn validate_name(kind: &str, name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name == "." || name == ".." {
        "must not be a relative path component"
    } else if name.contains(['/', '\\']) {
        "must not contain path separators"
    } else if name.contains('\0') {
        "must not contain NUL bytes"
    } else {
        return Ok(());
    };

    Err(KvError::InvalidName(format!("{} '{}' {}", kind, name.escape_debug(), reason)))
}

/// `{data_dir}/{collection}`
pub(crate) fn collection_dir(data_dir: &Path, collection: &str) -> PathBuf {
    data_dir.join(collection)
}

/// `{collection_dir}/{key}.json`
pub(crate) fn record_path(collection_dir: &Path, key: &str) -> PathBuf {
    collection_dir.join(format!("{}{}", key, RECORD_EXTENSION))
}

/// `{collection_dir}/.tmp`
pub(crate) fn temp_path(collection_dir: &Path) -> PathBuf {
    collection_dir.join(TEMP_FILE_NAME)
}

/// Recover a record key from a file name
/// "alice.json" → Some("alice"), ".tmp" → None, ".json" → None
pub(crate) fn key_from_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(RECORD_EXTENSION)
        .filter(|key| !key.is_empty())
}

/// Create a directory (and parents) with rwxr-xr-x on Unix
///
/// Returns true if `path` did not exist before the call.
pub(crate) fn create_dir(path: &Path) -> io::Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(path)?;
    Ok(true)
}

/// Replace `target` with `bytes` via a temp file and rename
///
/// On failure the temp file is removed and `target` is left untouched.
pub(crate) fn write_atomic(target: &Path, temp: &Path, bytes: &[u8], sync: bool) -> io::Result<()> {
    let result = write_and_rename(target, temp, bytes, sync);
    if result.is_err() {
        let _ = fs::remove_file(temp);
    }
    result
}

fn write_and_rename(target: &Path, temp: &Path, bytes: &[u8], sync: bool) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(temp)?;

    file.write_all(bytes)?;
    if sync {
        file.sync_all()?;
    }
    drop(file);

    fs::rename(temp, target)?;

    if sync {
        if let Some(parent) = target.parent() {
            sync_dir(parent)?;
        }
    }
    Ok(())
}

/// Make entry creation/renames inside `dir` durable
#[cfg(unix)]
pub(crate) fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
pub(crate) fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
