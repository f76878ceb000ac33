//! Filesystem helpers.
//!
//! Thin wrappers over `std::fs`, `tempfile` and `walkdir`. Platform errors come
//! back unchanged inside [`Error::Io`]. New files get mode [`FILE_MODE`] and new
//! directories [`DIR_MODE`] on Unix.
//!
//! Content digests are SHA-256 ([`file_sha256`]), not MD5. Callers comparing
//! against stored MD5 sums need to rehash.

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

pub const FILE_MODE: u32 = 0o644;
pub const DIR_MODE: u32 = 0o755;

pub(crate) fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

fn write_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);
    options
}

/// Creates a temporary directory under `dir` (or the system temp dir).
///
/// The returned guard holds an absolute path and removes the directory and its
/// contents when dropped.
///
/// # Examples
///
/// ```rust
/// use xutils::fs::temp_dir;
///
/// let tmp = temp_dir("build-", None).unwrap();
/// assert!(tmp.path().is_absolute());
/// assert!(tmp.path().is_dir());
/// ```
pub fn temp_dir(prefix: &str, dir: Option<&Path>) -> Result<TempDir> {
    let root = match dir {
        Some(dir) => absolute(dir)?,
        None => std::env::temp_dir(),
    };
    Ok(tempfile::Builder::new().prefix(prefix).tempdir_in(root)?)
}

/// Creates a temporary file under `dir` (or the system temp dir) and keeps it.
///
/// The returned path is absolute. The caller is responsible for removing the file.
pub fn temp_file(prefix: &str, dir: Option<&Path>) -> Result<(File, PathBuf)> {
    let root = match dir {
        Some(dir) => absolute(dir)?,
        None => std::env::temp_dir(),
    };
    let file = tempfile::Builder::new().prefix(prefix).tempfile_in(root)?;
    file.keep().map_err(|e| Error::Io(e.error))
}

/// Lowercase extension with its leading dot (`"foo.PNG"` gives `".png"`), or an
/// empty string.
#[must_use]
pub fn file_ext<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Size of the file in bytes, or 0 when it cannot be stat'ed.
#[must_use]
pub fn file_size<P: AsRef<Path>>(path: P) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// SHA-256 of the file contents as lowercase hex.
pub fn file_sha256<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Checks that files can be created in `dir` by writing and removing a probe.
pub fn is_dir_writable<P: AsRef<Path>>(dir: P) -> Result<()> {
    let probe = dir.as_ref().join(".tmp");
    write_options().truncate(true).open(&probe)?;
    fs::remove_file(&probe)?;
    Ok(())
}

#[must_use]
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).map(|m| !m.is_dir()).unwrap_or(false)
}

#[must_use]
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Names of the entries directly inside `dir`, sorted.
pub fn read_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}

/// Every file below `dir`, as paths relative to `dir`, sorted.
///
/// # Examples
///
/// ```rust
/// use std::path::PathBuf;
/// use xutils::fs::{read_dir_all, temp_dir, write_file};
///
/// let tmp = temp_dir("walk-", None).unwrap();
/// write_file(tmp.path().join("b.txt"), b"b").unwrap();
/// write_file(tmp.path().join("sub/a.txt"), b"a").unwrap();
///
/// let files = read_dir_all(tmp.path()).unwrap();
/// assert_eq!(files, vec![PathBuf::from("b.txt"), PathBuf::from("sub/a.txt")]);
/// ```
pub fn read_dir_all<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = absolute(dir.as_ref())?;
    let mut files = Vec::new();
    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(&dir) {
            files.push(rel.to_path_buf());
        }
    }
    Ok(files)
}

/// `mkdir -p` with [`DIR_MODE`].
pub fn make_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DIR_MODE);
    builder.create(path)?;
    Ok(())
}

/// Copies the tree under `src` into `dst`, overwriting existing files.
pub fn copy_dir<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<()> {
    let src = absolute(src.as_ref())?;
    let dst = absolute(dst.as_ref())?;
    if !is_dir(&src) {
        return Err(Error::NotADirectory(src));
    }
    for entry in WalkDir::new(&src) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(&src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            make_dir_all(&target)?;
        } else {
            let mut reader = File::open(entry.path())?;
            let mut writer = write_options().truncate(true).open(&target)?;
            io::copy(&mut reader, &mut writer)?;
        }
    }
    Ok(())
}

/// Destination for copy/move: a directory receives the file under its own name.
fn resolve_target(src: &Path, dst: &Path) -> Result<PathBuf> {
    if is_dir(src) {
        return Err(Error::IsADirectory(src.to_path_buf()));
    }
    if is_dir(dst) {
        if let Some(name) = src.file_name() {
            return Ok(dst.join(name));
        }
    }
    Ok(dst.to_path_buf())
}

/// Copies a file, overwriting the target and copying permissions.
///
/// When `dst` is a directory the copy keeps the source's file name. Returns the
/// path written.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<PathBuf> {
    let src = src.as_ref();
    let target = resolve_target(src, dst.as_ref())?;
    fs::copy(src, &target)?;
    Ok(target)
}

/// Renames a file; a directory `dst` receives it under its own name.
pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<PathBuf> {
    let src = src.as_ref();
    let target = resolve_target(src, dst.as_ref())?;
    fs::rename(src, &target)?;
    Ok(target)
}

/// Appends `data`, creating the file if needed.
pub fn append_file<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let mut file = write_options().append(true).open(path)?;
    file.write_all(data)?;
    Ok(())
}

/// Writes `data`, creating missing parent directories.
pub fn write_file<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !is_dir(parent) {
            make_dir_all(parent)?;
        }
    }
    let mut file = write_options().truncate(true).open(path)?;
    file.write_all(data)?;
    Ok(())
}

/// Removes everything under `dir` except the files in `keep`.
///
/// Directories left empty are removed. With nothing to keep, `dir` itself is
/// removed. Failures below `dir` are logged and skipped.
///
/// # Examples
///
/// ```rust
/// use xutils::fs::{clean_dir, is_file, temp_dir, write_file};
///
/// let tmp = temp_dir("clean-", None).unwrap();
/// let keep = tmp.path().join("keep.txt");
/// write_file(&keep, b"k").unwrap();
/// write_file(tmp.path().join("old/junk.txt"), b"j").unwrap();
///
/// clean_dir(tmp.path(), &[keep.clone()]).unwrap();
/// assert!(is_file(&keep));
/// assert!(!tmp.path().join("old").exists());
/// ```
pub fn clean_dir<P: AsRef<Path>>(dir: P, keep: &[PathBuf]) -> Result<()> {
    let dir = dir.as_ref();
    if !is_dir(dir) {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if keep.is_empty() {
        fs::remove_dir_all(dir)?;
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_dir(&path) {
            if let Err(err) = clean_dir(&path, keep) {
                log::warn!("clean_dir: {}: {}", path.display(), err);
            }
            let empty = fs::read_dir(&path)
                .map(|mut entries| entries.next().is_none())
                .unwrap_or(false);
            if empty {
                if let Err(err) = fs::remove_dir(&path) {
                    log::warn!("clean_dir: remove {}: {}", path.display(), err);
                }
            }
        } else if !keep.contains(&path) {
            if let Err(err) = fs::remove_file(&path) {
                log::warn!("clean_dir: remove {}: {}", path.display(), err);
            }
        }
    }
    Ok(())
}
