//! Zip packaging: archive a directory, extract an archive, walk its entries.
//!
//! ## Examples
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use xutils::archive::{zip_dir, zip_walk};
//! use xutils::fs::{temp_dir, write_file};
//!
//! let tmp = temp_dir("zip-doc-", None).unwrap();
//! let site = tmp.path().join("site");
//! write_file(site.join("index.html"), b"<h1>hi</h1>").unwrap();
//!
//! let dest = tmp.path().join("site.zip");
//! zip_dir(&site, &dest, true).unwrap();
//!
//! let mut names = Vec::new();
//! zip_walk(&dest, |entry, _| {
//!     names.push(entry.name.clone());
//!     Ok(ControlFlow::Continue(()))
//! })
//! .unwrap();
//! assert_eq!(names, vec!["site/", "site/index.html"]);
//! ```

use crate::error::{Error, Result};
use crate::fs::{absolute, is_dir, make_dir_all, FILE_MODE};
use std::fs::{File, Metadata, OpenOptions};
use std::io::{self, Read, Seek};
use std::ops::ControlFlow;
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// What [`zip_walk`] reports about each entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZipEntry {
    /// Name as stored in the archive; directories end with `/`.
    pub name: String,
    pub size: u64,
    pub compressed_size: u64,
    pub is_dir: bool,
    pub unix_mode: Option<u32>,
}

#[cfg(unix)]
fn permissions(metadata: &Metadata) -> u32 {
    metadata.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permissions(metadata: &Metadata) -> u32 {
    if metadata.is_dir() {
        crate::fs::DIR_MODE
    } else {
        FILE_MODE
    }
}

/// Packs everything under `dir` into a new zip file at `dest`.
///
/// Files are deflated. With `wrap`, entries live under a top-level folder
/// named after `dir` (`site/index.html`); without it they sit at the archive
/// root (`index.html`).
///
/// # Errors
///
/// [`Error::NotADirectory`] when `dir` is not a directory, otherwise the
/// underlying I/O or zip error.
pub fn zip_dir<P: AsRef<Path>, Q: AsRef<Path>>(dir: P, dest: Q, wrap: bool) -> Result<()> {
    let dir = absolute(dir.as_ref())?;
    if !is_dir(&dir) {
        return Err(Error::NotADirectory(dir));
    }
    let base = if wrap {
        dir.file_name().map(|name| name.to_string_lossy().into_owned())
    } else {
        None
    };

    let mut zip = ZipWriter::new(File::create(dest.as_ref())?);
    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(&dir) else {
            continue;
        };
        let rel = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let name = match (&base, rel.is_empty()) {
            (Some(base), true) => base.clone(),
            (Some(base), false) => format!("{}/{}", base, rel),
            (None, true) => continue,
            (None, false) => rel,
        };

        let options = SimpleFileOptions::default().unix_permissions(permissions(&entry.metadata()?));
        if entry.file_type().is_dir() {
            zip.add_directory(format!("{}/", name), options)?;
        } else {
            zip.start_file(name, options.compression_method(CompressionMethod::Deflated))?;
            let mut reader = File::open(entry.path())?;
            io::copy(&mut reader, &mut zip)?;
        }
    }
    zip.finish()?;
    Ok(())
}

/// Extracts the zip file at `path` into `dir`.
pub fn unzip<P: AsRef<Path>, Q: AsRef<Path>>(path: P, dir: Q) -> Result<()> {
    unzip_reader(File::open(path)?, dir)
}

/// Extracts a zip archive read from `reader` into `dir`.
///
/// Directories are created as needed. `.DS_Store` files and entries whose
/// names would land outside `dir` are skipped. Recorded Unix modes are
/// restored.
pub fn unzip_reader<R: Read + Seek, P: AsRef<Path>>(reader: R, dir: P) -> Result<()> {
    let dir = dir.as_ref();
    let mut archive = ZipArchive::new(reader)?;
    make_dir_all(dir)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let Some(rel) = entry.enclosed_name() else {
            log::warn!("unzip: skipping entry outside target: {:?}", entry.name());
            continue;
        };
        let target = dir.join(&rel);
        if entry.is_dir() {
            make_dir_all(&target)?;
            continue;
        }
        if rel.file_name().is_some_and(|name| name == ".DS_Store") {
            log::debug!("unzip: skipping {:?}", entry.name());
            continue;
        }
        if let Some(parent) = target.parent() {
            if !is_dir(parent) {
                make_dir_all(parent)?;
            }
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(
            entry
                .unix_mode()
                .map(|mode| mode & 0o777)
                .filter(|mode| *mode != 0)
                .unwrap_or(FILE_MODE),
        );
        let mut out = options.open(&target)?;
        io::copy(&mut entry, &mut out)?;
    }
    Ok(())
}

/// Calls `f` for each entry of the zip file at `path`, in archive order.
///
/// `f` gets the entry's metadata and a reader over its decompressed contents.
/// Returning `Ok(ControlFlow::Break(()))` stops the walk successfully; an
/// error stops it and is returned.
pub fn zip_walk<P, F>(path: P, f: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&ZipEntry, &mut dyn Read) -> Result<ControlFlow<()>>,
{
    zip_walk_reader(File::open(path)?, f)
}

/// [`zip_walk`] over an archive read from `reader`.
pub fn zip_walk_reader<R, F>(reader: R, mut f: F) -> Result<()>
where
    R: Read + Seek,
    F: FnMut(&ZipEntry, &mut dyn Read) -> Result<ControlFlow<()>>,
{
    let mut archive = ZipArchive::new(reader)?;
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let entry = ZipEntry {
            name: file.name().to_string(),
            size: file.size(),
            compressed_size: file.compressed_size(),
            is_dir: file.is_dir(),
            unix_mode: file.unix_mode(),
        };
        if f(&entry, &mut file)?.is_break() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{read_dir_all, temp_dir, write_file};
    use std::io::{Cursor, Write};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, PathBuf) {
        let tmp = temp_dir("xutils-zip-", None).unwrap();
        let files = tmp.path().join("files");
        write_file(files.join("a.txt"), b"alpha").unwrap();
        write_file(files.join("sub/b.txt"), b"bravo").unwrap();
        (tmp, files)
    }

    fn names(path: &Path) -> Vec<String> {
        let mut names = Vec::new();
        zip_walk(path, |entry, _| {
            names.push(entry.name.clone());
            Ok(ControlFlow::Continue(()))
        })
        .unwrap();
        names
    }

    fn archive_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            zip.start_file(name.to_string(), SimpleFileOptions::default())
                .unwrap();
            zip.write_all(data.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_zip_dir_wrapped() {
        let (tmp, files) = fixture();
        let dest = tmp.path().join("wrapped.zip");
        zip_dir(&files, &dest, true).unwrap();
        assert_eq!(
            names(&dest),
            vec!["files/", "files/a.txt", "files/sub/", "files/sub/b.txt"]
        );
    }

    #[test]
    fn test_zip_dir_unwrapped() {
        let (tmp, files) = fixture();
        let dest = tmp.path().join("flat.zip");
        zip_dir(&files, &dest, false).unwrap();
        assert_eq!(names(&dest), vec!["a.txt", "sub/", "sub/b.txt"]);
    }

    #[test]
    fn test_zip_dir_rejects_file() {
        let (tmp, files) = fixture();
        let err = zip_dir(files.join("a.txt"), tmp.path().join("x.zip"), true).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }

    #[test]
    fn test_zip_then_unzip() {
        let (tmp, files) = fixture();
        let dest = tmp.path().join("round.zip");
        zip_dir(&files, &dest, false).unwrap();

        let out = tmp.path().join("out");
        unzip(&dest, &out).unwrap();
        assert_eq!(
            read_dir_all(&out).unwrap(),
            vec![PathBuf::from("a.txt"), PathBuf::from("sub/b.txt")]
        );
        assert_eq!(std::fs::read(out.join("sub/b.txt")).unwrap(), b"bravo");
    }

    #[test]
    fn test_unzip_skips_ds_store_and_escapes() {
        let tmp = temp_dir("xutils-zip-", None).unwrap();
        let bytes = archive_bytes(&[
            ("keep/me.txt", "ok"),
            ("keep/.DS_Store", "junk"),
            ("../evil.txt", "nope"),
        ]);
        let out = tmp.path().join("out");
        unzip_reader(Cursor::new(bytes), &out).unwrap();

        assert_eq!(read_dir_all(&out).unwrap(), vec![PathBuf::from("keep/me.txt")]);
        assert!(!tmp.path().join("evil.txt").exists());
    }

    #[test]
    fn test_walk_reads_contents_and_stops() {
        let bytes = archive_bytes(&[("one.txt", "1"), ("two.txt", "22"), ("three.txt", "333")]);
        let mut seen = Vec::new();
        zip_walk_reader(Cursor::new(bytes), |entry, reader| {
            let mut body = String::new();
            reader.read_to_string(&mut body)?;
            assert_eq!(entry.size, body.len() as u64);
            seen.push(body);
            if entry.name == "two.txt" {
                return Ok(ControlFlow::Break(()));
            }
            Ok(ControlFlow::Continue(()))
        })
        .unwrap();
        assert_eq!(seen, vec!["1", "22"]);
    }

    #[test]
    fn test_walk_propagates_callback_error() {
        let bytes = archive_bytes(&[("one.txt", "1"), ("two.txt", "2")]);
        let mut calls = 0;
        let result = zip_walk_reader(Cursor::new(bytes), |_, _| {
            calls += 1;
            Err(Error::NotADirectory(PathBuf::from("stop")))
        });
        assert!(matches!(result, Err(Error::NotADirectory(_))));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_walk_rejects_non_zip() {
        let result = zip_walk_reader(Cursor::new(b"not a zip".to_vec()), |_, _| {
            Ok(ControlFlow::Continue(()))
        });
        assert!(matches!(result, Err(Error::Zip(_))));
    }
}
