//! Read-only filesystem queries used by detection.
//!
//! Detection never touches `std::fs` directly; it goes through [`FileSystem`]
//! so the same walk can run against the real disk or an in-memory tree.

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashMap;
use std::io;

/// Filesystem capability needed by the detector
pub trait FileSystem {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Utf8Path) -> bool;

    /// Read a file as UTF-8 text
    fn read_text(&self, path: &Utf8Path) -> io::Result<String>;

    /// Absolute, symlink-free form of `path`
    fn real_path(&self, path: &Utf8Path) -> io::Result<Utf8PathBuf>;

    /// Parent directory; the root is its own parent
    fn parent_of<'a>(&self, path: &'a Utf8Path) -> &'a Utf8Path {
        path.parent().unwrap_or(path)
    }
}

/// [`FileSystem`] backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Utf8Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Utf8Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn real_path(&self, path: &Utf8Path) -> io::Result<Utf8PathBuf> {
        path.canonicalize_utf8()
    }
}

/// In-memory [`FileSystem`] holding a fixed set of files
///
/// Directories exist implicitly as ancestors of registered files. Paths are
/// taken as already canonical.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: HashMap<Utf8PathBuf, String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given contents
    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Add an empty file
    pub fn touch(self, path: impl Into<Utf8PathBuf>) -> Self {
        self.with_file(path, "")
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Utf8Path) -> bool {
        self.files.contains_key(path) || self.files.keys().any(|file| file.starts_with(path))
    }

    fn read_text(&self, path: &Utf8Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))
    }

    fn real_path(&self, path: &Utf8Path) -> io::Result<Utf8PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("relative path: {path}"),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parent_of_stops_at_root() {
        let fs = MemoryFileSystem::new();
        assert_eq!(fs.parent_of(Utf8Path::new("/a/b")), Utf8Path::new("/a"));
        assert_eq!(fs.parent_of(Utf8Path::new("/")), Utf8Path::new("/"));
    }

    #[test]
    fn test_memory_exists_and_read() {
        let fs = MemoryFileSystem::new().with_file("/project/package.json", "{}");

        assert!(fs.exists(Utf8Path::new("/project/package.json")));
        assert!(fs.exists(Utf8Path::new("/project")));
        assert!(!fs.exists(Utf8Path::new("/project/yarn.lock")));
        assert_eq!(
            fs.read_text(Utf8Path::new("/project/package.json")).unwrap(),
            "{}"
        );
        assert_eq!(
            fs.read_text(Utf8Path::new("/missing")).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_os_real_path_resolves_dot_segments() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        std::fs::create_dir(path.join("sub")).unwrap();

        let fs = OsFileSystem;
        let resolved = fs.real_path(&path.join("sub").join("..")).unwrap();
        assert_eq!(resolved, fs.real_path(&path).unwrap());
        assert!(fs.real_path(&path.join("missing")).is_err());
    }
}
