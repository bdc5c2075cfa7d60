//! Content source
//!
//! File access for the host editor: listing a directory, reading and
//! writing text files. The highlighter never touches files itself; the host
//! reads a document through a [`ContentSource`] and derives its language
//! from the file name.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{HighlightError, Result};
use crate::language::LanguageId;

/// One directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl FileItem {
    /// Text after the last `.`, empty if there is none
    pub fn extension(&self) -> &str {
        self.name.rsplit_once('.').map_or("", |(_, ext)| ext)
    }

    /// Human-readable kind, for listings
    pub fn kind_name(&self) -> &'static str {
        if self.is_dir {
            "Directory"
        } else {
            LanguageId::kind_name(self.extension())
        }
    }

    /// Language to highlight this file with
    pub fn language(&self) -> LanguageId {
        if self.is_dir {
            LanguageId::Unknown
        } else {
            LanguageId::parse(self.extension())
        }
    }
}

/// Storage the editor reads documents from
pub trait ContentSource {
    /// Entries of a directory, directories first, then by name
    fn list(&self, dir: &Path) -> Result<Vec<FileItem>>;

    fn read(&self, path: &Path) -> Result<String>;

    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Create an empty file; fails if it already exists
    fn create_file(&self, dir: &Path, name: &str) -> Result<PathBuf>;

    fn create_dir(&self, dir: &Path, name: &str) -> Result<PathBuf>;

    /// Delete a file, or a directory with its contents
    fn delete(&self, path: &Path) -> Result<()>;
}

/// [`ContentSource`] over the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsContentSource;

fn child(dir: &Path, name: &str) -> Result<PathBuf> {
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(HighlightError::Message(format!("invalid file name: {:?}", name)));
    }
    Ok(dir.join(name))
}

fn by_kind_then_name(a: &FileItem, b: &FileItem) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

impl ContentSource for FsContentSource {
    fn list(&self, dir: &Path) -> Result<Vec<FileItem>> {
        let mut items = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            items.push(FileItem {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
                is_dir: metadata.is_dir(),
                size: metadata.len(),
                modified: metadata.modified().ok(),
            });
        }
        items.sort_by(by_kind_then_name);
        Ok(items)
    }

    fn read(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents)?;
        tracing::debug!("wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }

    fn create_file(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        let path = child(dir, name)?;
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)?;
        Ok(path)
    }

    fn create_dir(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        let path = child(dir, name)?;
        fs::create_dir(&path)?;
        Ok(path)
    }

    fn delete(&self, path: &Path) -> Result<()> {
        if path.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_item_language() {
        let item = FileItem {
            name: "index.HTM".to_string(),
            path: PathBuf::from("index.HTM"),
            is_dir: false,
            size: 0,
            modified: None,
        };
        assert_eq!(item.extension(), "HTM");
        assert_eq!(item.language(), LanguageId::Html);

        let dir = FileItem {
            name: "lib.js".to_string(),
            is_dir: true,
            ..item.clone()
        };
        assert_eq!(dir.language(), LanguageId::Unknown);

        let bare = FileItem {
            name: "Makefile".to_string(),
            ..item
        };
        assert_eq!(bare.extension(), "");

        let json = FileItem {
            name: "package.json".to_string(),
            ..bare.clone()
        };
        assert_eq!(json.kind_name(), "JSON");
        assert_eq!(json.language(), LanguageId::Unknown);
        assert_eq!(bare.kind_name(), "Plain Text");
    }

    #[test]
    fn test_list_sorts_dirs_first() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FsContentSource;
        source.create_file(tmp.path(), "b.py").unwrap();
        source.create_file(tmp.path(), "A.css").unwrap();
        source.create_dir(tmp.path(), "zeta").unwrap();

        let names: Vec<_> = source
            .list(tmp.path())
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["zeta", "A.css", "b.py"]);
    }

    #[test]
    fn test_read_write_delete() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FsContentSource;
        let path = source.create_file(tmp.path(), "main.java").unwrap();

        source.write(&path, "class A {}").unwrap();
        assert_eq!(source.read(&path).unwrap(), "class A {}");
        assert!(source.create_file(tmp.path(), "main.java").is_err());

        source.delete(&path).unwrap();
        assert!(matches!(source.read(&path), Err(HighlightError::Io(_))));
    }

    #[test]
    fn test_rejects_path_like_names() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FsContentSource;
        assert!(source.create_file(tmp.path(), "../escape.txt").is_err());
        assert!(source.create_dir(tmp.path(), "").is_err());
    }
}
