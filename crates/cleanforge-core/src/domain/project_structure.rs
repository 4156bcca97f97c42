//! Project structure produced by the bootstrap command.
//!
//! A value describing every file and directory `new` will create, validated
//! before anything touches disk. Paths are relative to the project root; a
//! non-destructive flag models the original behavior of leaving an existing
//! `package.json` alone.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Final project structure ready for materialization.
///
/// No business logic, only data plus structural validation.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
            overwrite: true,
        }));
    }

    /// Add a file that is skipped silently when the target already exists.
    pub fn add_file_if_absent(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
            overwrite: false,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(path.into()));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyStructure);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = match entry {
                FsEntry::File(f) => &f.path,
                FsEntry::Directory(d) => d,
            };

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
    /// `false` means "create only if absent" (non-destructive mode).
    pub overwrite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_counts_entries() {
        let structure = ProjectStructure::new("/tmp/app")
            .with_directory("src/domain/models")
            .with_file("package.json", "{}".into());

        assert_eq!(structure.entry_count(), 2);
        assert_eq!(structure.files().count(), 1);
        assert_eq!(structure.directories().count(), 1);
    }

    #[test]
    fn validates_duplicates() {
        let structure = ProjectStructure::new("/tmp/app")
            .with_file("README.md", String::new())
            .with_file("README.md", String::new());

        assert!(structure.validate().is_err());
    }

    #[test]
    fn validates_empty() {
        assert!(ProjectStructure::new("/tmp/app").validate().is_err());
    }

    #[test]
    fn rejects_absolute_entry_paths() {
        let structure = ProjectStructure::new("/tmp/app").with_file("/etc/passwd", String::new());
        assert!(structure.validate().is_err());
    }

    #[test]
    fn if_absent_flag_recorded() {
        let mut structure = ProjectStructure::new("/tmp/app");
        structure.add_file_if_absent("package.json", "{}".into());
        let file = structure.files().next().unwrap();
        assert!(!file.overwrite);
    }
}
