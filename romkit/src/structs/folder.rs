use std::fs;
use std::path::Path;

use crate::utils::errors::ScanError;

/// A node of a file system tree: leaf file names and named subfolders, both
/// kept in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
    pub files: Vec<String>,
    pub folders: Vec<(String, Folder)>,
}

impl Folder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        self.files.push(name.into());
        self
    }

    pub fn with_folder(mut self, name: impl Into<String>, folder: Folder) -> Self {
        self.folders.push((name.into(), folder));
        self
    }

    /// Looks up a direct subfolder by name.
    ///
    /// ```
    /// use romkit::structs::folder::Folder;
    ///
    /// let root = Folder::new().with_folder("MAP_BG", Folder::new().with_file("bg.bpl"));
    /// assert_eq!(root.subfolder("MAP_BG").map(|f| f.files.len()), Some(1));
    /// assert!(root.subfolder("BALANCE").is_none());
    /// ```
    pub fn subfolder(&self, name: &str) -> Option<&Folder> {
        self.folders
            .iter()
            .find(|(folder_name, _)| folder_name == name)
            .map(|(_, folder)| folder)
    }

    /// Number of files in this folder and all of its subfolders.
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .folders
                .iter()
                .map(|(_, folder)| folder.file_count())
                .sum::<usize>()
    }

    /// Builds a tree from a directory on disk.
    ///
    /// Entries are sorted by name. Symbolic links are skipped, so the result
    /// is always a strict tree.
    pub fn from_dir<P: AsRef<Path>>(path: P) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let read_dir_err = |source| ScanError::ReadDir {
            path: path.display().to_string(),
            source,
        };

        let mut entries = fs::read_dir(path)
            .map_err(read_dir_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_dir_err)?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut folder = Folder::new();
        for entry in entries {
            let file_type = entry.file_type().map_err(read_dir_err)?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|_| ScanError::NonUtf8Name(path.display().to_string()))?;

            if file_type.is_dir() {
                log::trace!("Descending into {}", entry.path().display());
                folder.folders.push((name, Folder::from_dir(entry.path())?));
            } else if file_type.is_file() {
                folder.files.push(name);
            }
        }

        Ok(folder)
    }
}
