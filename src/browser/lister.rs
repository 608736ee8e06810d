use std::fs;
use std::path::Path;
use std::time::SystemTime;

use time::{macros::format_description, OffsetDateTime};

use crate::defaults::Defaults;
use crate::error::FilesystemError;

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_dir: bool,
    pub size_bytes: Option<u64>,
    pub modified_at: Option<SystemTime>,
}

impl DirectoryEntry {
    /// The synthetic "go to parent" row that heads every listing.
    pub fn parent() -> Self {
        Self {
            name: Defaults::PARENT_ENTRY.to_string(),
            is_dir: true,
            size_bytes: None,
            modified_at: None,
        }
    }

    /// Name as shown in the table; directories carry a trailing separator.
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}{}", self.name, std::path::MAIN_SEPARATOR)
        } else {
            self.name.clone()
        }
    }

    pub fn display_size(&self) -> String {
        self.size_bytes.map(|s| s.to_string()).unwrap_or_default()
    }

    pub fn display_modified(&self) -> String {
        let Some(t) = self.modified_at else { return String::new(); };
        let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        OffsetDateTime::from(t).format(&fmt).unwrap_or_default()
    }
}

/// Lists `dir` in enumeration order, preceded by the parent entry.
pub fn list_dir(dir: &Path) -> Result<Vec<DirectoryEntry>, FilesystemError> {
    let fs_err = |source: std::io::Error| FilesystemError { path: dir.to_path_buf(), source };

    let read = fs::read_dir(dir).map_err(fs_err)?;
    let mut rows = vec![DirectoryEntry::parent()];

    for ent in read {
        let ent = match ent {
            Ok(ent) => ent,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let name = ent.file_name().to_string_lossy().into_owned();
        if let Some(row) = stat_entry(&ent.path(), name) {
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Follows symlinks so a link to a directory stays browsable; dangling links
/// fall back to their own metadata. `None` when the entry cannot be stat'ed,
/// e.g. because it vanished after the directory was read.
fn stat_entry(path: &Path, name: String) -> Option<DirectoryEntry> {
    let md = match fs::metadata(path).or_else(|_| fs::symlink_metadata(path)) {
        Ok(md) => md,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping entry");
            return None;
        }
    };
    Some(DirectoryEntry {
        name,
        is_dir: md.is_dir(),
        size_bytes: Some(md.len()),
        modified_at: md.modified().ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn listing_has_parent_plus_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "aaa").unwrap();
        fs::write(dir.path().join("b.yaml"), "k: v").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let rows = list_dir(dir.path()).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], DirectoryEntry::parent());

        let nested = rows.iter().find(|r| r.name == "nested").unwrap();
        assert!(nested.is_dir);
        let a = rows.iter().find(|r| r.name == "a.txt").unwrap();
        assert!(!a.is_dir);
        assert_eq!(a.size_bytes, Some(3));
    }

    #[test]
    fn empty_directory_lists_only_parent() {
        let dir = tempfile::tempdir().unwrap();
        let rows = list_dir(dir.path()).unwrap();
        assert_eq!(rows, vec![DirectoryEntry::parent()]);
    }

    #[test]
    fn missing_directory_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let err = list_dir(&missing).unwrap_err();
        assert_eq!(err.path, missing);
    }

    #[test]
    fn file_path_is_not_listable() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        assert!(list_dir(&file).is_err());
    }

    #[test]
    fn vanished_entry_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(stat_entry(&dir.path().join("gone"), "gone".into()), None);

        fs::write(dir.path().join("here"), "x").unwrap();
        let row = stat_entry(&dir.path().join("here"), "here".into()).unwrap();
        assert_eq!(row.size_bytes, Some(1));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_listed_as_file() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("link")).unwrap();

        let rows = list_dir(dir.path()).unwrap();
        let link = rows.iter().find(|r| r.name == "link").unwrap();
        assert!(!link.is_dir);
    }

    #[test]
    fn display_columns() {
        let parent = DirectoryEntry::parent();
        assert_eq!(parent.display_name(), format!("..{}", std::path::MAIN_SEPARATOR));
        assert_eq!(parent.display_size(), "");
        assert_eq!(parent.display_modified(), "");

        let file = DirectoryEntry {
            name: "ca.pem".into(),
            is_dir: false,
            size_bytes: Some(1200),
            modified_at: Some(UNIX_EPOCH + Duration::from_secs(86_400)),
        };
        assert_eq!(file.display_name(), "ca.pem");
        assert_eq!(file.display_size(), "1200");
        assert_eq!(file.display_modified(), "1970-01-02 00:00:00");
    }
}
