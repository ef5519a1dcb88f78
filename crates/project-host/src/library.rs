//! Still discovery on the local filesystem.

use std::path::{Path, PathBuf};

use stillreel_common::config::SourceConfig;
use stillreel_host_core::{HostError, HostResult, MediaLibrary};

/// Lists the regular files of one folder, non-recursively.
#[derive(Debug, Clone, Default)]
pub struct FsMediaLibrary {
    /// Sort by file name; otherwise keep directory order.
    pub sort: bool,
    /// Lowercase extensions to accept. Empty accepts everything.
    pub extensions: Vec<String>,
}

impl FsMediaLibrary {
    pub fn from_config(source: &SourceConfig) -> Self {
        Self {
            sort: source.sort_files,
            extensions: source
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        // Names need not be UTF-8; only the leading dot marks a hidden file.
        let hidden = path
            .file_name()
            .map_or(true, |n| n.as_encoded_bytes().starts_with(b"."));
        if hidden {
            return false;
        }
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|e| self.extensions.iter().any(|x| *x == e))
    }
}

impl MediaLibrary for FsMediaLibrary {
    fn list_files(&self, dir: &Path) -> HostResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(HostError::FolderUnavailable {
                path: dir.to_path_buf(),
            });
        }

        let io_err = |source| HostError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = vec![];
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let path = entry.path();
            if path.is_file() && self.accepts(&path) {
                files.push(path);
            }
        }

        if self.sort {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }

        tracing::debug!(dir = %dir.display(), count = files.len(), "Listed stills");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str, files: &[&str]) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        for f in files {
            std::fs::write(dir.join(f), b"x").unwrap();
        }
        dir
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn sorted_and_filtered() {
        let dir = fixture(
            "stillreel_library_sorted",
            &["c.JPG", "a.png", "notes.txt", ".hidden.jpg", "b.jpeg"],
        );
        let library = FsMediaLibrary::from_config(&SourceConfig::default());

        let files = library.list_files(&dir).unwrap();
        assert_eq!(names(&files), vec!["a.png", "b.jpeg", "c.JPG"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn empty_extension_list_accepts_everything_visible() {
        let dir = fixture("stillreel_library_all", &["b.txt", "a.jpg", ".DS_Store"]);
        let library = FsMediaLibrary {
            sort: true,
            extensions: vec![],
        };

        let files = library.list_files(&dir).unwrap();
        assert_eq!(names(&files), vec!["a.jpg", "b.txt"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn dotted_extensions_in_config_are_normalized() {
        let source = SourceConfig {
            extensions: vec![".PNG".to_string()],
            ..SourceConfig::default()
        };
        assert_eq!(FsMediaLibrary::from_config(&source).extensions, vec!["png"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_listed() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = fixture("stillreel_library_latin1", &["ok.jpg"]);
        let latin1 = dir.join(OsStr::from_bytes(b"caf\xe9.JPG"));
        std::fs::write(&latin1, b"x").unwrap();
        std::fs::write(dir.join(OsStr::from_bytes(b".caf\xe9.jpg")), b"x").unwrap();
        let library = FsMediaLibrary::from_config(&SourceConfig::default());

        let files = library.list_files(&dir).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.contains(&latin1));
        assert!(files.contains(&dir.join("ok.jpg")));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_folder() {
        let library = FsMediaLibrary::default();
        let err = library
            .list_files(Path::new("/definitely/not/a/stillreel/folder"))
            .unwrap_err();
        assert!(matches!(err, HostError::FolderUnavailable { .. }));
    }

    #[test]
    fn empty_folder() {
        let dir = fixture("stillreel_library_empty", &[]);
        let library = FsMediaLibrary::from_config(&SourceConfig::default());
        assert!(library.list_files(&dir).unwrap().is_empty());
        std::fs::remove_dir_all(&dir).ok();
    }
}
