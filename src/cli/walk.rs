//! Finding input files

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Whether the file name ends with `.{extension}`, ignoring case
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return false,
    };
    let suffix_len = extension.len() + 1;
    if name.len() < suffix_len || !name.is_char_boundary(name.len() - suffix_len) {
        return false;
    }
    let (_, suffix) = name.split_at(name.len() - suffix_len);
    suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(extension)
}

/// Depth-first iterator over the files below a path
///
/// Entries are visited in name order. A symbolic link given as the root is
/// followed, links further down are not.
pub struct Files {
    extension: &'static str,
    inner: walkdir::IntoIter,
}

impl Files {
    /// Visit `root` itself, or everything below it if it is a directory
    pub fn new(root: &Path, extension: &'static str) -> Self {
        let inner = WalkDir::new(root)
            .follow_root_links(true)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        Self { extension, inner }
    }
}

impl Iterator for Files {
    type Item = Result<PathBuf, walkdir::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in &mut self.inner {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e)),
            };
            let path = entry.path();
            // `is_file` resolves links to files
            if !entry.file_type().is_dir() && path.is_file() && has_extension(path, self.extension)
            {
                return Some(Ok(entry.into_path()));
            }
        }
        None
    }
}
