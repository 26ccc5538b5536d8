use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{FilterError, FilterResult};
use crate::parser::filter::is_json_entry;
use crate::pipeline::config::FilterConfig;

/// Lazy walk over the record files below a folder.
///
/// Yields paths in filesystem traversal order. When the walk is exhausted
/// without having yielded a single path, one final
/// [`FilterError::NoJsonFiles`] item is produced.
pub struct JsonFiles {
    folder: String,
    extension: String,
    entries: walkdir::IntoIter,
    found_any: bool,
    finished: bool,
}

impl Iterator for JsonFiles {
    type Item = FilterResult<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for entry in self.entries.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };

            if is_json_entry(&entry, &self.extension) {
                self.found_any = true;
                return Some(Ok(entry.into_path()));
            }
        }

        self.finished = true;
        if self.found_any {
            None
        } else {
            Some(Err(FilterError::no_json_files(self.folder.clone())))
        }
    }
}

/// Start a recursive walk for record files under `folder`.
///
/// Fails before any traversal if `folder` is not an existing directory.
/// Each directory's own files are yielded before anything below its
/// subdirectories; within each group, readdir order is kept.
pub fn walk_json_files(folder: &str, config: &FilterConfig) -> FilterResult<JsonFiles> {
    let root = Path::new(folder);
    if !root.is_dir() {
        return Err(FilterError::directory_not_found(folder));
    }

    let mut walker = WalkDir::new(root)
        .follow_links(config.follow_links)
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));
    if let Some(depth) = config.max_depth {
        walker = walker.max_depth(depth);
    }

    Ok(JsonFiles {
        folder: folder.to_string(),
        extension: config.extension.clone(),
        entries: walker.into_iter(),
        found_any: false,
        finished: false,
    })
}

/// Collect every record file under `folder`.
///
/// Fails with [`FilterError::NoJsonFiles`] if none exist.
pub fn find_json_files(folder: &str, config: &FilterConfig) -> FilterResult<Vec<PathBuf>> {
    walk_json_files(folder, config)?.collect()
}
