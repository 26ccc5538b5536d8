use std::path::Path;
use walkdir::DirEntry;

/// Return true if the file name ends with `extension`.
///
/// The comparison is a literal, case-sensitive suffix match on the file name,
/// so `.json` itself counts while `scan.JSON` and `scan.json.bak` do not.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(extension))
}

/// Return true if a walked entry is a non-directory whose name ends with `extension`
pub fn is_json_entry(entry: &DirEntry, extension: &str) -> bool {
    let is_dir =
        entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir());
    !is_dir && has_extension(entry.path(), extension)
}
