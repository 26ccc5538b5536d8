use std::path::Path;

/// Render a matched path for output, with every `\` turned into `/`.
pub fn to_display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
