//! Configuration options for a filter run

/// File-name suffix of DICOM JSON record files
pub const DEFAULT_EXTENSION: &str = ".json";

/// Filter run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Suffix a file name must end with to be loaded as a record
    pub extension: String,
    /// Follow symbolic links while walking
    pub follow_links: bool,
    /// Maximum walk depth below the folder (the folder itself is depth 0)
    pub max_depth: Option<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            follow_links: false,
            max_depth: None,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record file suffix
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Follow symbolic links while walking
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Limit how deep the walk descends
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.extension.is_empty() {
            return Err("Extension must not be empty".to_string());
        }

        if self.max_depth == Some(0) {
            return Err("Max depth must be at least 1".to_string());
        }

        Ok(())
    }
}
