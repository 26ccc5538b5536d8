//! Walk, load and match: the filter engine

use std::path::PathBuf;

use crate::error::{FilterError, FilterResult};
use crate::matching::{evaluate, Criteria};
use crate::parser::directory::{walk_json_files, JsonFiles};
use crate::parser::load_record;
use crate::pipeline::config::FilterConfig;
use crate::pipeline::path_mapping::to_display_path;

/// Main filter engine
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    config: FilterConfig,
}

impl FilterEngine {
    /// Create a new filter engine
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Stream the paths of matching files.
    ///
    /// Walk errors are passed through as items; a folder without any record
    /// file ends the stream with [`FilterError::NoJsonFiles`].
    pub fn matching_paths<'a>(
        &self,
        folder: &str,
        criteria: &'a Criteria,
    ) -> FilterResult<MatchingPaths<'a>> {
        self.config
            .validate()
            .map_err(FilterError::configuration)?;

        let files = walk_json_files(folder, &self.config)?;
        Ok(MatchingPaths { files, criteria })
    }

    /// Collect the display paths of every matching file, in walk order.
    pub fn filter_files(&self, folder: &str, criteria: &Criteria) -> FilterResult<Vec<String>> {
        let matched = self
            .matching_paths(folder, criteria)?
            .map(|path| path.map(|path| to_display_path(&path)))
            .collect::<FilterResult<Vec<String>>>()?;

        tracing::debug!(folder, matched = matched.len(), "filter run complete");
        Ok(matched)
    }
}

/// Iterator over matching files produced by [`FilterEngine::matching_paths`]
pub struct MatchingPaths<'a> {
    files: JsonFiles,
    criteria: &'a Criteria,
}

impl Iterator for MatchingPaths<'_> {
    type Item = FilterResult<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        for file in self.files.by_ref() {
            let path = match file {
                Ok(path) => path,
                Err(e) => return Some(Err(e)),
            };

            let record = load_record(&path);
            let outcome = evaluate(record.as_ref(), self.criteria);
            tracing::debug!(path = %path.display(), %outcome, "evaluated");

            if outcome.is_match() {
                return Some(Ok(path));
            }
        }
        None
    }
}
