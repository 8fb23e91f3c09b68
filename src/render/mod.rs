pub mod languages;
pub mod overview;

pub use languages::{
    generate_languages, lang_list_fragment, progress_fragment, render_languages,
    sorted_languages, LANGUAGES_FILE, LANGUAGES_PLACEHOLDERS,
};
pub use overview::{generate_overview, render_overview, OVERVIEW_FILE, OVERVIEW_PLACEHOLDERS};

use std::path::{Path, PathBuf};

/// Where templates are read from and badges are written to.
#[derive(Debug, Clone)]
pub struct RenderPaths {
    pub templates: PathBuf,
    pub output: PathBuf,
}

impl RenderPaths {
    pub fn new<T: AsRef<Path>, O: AsRef<Path>>(templates: T, output: O) -> Self {
        Self {
            templates: templates.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
        }
    }

    pub fn template(&self, filename: &str) -> PathBuf {
        self.templates.join(filename)
    }
}

impl Default for RenderPaths {
    fn default() -> Self {
        Self::new("templates", "generated")
    }
}
