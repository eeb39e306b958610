use crate::config::TemplateConfig;
use crate::error::Result;
use crate::loader::interface::Templater;
use crate::loader::{disk::DiskLoader, embedded::EmbeddedLoader};
use crate::set::TemplateSet;
use std::path::Path;

pub mod disk;
pub mod embedded;
pub mod interface;

#[derive(Debug)]
pub enum Loader {
    /// Templates parsed from a directory on disk
    Disk(DiskLoader),
    /// Templates parsed from a tree compiled into the binary
    Embedded(EmbeddedLoader),
}

impl std::fmt::Display for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Loader::Disk(loader) => {
                write!(f, "disk directory: '{}'", loader.root().display())
            }
            Loader::Embedded(loader) => write!(f, "embedded subtree: '{}'", loader.subdir()),
        }
    }
}

impl Templater for Loader {
    fn template_set(&self) -> &TemplateSet {
        match self {
            Loader::Disk(loader) => loader.template_set(),
            Loader::Embedded(loader) => loader.template_set(),
        }
    }
}

/// Selects the template source from the configuration and parses it.
///
/// When the configuration carries an embedded tree, `dir` names a
/// subdirectory inside it; otherwise `dir` is a directory on disk. Only the
/// presence of the embedded handle decides, so the choice is stable for a
/// given configuration. Both variants parse eagerly, so every template
/// problem surfaces here instead of at render time.
///
/// # Arguments
/// * `dir` - Directory to load from, on disk or inside the embedded tree
/// * `config` - Source selection, glob pattern, functions and root name
///
/// # Returns
/// * `Result<Loader>` - The loader holding the parsed template set
pub fn load_templates(dir: impl AsRef<Path>, config: &TemplateConfig) -> Result<Loader> {
    match config.embedded() {
        Some(assets) => Ok(Loader::Embedded(EmbeddedLoader::new(assets, dir, config)?)),
        None => Ok(Loader::Disk(DiskLoader::new(dir, config)?)),
    }
}
