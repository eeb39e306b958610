use crate::config::TemplateConfig;
use crate::error::{Error, Result};
use crate::loader::interface::Templater;
use crate::set::TemplateSet;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Loader for templates from a directory on the local filesystem.
#[derive(Debug)]
pub struct DiskLoader {
    root: PathBuf,
    set: TemplateSet,
}

impl DiskLoader {
    /// Creates a new DiskLoader instance, parsing the directory eagerly.
    ///
    /// Walks `dir` recursively, reads every file whose root-relative path
    /// matches the configured pattern and parses the collection in one pass.
    ///
    /// # Returns
    /// * `Result<Self>` - The loader holding the parsed template set
    pub fn new(dir: impl AsRef<Path>, config: &TemplateConfig) -> Result<Self> {
        let root = dir.as_ref().to_path_buf();
        let matcher = config.matcher()?;
        debug!("Loading templates from directory '{}'", root.display());

        let mut sources = Vec::new();
        for entry in WalkDir::new(&root) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            let name = rel.to_string_lossy().replace('\\', "/");
            if !matcher.is_match(&name) {
                continue;
            }
            let source = std::fs::read_to_string(entry.path())?;
            sources.push((name, source));
        }

        if sources.is_empty() {
            return Err(Error::EmptyTemplateSetError {
                pattern: config.pattern().to_string(),
                root: root.display().to_string(),
            });
        }

        let set = TemplateSet::parse(sources, config)?;
        Ok(Self { root, set })
    }

    /// The directory the templates were read from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Templater for DiskLoader {
    fn template_set(&self) -> &TemplateSet {
        &self.set
    }
}
