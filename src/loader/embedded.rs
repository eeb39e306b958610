use crate::assets::EmbeddedAssets;
use crate::config::TemplateConfig;
use crate::error::{Error, Result};
use crate::loader::interface::Templater;
use crate::set::TemplateSet;
use log::debug;
use std::path::Path;

/// Loader for templates compiled into the binary.
#[derive(Debug)]
pub struct EmbeddedLoader {
    subdir: String,
    set: TemplateSet,
}

impl EmbeddedLoader {
    /// Creates a new EmbeddedLoader instance, parsing the subtree eagerly.
    ///
    /// Narrows the embedded tree to `dir` first, then reads every entry
    /// whose subtree-relative path matches the configured pattern. Template
    /// names come out identical to what a [`DiskLoader`] over the same tree
    /// would produce.
    ///
    /// [`DiskLoader`]: crate::loader::disk::DiskLoader
    ///
    /// # Returns
    /// * `Result<Self>` - The loader holding the parsed template set
    pub fn new(
        assets: EmbeddedAssets,
        dir: impl AsRef<Path>,
        config: &TemplateConfig,
    ) -> Result<Self> {
        let subtree = assets.subtree(dir.as_ref())?;
        debug!("Loading templates from embedded subtree '{}'", subtree.name());

        let matcher = config.matcher()?;
        let sources = subtree.read_matching(&matcher)?;
        if sources.is_empty() {
            return Err(Error::EmptyTemplateSetError {
                pattern: config.pattern().to_string(),
                root: subtree.name().to_string(),
            });
        }

        let set = TemplateSet::parse(sources, config)?;
        Ok(Self { subdir: subtree.name().to_string(), set })
    }

    /// The embedded subtree the templates were read from.
    pub fn subdir(&self) -> &str {
        &self.subdir
    }
}

impl Templater for EmbeddedLoader {
    fn template_set(&self) -> &TemplateSet {
        &self.set
    }
}
