use std::collections::BTreeMap;

use globset::{Glob, GlobMatcher};
use minijinja::functions::Function;
use minijinja::value::{FunctionArgs, FunctionResult, Value};

use crate::assets::EmbeddedAssets;
use crate::error::Result;

/// Pattern applied when the configuration leaves the glob unset.
pub const DEFAULT_PATTERN: &str = "*";

/// Source-independent description of a template set: which files to take,
/// which callables to expose to them, and which template is the entry point.
///
/// Built once with the consuming `with_*` setters and then treated as
/// immutable; loaders only read from it.
#[derive(Debug, Clone)]
pub struct TemplateConfig {
    embedded: Option<EmbeddedAssets>,
    functions: BTreeMap<String, Value>,
    pattern: String,
    root_name: String,
}

impl TemplateConfig {
    /// Creates a configuration with the given root template name, an unset
    /// pattern and no function bindings.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            embedded: None,
            functions: BTreeMap::new(),
            pattern: String::new(),
            root_name: root_name.into(),
        }
    }

    /// Sets the glob pattern selecting which files are parsed as templates.
    ///
    /// The pattern is matched against paths relative to the loaded root,
    /// with forward slashes. An empty pattern means "match everything".
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Binds a callable under `name`, making it available inside every
    /// template of the set (e.g. `{{ name(...) }}`).
    pub fn with_function<F, Rv, Args>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Function<Rv, Args>,
        Rv: FunctionResult,
        Args: for<'a> FunctionArgs<'a>,
    {
        self.functions.insert(name.into(), Value::from_function(f));
        self
    }

    /// Supplies an embedded asset tree. A configuration carrying one is
    /// always loaded through the embedded loader.
    pub fn with_embedded(mut self, assets: EmbeddedAssets) -> Self {
        self.embedded = Some(assets);
        self
    }

    /// The name of the entry template.
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// The configured pattern, with the match-everything default applied.
    pub fn pattern(&self) -> &str {
        if self.pattern.is_empty() {
            DEFAULT_PATTERN
        } else {
            &self.pattern
        }
    }

    pub(crate) fn embedded(&self) -> Option<EmbeddedAssets> {
        self.embedded
    }

    pub(crate) fn functions(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.functions.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Compiles the effective pattern into a matcher.
    pub(crate) fn matcher(&self) -> Result<GlobMatcher> {
        Ok(Glob::new(self.pattern())?.compile_matcher())
    }
}
