use log::debug;
use minijinja::{Environment, Template};

use crate::config::TemplateConfig;
use crate::error::{Error, Result};

/// The parsed template collection, addressable by name.
///
/// Produced by one eager bind-and-parse pass at loader construction and
/// never mutated afterwards; reloading means constructing a new loader.
/// Multiple threads may render from the same set without synchronization.
#[derive(Debug)]
pub struct TemplateSet {
    env: Environment<'static>,
    names: Vec<String>,
    root_name: String,
}

impl TemplateSet {
    /// Binds the configured functions and parses all sources into a fresh
    /// engine environment.
    ///
    /// Sources are registered in name order so logs and error messages stay
    /// stable regardless of how the loader iterated its tree. Any engine
    /// rejection aborts the whole construction; a partially-parsed set is
    /// never returned.
    pub(crate) fn parse(
        mut sources: Vec<(String, String)>,
        config: &TemplateConfig,
    ) -> Result<Self> {
        sources.sort_by(|a, b| a.0.cmp(&b.0));

        let mut env = Environment::new();
        for (name, function) in config.functions() {
            env.add_global(name.to_string(), function.clone());
        }

        let mut names = Vec::with_capacity(sources.len());
        for (name, source) in sources {
            debug!("Parsing template '{}'", name);
            env.add_template_owned(name.clone(), source)
                .map_err(|e| Error::TemplateParseError { name: name.clone(), source: e })?;
            names.push(name);
        }

        let root_name = config.root_name().to_string();
        if !names.iter().any(|name| name == &root_name) {
            return Err(Error::RootTemplateError { root_name });
        }

        debug!("Parsed {} templates, root is '{}'", names.len(), root_name);
        Ok(Self { env, names, root_name })
    }

    /// The entry template designated at configuration time.
    pub fn root(&self) -> Result<Template<'_, '_>> {
        self.get(&self.root_name)
    }

    /// Looks up a parsed template by name.
    pub fn get(&self, name: &str) -> Result<Template<'_, '_>> {
        Ok(self.env.get_template(name)?)
    }

    /// Names of all parsed templates, sorted.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The configured root template name.
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// The underlying engine environment, for rendering.
    pub fn env(&self) -> &Environment<'static> {
        &self.env
    }
}
