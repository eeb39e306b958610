use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read template directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to parse glob pattern. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Template engine error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// When the engine rejects a template source at construction time.
    #[error("Failed to parse template '{name}'. Original error: {source}")]
    TemplateParseError { name: String, source: minijinja::Error },

    /// When the requested subdirectory has no entries in the embedded tree.
    #[error("Failed to get subdirectory of embedded file system: '{subdir}' does not exist.")]
    EmbeddedSubdirError { subdir: String },

    #[error("Template '{name}' is not valid UTF-8.")]
    TemplateEncodingError { name: String },

    #[error("Pattern '{pattern}' matched no templates under '{root}'.")]
    EmptyTemplateSetError { pattern: String, root: String },

    #[error("Root template '{root_name}' was not found in the template set.")]
    RootTemplateError { root_name: String },
}

/// Convenience type alias for Results with the templater Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;
