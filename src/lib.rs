/// Handle to assets compiled into the binary.
pub mod assets;

/// Configuration for template loading.
pub mod config;

/// Defines custom error types.
pub mod error;

/// An abstraction that allows reading templates from disk or from the binary.
pub mod loader;

/// The parsed template set and its accessors.
pub mod set;
