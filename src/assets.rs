use std::borrow::Cow;
use std::fmt;
use std::path::{Component, Path};

use globset::GlobMatcher;
use log::debug;
use rust_embed::{EmbeddedFile, RustEmbed};

use crate::error::{Error, Result};

/// Handle to a tree of assets compiled into the binary.
///
/// `RustEmbed` exposes a tree through associated functions on a marker type;
/// this erases the marker so the tree can travel as a plain configuration
/// value, the way a directory path does for the disk loader.
#[derive(Clone, Copy)]
pub struct EmbeddedAssets {
    iter: fn() -> Box<dyn Iterator<Item = Cow<'static, str>>>,
    get: fn(&str) -> Option<EmbeddedFile>,
}

impl EmbeddedAssets {
    /// Captures the embedded tree of `E`.
    pub fn of<E: RustEmbed>() -> Self {
        // E::iter() returns an opaque iterator type, so it is boxed behind a
        // non-capturing closure rather than taken as a fn pointer.
        Self { iter: || Box::new(E::iter()), get: E::get }
    }

    /// Narrows the tree to the subdirectory `dir`.
    ///
    /// Fails when nothing in the tree lives under `dir`; `.` (or an empty
    /// path) keeps the whole tree and cannot fail.
    pub(crate) fn subtree(&self, dir: &Path) -> Result<EmbeddedDir> {
        let subdir = normalize(dir)?;
        if !subdir.is_empty() {
            let prefix = format!("{subdir}/");
            if !(self.iter)().any(|path| path.starts_with(&prefix)) {
                return Err(Error::EmbeddedSubdirError { subdir });
            }
        }
        Ok(EmbeddedDir { assets: *self, subdir })
    }
}

impl fmt::Debug for EmbeddedAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedAssets").finish_non_exhaustive()
    }
}

/// View of an embedded tree narrowed to one subdirectory.
#[derive(Debug)]
pub(crate) struct EmbeddedDir {
    assets: EmbeddedAssets,
    subdir: String,
}

impl EmbeddedDir {
    /// Display name of the narrowed root (`.` for the whole tree).
    pub(crate) fn name(&self) -> &str {
        if self.subdir.is_empty() {
            "."
        } else {
            &self.subdir
        }
    }

    /// Reads every entry under the subdirectory whose relative path matches
    /// the pattern, as `(relative name, UTF-8 contents)` pairs.
    pub(crate) fn read_matching(&self, matcher: &GlobMatcher) -> Result<Vec<(String, String)>> {
        let prefix = if self.subdir.is_empty() {
            String::new()
        } else {
            format!("{}/", self.subdir)
        };

        let mut sources = Vec::new();
        for path in (self.assets.iter)() {
            let name = match path.strip_prefix(&prefix) {
                Some(name) => name,
                None => continue,
            };
            if !matcher.is_match(name) {
                continue;
            }
            let file = match (self.assets.get)(&path) {
                Some(file) => file,
                None => {
                    // iter() and get() only disagree when a debug build reads
                    // a tree that changed on disk; skip the stale entry.
                    debug!("Embedded entry '{}' was listed but cannot be read", path);
                    continue;
                }
            };
            let contents = std::str::from_utf8(file.data.as_ref())
                .map_err(|_| Error::TemplateEncodingError { name: name.to_string() })?
                .to_string();
            sources.push((name.to_string(), contents));
        }
        Ok(sources)
    }
}

/// Collapses `dir` to a forward-slash path relative to the tree root.
fn normalize(dir: &Path) -> Result<String> {
    let mut parts: Vec<&str> = Vec::new();
    for component in dir.components() {
        match component {
            Component::Normal(part) => match part.to_str() {
                Some(part) => parts.push(part),
                None => {
                    return Err(Error::EmbeddedSubdirError {
                        subdir: dir.display().to_string(),
                    })
                }
            },
            Component::CurDir | Component::RootDir => {}
            Component::ParentDir | Component::Prefix(_) => {
                return Err(Error::EmbeddedSubdirError {
                    subdir: dir.display().to_string(),
                })
            }
        }
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use globset::Glob;

    #[derive(RustEmbed)]
    #[folder = "tests/templates"]
    struct TestTemplates;

    fn match_all() -> GlobMatcher {
        Glob::new("*").unwrap().compile_matcher()
    }

    #[test]
    fn test_subtree_dot_keeps_whole_tree() {
        let assets = EmbeddedAssets::of::<TestTemplates>();
        let dir = assets.subtree(Path::new(".")).unwrap();
        assert_eq!(dir.name(), ".");

        let names: Vec<String> =
            dir.read_matching(&match_all()).unwrap().into_iter().map(|(n, _)| n).collect();
        assert!(names.contains(&"base.html".to_string()));
        assert!(names.contains(&"pages/index.html".to_string()));
    }

    #[test]
    fn test_subtree_narrows_names_to_relative_paths() {
        let assets = EmbeddedAssets::of::<TestTemplates>();
        let dir = assets.subtree(Path::new("pages")).unwrap();
        assert_eq!(dir.name(), "pages");

        let mut names: Vec<String> =
            dir.read_matching(&match_all()).unwrap().into_iter().map(|(n, _)| n).collect();
        names.sort();
        assert_eq!(names, vec!["about.html", "index.html"]);
    }

    #[test]
    fn test_subtree_accepts_cur_dir_components() {
        let assets = EmbeddedAssets::of::<TestTemplates>();
        let dir = assets.subtree(Path::new("./pages")).unwrap();
        assert_eq!(dir.name(), "pages");
    }

    #[test]
    fn test_missing_subtree_is_a_distinct_error() {
        let assets = EmbeddedAssets::of::<TestTemplates>();
        let err = assets.subtree(Path::new("missing")).unwrap_err();
        match &err {
            Error::EmbeddedSubdirError { subdir } => assert_eq!(subdir, "missing"),
            other => panic!("Expected EmbeddedSubdirError, got {other:?}"),
        }
        assert!(err
            .to_string()
            .contains("subdirectory of embedded file system"));
    }

    #[test]
    fn test_parent_components_are_rejected() {
        let assets = EmbeddedAssets::of::<TestTemplates>();
        let result = assets.subtree(Path::new("pages/../pages"));
        assert!(matches!(result, Err(Error::EmbeddedSubdirError { .. })));
    }

    #[test]
    fn test_handle_is_a_plain_copyable_value() {
        let assets = EmbeddedAssets::of::<TestTemplates>();
        let copy = assets;

        // Both copies list the same tree
        let names: Vec<String> = copy
            .subtree(Path::new("pages"))
            .unwrap()
            .read_matching(&match_all())
            .unwrap()
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert!(names.contains(&"index.html".to_string()));
        assert!(assets.subtree(Path::new("pages")).is_ok());
    }

    #[test]
    fn test_read_matching_applies_the_pattern() {
        let assets = EmbeddedAssets::of::<TestTemplates>();
        let dir = assets.subtree(Path::new(".")).unwrap();
        let matcher = Glob::new("*.html").unwrap().compile_matcher();

        let names: Vec<String> =
            dir.read_matching(&matcher).unwrap().into_iter().map(|(n, _)| n).collect();
        assert!(names.contains(&"base.html".to_string()));
        assert!(!names.iter().any(|n| n.ends_with(".txt")));
    }
}
