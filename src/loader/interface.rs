use crate::set::TemplateSet;

/// Trait for accessing templates parsed from different sources.
pub trait Templater {
    /// Hands out the template set parsed when the loader was constructed.
    ///
    /// # Returns
    /// * `&TemplateSet` - The same set on every call; no re-parsing happens
    fn template_set(&self) -> &TemplateSet;
}
