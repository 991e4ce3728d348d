//! Template existence service
//!
//! Resolution never reads template contents; it only asks whether an
//! identifier exists. [`TemplateLocator`] is that seam. The crate ships a
//! filesystem-backed implementation and a static in-memory one.

use std::collections::HashSet;

pub mod fs;

/// Existence oracle for template identifiers
///
/// Implementations must answer for both naming conventions: modern path
/// identifiers (`@News/news/detail.html.twig`, `news/detail.html.php`) and
/// legacy logical names (`NewsBundle:News:detail.html.php`).
pub trait TemplateLocator {
    /// Whether a template with this identifier exists
    fn exists(&self, name: &str) -> bool;
}

/// A locator backed by a fixed set of identifiers
///
/// Useful when the available templates are known up front, e.g. compiled
/// into the application or precomputed by a build step.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplateLocator {
    names: HashSet<String>,
}

impl StaticTemplateLocator {
    /// Create an empty locator
    pub fn new() -> Self {
        StaticTemplateLocator::default()
    }

    /// Register a template identifier
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }
}

impl<S: Into<String>> FromIterator<S> for StaticTemplateLocator {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StaticTemplateLocator {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl TemplateLocator for StaticTemplateLocator {
    fn exists(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_locator_from_iter() {
        let locator: StaticTemplateLocator =
            ["news/detail.html.php", "NewsBundle:News:detail.html.php"]
                .into_iter()
                .collect();
        assert!(locator.exists("news/detail.html.php"));
        assert!(locator.exists("NewsBundle:News:detail.html.php"));
        assert!(!locator.exists("news/list.html.php"));
    }

    #[test]
    fn test_static_locator_insert() {
        let mut locator = StaticTemplateLocator::new();
        assert!(!locator.exists("status.html.twig"));
        locator.insert("status.html.twig");
        assert!(locator.exists("status.html.twig"));
    }
}
