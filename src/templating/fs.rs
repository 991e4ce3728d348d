//! Filesystem-backed template locator
//!
//! Maps template identifiers onto an application views root and per-bundle
//! views roots, for both naming conventions:
//!
//! - `@News/news/detail.html.twig` - under the `NewsBundle` views root
//! - `news/detail.html.php` - under the application views root
//! - `NewsBundle:News:detail.html.php` - legacy logical name, bundle views
//!   root with the controller short name as directory
//! - `:News:detail.html.php` - legacy logical name at the application root

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::common::string_utils::bundle_short_name;
use crate::templating::TemplateLocator;

/// Template locator resolving identifiers against directories on disk
#[derive(Debug, Clone)]
pub struct FsTemplateLocator {
    app_views: PathBuf,
    bundle_views: HashMap<String, PathBuf>,
}

impl FsTemplateLocator {
    /// Create a locator with the application views root
    pub fn new(app_views: impl Into<PathBuf>) -> Self {
        FsTemplateLocator {
            app_views: app_views.into(),
            bundle_views: HashMap::new(),
        }
    }

    /// Register a bundle's views root under its declared name
    pub fn with_bundle(mut self, name: impl Into<String>, views: impl Into<PathBuf>) -> Self {
        self.bundle_views.insert(name.into(), views.into());
        self
    }

    /// Translate an identifier to the file path it would live at
    ///
    /// Returns `None` when the identifier names a bundle this locator does
    /// not know about.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        if let Some(reference) = name.strip_prefix('@') {
            let (bundle, rest) = reference.split_once('/')?;
            return Some(self.bundle_root(bundle)?.join(rest));
        }

        if let Some((bundle, controller, rest)) = split_logical_name(name) {
            let root = if bundle.is_empty() {
                &self.app_views
            } else {
                self.bundle_root(bundle)?
            };
            return Some(if controller.is_empty() {
                root.join(rest)
            } else {
                root.join(controller).join(rest)
            });
        }

        Some(self.app_views.join(name))
    }

    /// List every template under the registered roots as an identifier
    ///
    /// Application templates come back as bare relative paths, bundle
    /// templates with their `@<BundleShort>/` prefix. Output is sorted.
    pub fn discover(&self) -> Vec<String> {
        let mut names: Vec<String> = list_relative(&self.app_views).collect();
        for (bundle, root) in &self.bundle_views {
            let short = bundle_short_name(bundle);
            names.extend(list_relative(root).map(|rel| format!("@{}/{}", short, rel)));
        }
        names.sort();
        names
    }

    fn bundle_root(&self, name: &str) -> Option<&PathBuf> {
        self.bundle_views
            .get(name)
            .or_else(|| self.bundle_views.get(&format!("{}Bundle", name)))
    }
}

impl TemplateLocator for FsTemplateLocator {
    fn exists(&self, name: &str) -> bool {
        self.locate(name).is_some_and(|path| path.is_file())
    }
}

/// Split a legacy `bundle:controller:name` logical name into its components
fn split_logical_name(name: &str) -> Option<(&str, &str, &str)> {
    let mut parts = name.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(bundle), Some(controller), Some(rest)) if !rest.is_empty() => {
            Some((bundle, controller, rest))
        }
        _ => None,
    }
}

fn list_relative(root: &Path) -> impl Iterator<Item = String> + '_ {
    WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(move |entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|rel| rel.to_string_lossy().replace('\\', "/"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, FsTemplateLocator) {
        let temp = TempDir::new().unwrap();
        let app = temp.path().join("templates");
        let news = temp.path().join("bundles/news/views");

        fs::create_dir_all(app.join("news")).unwrap();
        fs::create_dir_all(app.join("News")).unwrap();
        fs::create_dir_all(news.join("News")).unwrap();
        fs::create_dir_all(news.join("news")).unwrap();

        fs::write(app.join("news/detail.html.php"), "app modern").unwrap();
        fs::write(app.join("News/detail.html.php"), "app legacy").unwrap();
        fs::write(news.join("News/archive.html.php"), "bundle legacy").unwrap();
        fs::write(news.join("news/list.html.twig"), "bundle modern").unwrap();

        let locator = FsTemplateLocator::new(&app).with_bundle("NewsBundle", &news);
        (temp, locator)
    }

    #[test]
    fn test_modern_app_identifier() {
        let (_temp, locator) = fixture();
        assert!(locator.exists("news/detail.html.php"));
        assert!(!locator.exists("news/missing.html.php"));
    }

    #[test]
    fn test_modern_bundle_identifier_short_name() {
        let (_temp, locator) = fixture();
        assert!(locator.exists("@News/news/list.html.twig"));
        assert!(!locator.exists("@News/news/missing.html.twig"));
    }

    #[test]
    fn test_modern_identifier_unknown_bundle() {
        let (_temp, locator) = fixture();
        assert!(!locator.exists("@Shop/cart/index.html.twig"));
    }

    #[test]
    fn test_legacy_bundle_logical_name() {
        let (_temp, locator) = fixture();
        assert!(locator.exists("NewsBundle:News:archive.html.php"));
        assert!(!locator.exists("NewsBundle:News:missing.html.php"));
    }

    #[test]
    fn test_legacy_app_logical_name() {
        let (_temp, locator) = fixture();
        assert!(locator.exists(":News:detail.html.php"));
    }

    #[test]
    fn test_discover_lists_both_roots() {
        let (_temp, locator) = fixture();
        let names = locator.discover();
        assert!(names.contains(&"news/detail.html.php".to_string()));
        assert!(names.contains(&"@News/News/archive.html.php".to_string()));
        assert!(names.contains(&"@News/news/list.html.twig".to_string()));
    }
}
