//! Template identifiers
//!
//! Two naming conventions coexist while templates migrate:
//!
//! - modern: an opaque path string such as `@News/news/detail.html.twig`,
//!   namespaced by a leading `@<BundleShort>/` prefix
//! - legacy: a structured reference serialized to a colon-joined logical
//!   name such as `NewsBundle:News:detail.html.php`
//!
//! [`ResolvedTemplate`] is what resolution returns: whichever of the two the
//! template-existence service confirmed.

use std::fmt;

/// A structured reference to a template under the legacy naming convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyTemplateReference {
    /// Owning bundle name; `None` for templates at the application root
    pub bundle: Option<String>,
    /// Controller short name; `None` for invokable handlers
    pub controller: Option<String>,
    /// Action name, `Action` suffix already stripped
    pub action: String,
    /// Request output format, e.g. `html`
    pub format: String,
    /// Render engine identifier, e.g. `php`
    pub engine: String,
}

impl LegacyTemplateReference {
    /// Create a legacy reference
    pub fn new(
        bundle: Option<String>,
        controller: Option<String>,
        action: impl Into<String>,
        format: impl Into<String>,
        engine: impl Into<String>,
    ) -> Self {
        LegacyTemplateReference {
            bundle,
            controller,
            action: action.into(),
            format: format.into(),
            engine: engine.into(),
        }
    }

    /// Clear the bundle field when it names the application's own bundle
    ///
    /// Application templates live at the top-level template root, not under
    /// a bundle-namespaced folder.
    pub fn normalize_app_bundle(&mut self, app_bundle: &str) {
        if self.bundle.as_deref() == Some(app_bundle) {
            self.bundle = None;
        }
    }

    /// The colon-joined logical name the templating service resolves
    ///
    /// Absent bundle and controller components render as empty segments,
    /// so an application-root template reads `:News:detail.html.php`.
    pub fn logical_name(&self) -> String {
        format!(
            "{}:{}:{}.{}.{}",
            self.bundle.as_deref().unwrap_or(""),
            self.controller.as_deref().unwrap_or(""),
            self.action,
            self.format,
            self.engine
        )
    }
}

impl fmt::Display for LegacyTemplateReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.logical_name())
    }
}

/// The outcome of a successful template resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTemplate {
    /// A modern-convention identifier, confirmed to exist
    Modern(String),
    /// A legacy-convention reference, confirmed to exist
    Legacy(LegacyTemplateReference),
}

impl ResolvedTemplate {
    /// The identifier to hand to the templating service
    pub fn logical_name(&self) -> String {
        match self {
            ResolvedTemplate::Modern(name) => name.clone(),
            ResolvedTemplate::Legacy(reference) => reference.logical_name(),
        }
    }

    /// Whether the modern convention won
    pub fn is_modern(&self) -> bool {
        matches!(self, ResolvedTemplate::Modern(_))
    }
}

impl fmt::Display for ResolvedTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.logical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_name() {
        let reference = LegacyTemplateReference::new(
            Some("NewsBundle".to_string()),
            Some("News".to_string()),
            "detail",
            "html",
            "php",
        );
        assert_eq!(reference.logical_name(), "NewsBundle:News:detail.html.php");
    }

    #[test]
    fn test_logical_name_empty_components() {
        let reference =
            LegacyTemplateReference::new(None, Some("News".to_string()), "detail", "html", "php");
        assert_eq!(reference.logical_name(), ":News:detail.html.php");

        let invokable = LegacyTemplateReference::new(
            Some("NewsBundle".to_string()),
            None,
            "status",
            "html",
            "php",
        );
        assert_eq!(invokable.logical_name(), "NewsBundle::status.html.php");
    }

    #[test]
    fn test_normalize_app_bundle() {
        let mut reference = LegacyTemplateReference::new(
            Some("AppBundle".to_string()),
            Some("Default".to_string()),
            "index",
            "html",
            "php",
        );
        reference.normalize_app_bundle("AppBundle");
        assert_eq!(reference.bundle, None);
        assert_eq!(reference.logical_name(), ":Default:index.html.php");
    }

    #[test]
    fn test_normalize_app_bundle_leaves_other_bundles() {
        let mut reference = LegacyTemplateReference::new(
            Some("NewsBundle".to_string()),
            Some("News".to_string()),
            "detail",
            "html",
            "php",
        );
        reference.normalize_app_bundle("AppBundle");
        assert_eq!(reference.bundle.as_deref(), Some("NewsBundle"));
    }

    #[test]
    fn test_resolved_template_display() {
        let modern = ResolvedTemplate::Modern("news/detail.html.php".to_string());
        assert_eq!(modern.to_string(), "news/detail.html.php");
        assert!(modern.is_modern());

        let legacy = ResolvedTemplate::Legacy(LegacyTemplateReference::new(
            Some("NewsBundle".to_string()),
            Some("News".to_string()),
            "detail",
            "html",
            "php",
        ));
        assert_eq!(legacy.to_string(), "NewsBundle:News:detail.html.php");
        assert!(!legacy.is_modern());
    }
}
