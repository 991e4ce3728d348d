//! Modern-convention template name guessing
//!
//! The base step of resolution: compute the framework-convention path for a
//! controller and request, independent of the render engine. The seam is
//! [`TemplateGuess`]; [`ConventionGuesser`] is the default implementation.

use std::sync::Arc;

use crate::common::string_utils::{bundle_short_name, snake_case};
use crate::domain::bundle::BundleRegistry;
use crate::domain::controller::ControllerReference;
use crate::domain::request::RenderRequest;
use crate::error::{Result, ViewfinderError};
use crate::pattern::ControllerPatterns;

/// Extension of modern-convention templates, before any engine rewrite
pub const MODERN_TEMPLATE_EXTENSION: &str = "twig";

/// Computes a candidate modern template identifier for a controller
pub trait TemplateGuess: Send + Sync {
    /// Produce the modern-convention path for this controller and request
    fn guess(&self, controller: &ControllerReference, request: &RenderRequest) -> Result<String>;
}

/// Default guesser following the `@Bundle/controller/action.format.twig`
/// convention
///
/// The bundle segment is the short name (declared name minus a trailing
/// `Bundle`) of the terminal bundle in the owner's parent chain. Invokable
/// handlers collapse the controller path segment; types outside any
/// registered bundle produce an unprefixed path.
pub struct ConventionGuesser {
    registry: Arc<BundleRegistry>,
    patterns: Arc<ControllerPatterns>,
}

impl ConventionGuesser {
    /// Create a guesser over a bundle registry and pattern list
    pub fn new(registry: Arc<BundleRegistry>, patterns: Arc<ControllerPatterns>) -> Self {
        ConventionGuesser { registry, patterns }
    }
}

impl TemplateGuess for ConventionGuesser {
    fn guess(&self, controller: &ControllerReference, request: &RenderRequest) -> Result<String> {
        let class = controller.real_class();

        let Some(controller_name) = self.patterns.match_class(class) else {
            return Err(ViewfinderError::UnresolvableClassPattern {
                class: class.to_string(),
                patterns: self.patterns.describe(),
            });
        };

        let mut path = String::new();
        if let Some(bundle) = self.registry.legacy_bundle_name(class) {
            path.push('@');
            path.push_str(bundle_short_name(bundle));
            path.push('/');
        }

        if controller.is_invokable() {
            // the controller capture doubles as the action name
            path.push_str(&snake_case(&controller_name));
        } else {
            path.push_str(&snake_case(&controller_name));
            path.push('/');
            path.push_str(&snake_case(strip_action_suffix(controller.action())));
        }

        path.push('.');
        path.push_str(request.format());
        path.push('.');
        path.push_str(MODERN_TEMPLATE_EXTENSION);

        Ok(path)
    }
}

/// Strip a legacy `Action` method-name suffix, keeping modern names as-is
pub(crate) fn strip_action_suffix(action: &str) -> &str {
    action
        .strip_suffix("Action")
        .filter(|stripped| !stripped.is_empty())
        .unwrap_or(action)
}
