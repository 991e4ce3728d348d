//! Template resolution
//!
//! This module handles:
//! - Probing the modern template name for a controller action
//! - Falling back to the legacy colon-joined name when the modern file does
//!   not exist yet
//! - Surfacing both attempted names when neither exists
//!
//! Resolution is a sequential two-attempt strategy, not exception-driven
//! control flow: each probe is an explicit existence query whose outcome is
//! inspectable.

use std::sync::Arc;

use tracing::debug;

use crate::common::string_utils::bundle_short_name;
use crate::domain::bundle::BundleRegistry;
use crate::domain::controller::ControllerReference;
use crate::domain::request::RenderRequest;
use crate::domain::template::{LegacyTemplateReference, ResolvedTemplate};
use crate::error::{Result, ViewfinderError};
use crate::pattern::ControllerPatterns;
use crate::templating::TemplateLocator;

pub mod convention;

use convention::{strip_action_suffix, TemplateGuess};

/// Engine identifier that triggers the template extension rewrite
pub const PHP_ENGINE: &str = "php";

/// Engine assumed when the caller does not name one
pub const DEFAULT_ENGINE: &str = PHP_ENGINE;

/// Name of the application's own bundle
pub const APP_BUNDLE_NAME: &str = "AppBundle";

/// Resolves the template for a controller action, modern convention first
///
/// Holds only read-only configuration set at construction; concurrent use
/// across requests is safe and resolution is idempotent for identical
/// inputs against an unchanged registry.
pub struct TemplateResolver {
    base: Box<dyn TemplateGuess>,
    locator: Box<dyn TemplateLocator + Send + Sync>,
    registry: Arc<BundleRegistry>,
    patterns: Arc<ControllerPatterns>,
    app_bundle: String,
}

impl std::fmt::Debug for TemplateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateResolver")
            .field("app_bundle", &self.app_bundle)
            .finish_non_exhaustive()
    }
}

impl TemplateResolver {
    /// Create a resolver from its collaborators
    ///
    /// The application bundle defaults to [`APP_BUNDLE_NAME`].
    pub fn new(
        base: Box<dyn TemplateGuess>,
        locator: Box<dyn TemplateLocator + Send + Sync>,
        registry: Arc<BundleRegistry>,
        patterns: Arc<ControllerPatterns>,
    ) -> Self {
        TemplateResolver {
            base,
            locator,
            registry,
            patterns,
            app_bundle: APP_BUNDLE_NAME.to_string(),
        }
    }

    /// Override the application bundle name
    pub fn with_app_bundle(mut self, name: impl Into<String>) -> Self {
        self.app_bundle = name.into();
        self
    }

    /// Resolve with the default engine
    pub fn resolve_default(
        &self,
        controller: &ControllerReference,
        request: &RenderRequest,
    ) -> Result<ResolvedTemplate> {
        self.resolve(controller, request, DEFAULT_ENGINE)
    }

    /// Resolve the template for a controller action
    ///
    /// Probes the modern-convention name first and returns it when the
    /// templating service confirms it exists. Otherwise derives the legacy
    /// reference from the controller's real type path, probes that, and
    /// fails naming both candidates when neither exists.
    pub fn resolve(
        &self,
        controller: &ControllerReference,
        request: &RenderRequest,
        engine: &str,
    ) -> Result<ResolvedTemplate> {
        let mut candidate = self.base.guess(controller, request)?;

        // Only the application's own templates live at the template root
        if let Some(stripped) = strip_app_prefix(&candidate, &self.app_bundle) {
            candidate = stripped;
        }

        // The direct-php engine predates the .twig extension convention
        if engine == PHP_ENGINE {
            candidate = candidate.replace(".twig", ".php");
        }

        debug!(template = %candidate, "probing modern template name");
        if self.locator.exists(&candidate) {
            return Ok(ResolvedTemplate::Modern(candidate));
        }

        let legacy = self.legacy_reference(controller, request, engine)?;
        let logical_name = legacy.logical_name();

        debug!(template = %logical_name, "probing legacy template name");
        if self.locator.exists(&logical_name) {
            return Ok(ResolvedTemplate::Legacy(legacy));
        }

        Err(ViewfinderError::TemplateNotFound {
            modern: candidate,
            legacy: logical_name,
        })
    }

    /// Build the legacy-convention reference for a controller action
    fn legacy_reference(
        &self,
        controller: &ControllerReference,
        request: &RenderRequest,
        engine: &str,
    ) -> Result<LegacyTemplateReference> {
        let class = controller.real_class();

        let Some(controller_name) = self.patterns.match_class(class) else {
            return Err(ViewfinderError::UnresolvableClassPattern {
                class: class.to_string(),
                patterns: self.patterns.describe(),
            });
        };

        let (controller_component, action) = if controller.is_invokable() {
            // the controller capture doubles as the action name
            (None, controller_name)
        } else {
            let action = strip_action_suffix(controller.action()).to_string();
            (Some(controller_name), action)
        };

        let bundle_name = self
            .registry
            .legacy_bundle_name(class)
            .map(str::to_string);

        let mut reference = LegacyTemplateReference::new(
            bundle_name,
            controller_component,
            action,
            request.format(),
            engine,
        );
        reference.normalize_app_bundle(&self.app_bundle);

        Ok(reference)
    }
}

/// Strip the `@App/` prefix when the identifier's bundle segment names the
/// application bundle
fn strip_app_prefix(candidate: &str, app_bundle: &str) -> Option<String> {
    let reference = candidate.strip_prefix('@')?;
    let (bundle, rest) = reference.split_once('/')?;
    if bundle == bundle_short_name(app_bundle) {
        Some(rest.to_string())
    } else {
        None
    }
}
