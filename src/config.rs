//! Resolver configuration (viewfinder.yaml) data structures
//!
//! Declares the application bundle, caller controller patterns and the
//! bundle registry, and assembles them into a ready [`TemplateResolver`].
//! Validation happens at build time, so a constructed resolver never runs
//! into dangling bundle references mid-request.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::bundle::{Bundle, BundleRegistry};
use crate::error::{Result, ViewfinderError};
use crate::pattern::ControllerPatterns;
use crate::resolver::convention::ConventionGuesser;
use crate::resolver::{APP_BUNDLE_NAME, TemplateResolver};
use crate::templating::TemplateLocator;

/// Resolver configuration (viewfinder.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Name of the application's own bundle
    #[serde(default = "default_app_bundle")]
    pub app_bundle: String,

    /// Caller-supplied controller patterns, tried before the framework
    /// default
    #[serde(default)]
    pub controller_patterns: Vec<String>,

    /// Registered bundles
    #[serde(default)]
    pub bundles: Vec<Bundle>,
}

fn default_app_bundle() -> String {
    APP_BUNDLE_NAME.to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            app_bundle: default_app_bundle(),
            controller_patterns: Vec::new(),
            bundles: Vec::new(),
        }
    }
}

impl ResolverConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|err| ViewfinderError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;
        serde_yaml::from_str(&contents).map_err(|err| ViewfinderError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }

    /// Serialize configuration to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Build and validate the bundle registry
    pub fn build_registry(&self) -> Result<BundleRegistry> {
        BundleRegistry::new(self.bundles.clone())
    }

    /// Assemble a resolver over the given template-existence service
    ///
    /// Uses the built-in modern-convention guesser as the base step.
    pub fn build_resolver(
        &self,
        locator: Box<dyn TemplateLocator + Send + Sync>,
    ) -> Result<TemplateResolver> {
        let registry = Arc::new(self.build_registry()?);
        let patterns = Arc::new(ControllerPatterns::new(&self.controller_patterns)?);
        let base = ConventionGuesser::new(registry.clone(), patterns.clone());
        Ok(
            TemplateResolver::new(Box::new(base), locator, registry, patterns)
                .with_app_bundle(self.app_bundle.clone()),
        )
    }
}
