//! Bundle declarations and the bundle registry
//!
//! A bundle is a modular unit owning a namespace and a set of templates.
//! The registry is built once at configuration time and is read-only
//! afterwards; resolution queries it for namespace ownership and for the
//! parent chain that decides which name legacy template paths are filed
//! under.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewfinderError};

/// A registered bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    /// Declared bundle name, e.g. `NewsBundle`
    pub name: String,

    /// Root namespace the bundle owns, e.g. `cms::news`
    pub namespace: String,

    /// Name of the bundle this one overrides, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Bundle {
    /// Create a bundle without a parent
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Bundle {
            name: name.into(),
            namespace: namespace.into(),
            parent: None,
        }
    }

    /// Set the parent bundle name
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// Registry of all registered bundles
#[derive(Debug)]
pub struct BundleRegistry {
    bundles: Vec<Bundle>,
    by_name: HashMap<String, usize>,
}

impl BundleRegistry {
    /// Create a registry from bundle declarations
    ///
    /// Rejects duplicate names, parent references to unregistered bundles,
    /// and cyclic parent chains, so later parent walks cannot dangle.
    pub fn new(bundles: Vec<Bundle>) -> Result<Self> {
        let mut by_name: HashMap<String, usize> = HashMap::new();
        for (idx, bundle) in bundles.iter().enumerate() {
            if by_name.insert(bundle.name.clone(), idx).is_some() {
                return Err(ViewfinderError::ConfigInvalid {
                    message: format!("duplicate bundle name: {}", bundle.name),
                });
            }
        }

        for bundle in &bundles {
            if let Some(parent) = &bundle.parent {
                if !by_name.contains_key(parent) {
                    return Err(ViewfinderError::ConfigInvalid {
                        message: format!(
                            "bundle {} declares unregistered parent: {}",
                            bundle.name, parent
                        ),
                    });
                }
            }
        }

        let registry = BundleRegistry { bundles, by_name };
        registry.check_parent_cycles()?;
        Ok(registry)
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        BundleRegistry {
            bundles: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Get a bundle by its declared name
    pub fn get(&self, name: &str) -> Option<&Bundle> {
        self.by_name.get(name).and_then(|&idx| self.bundles.get(idx))
    }

    /// Get all registered bundles
    pub fn all(&self) -> &[Bundle] {
        &self.bundles
    }

    /// Find the bundle owning a type path
    ///
    /// The owning bundle is the one whose root namespace is the longest
    /// prefix of the type path, compared on `::` segment boundaries.
    pub fn bundle_for_class(&self, class: &str) -> Option<&Bundle> {
        self.bundles
            .iter()
            .filter(|b| namespace_owns(&b.namespace, class))
            .max_by_key(|b| b.namespace.len())
    }

    /// Walk the parent chain up to the terminal bundle
    ///
    /// Legacy template paths are filed under the name of the topmost bundle
    /// in an override chain. Registry validation guarantees every declared
    /// parent exists and chains are acyclic.
    pub fn terminal_bundle<'a>(&'a self, bundle: &'a Bundle) -> &'a Bundle {
        let mut current = bundle;
        while let Some(parent) = current.parent.as_deref().and_then(|p| self.get(p)) {
            current = parent;
        }
        current
    }

    /// Resolve the legacy bundle name for a type path, if any bundle owns it
    pub fn legacy_bundle_name(&self, class: &str) -> Option<&str> {
        self.bundle_for_class(class)
            .map(|b| self.terminal_bundle(b).name.as_str())
    }

    fn check_parent_cycles(&self) -> Result<()> {
        for bundle in &self.bundles {
            let mut steps = 0;
            let mut current = bundle;
            while let Some(parent) = current.parent.as_deref().and_then(|p| self.get(p)) {
                steps += 1;
                if steps > self.bundles.len() {
                    return Err(ViewfinderError::ConfigInvalid {
                        message: format!(
                            "cyclic parent chain involving bundle: {}",
                            bundle.name
                        ),
                    });
                }
                current = parent;
            }
        }
        Ok(())
    }
}

/// Whether `namespace` owns `class`, i.e. is a segment-aligned prefix of it
fn namespace_owns(namespace: &str, class: &str) -> bool {
    if !class.starts_with(namespace) {
        return false;
    }
    class.len() == namespace.len() || class[namespace.len()..].starts_with("::")
}
