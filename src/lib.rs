//! Viewfinder - template name resolution for controller views
//!
//! A library for locating the template that belongs to a controller action
//! in a codebase migrating from a legacy colon-joined, camelCase template
//! naming convention to a modern `@Bundle/`-prefixed, snake_case one.
//!
//! The entry point is [`TemplateResolver`]: given a controller reference, a
//! render request and an engine identifier it first probes the modern
//! convention and, when that template does not exist, falls back to the
//! legacy one. Both failure modes are surfaced as inspectable errors rather
//! than exceptions buried in control flow.

pub mod common;
pub mod compat;
pub mod config;
pub mod domain;
pub mod error;
pub mod pattern;
pub mod resolver;
pub mod templating;

pub use config::ResolverConfig;
pub use domain::bundle::{Bundle, BundleRegistry};
pub use domain::controller::ControllerReference;
pub use domain::request::RenderRequest;
pub use domain::template::{LegacyTemplateReference, ResolvedTemplate};
pub use error::{Result, ViewfinderError};
pub use pattern::ControllerPatterns;
pub use resolver::TemplateResolver;
pub use resolver::convention::{ConventionGuesser, TemplateGuess};
pub use templating::fs::FsTemplateLocator;
pub use templating::{StaticTemplateLocator, TemplateLocator};
