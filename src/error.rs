//! Error types and handling for Viewfinder
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Viewfinder operations
#[derive(Error, Diagnostic, Debug)]
pub enum ViewfinderError {
    // Controller errors
    #[error(
        "Controller reference does not look like a callable: {given}. \
         Expected a method reference or an invokable type."
    )]
    #[diagnostic(
        code(viewfinder::controller::invalid_shape),
        help("Valid forms: path::to::Type::action, path::to::Type (invokable)")
    )]
    InvalidControllerShape { given: String },

    #[error(
        "The \"{class}\" class does not look like a controller class \
         (its path must match one of the following patterns: {patterns})"
    )]
    #[diagnostic(
        code(viewfinder::controller::no_pattern_match),
        help("Register an additional controller pattern if the class naming is intentional")
    )]
    UnresolvableClassPattern { class: String, patterns: String },

    // Pattern errors
    #[error("Invalid controller pattern: {pattern}")]
    #[diagnostic(code(viewfinder::pattern::invalid))]
    InvalidPattern { pattern: String, reason: String },

    // Template errors
    #[error("The template \"{modern}\" and fallback \"{legacy}\" do not exist")]
    #[diagnostic(
        code(viewfinder::template::not_found),
        help("Create the template under the modern name, or keep the legacy file in place")
    )]
    TemplateNotFound { modern: String, legacy: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(viewfinder::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(viewfinder::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(viewfinder::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(viewfinder::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ViewfinderError {
    fn from(err: std::io::Error) -> Self {
        ViewfinderError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ViewfinderError {
    fn from(err: serde_yaml::Error) -> Self {
        ViewfinderError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<regex::Error> for ViewfinderError {
    fn from(err: regex::Error) -> Self {
        ViewfinderError::InvalidPattern {
            pattern: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ViewfinderError>;
