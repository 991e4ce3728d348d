//! Controller references
//!
//! A controller is either a bound method on a handler type or an invokable
//! handler type. References carry the fully qualified type path as a string;
//! lazily loaded handlers may arrive wrapped in a generated proxy namespace,
//! which [`ControllerReference::real_class`] strips before any pattern
//! matching happens.

use std::fmt;

use crate::error::{Result, ViewfinderError};

/// Marker segment inserted into a type path by the lazy-loading proxy
/// generator. The real type path is the suffix after the last occurrence.
pub const PROXY_MARKER: &str = "__proxy__";

/// Method name under which invokable handlers are dispatched
pub const INVOKE_METHOD: &str = "__invoke";

const PROXY_INFIX: &str = "::__proxy__::";

/// A reference to the controller a request was dispatched to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerReference {
    /// A bound `(handler type, action method)` pair
    Method { class: String, action: String },
    /// A handler type dispatched through its invoke method
    Invokable { class: String },
}

impl ControllerReference {
    /// Create a method reference
    pub fn method(class: impl Into<String>, action: impl Into<String>) -> Self {
        ControllerReference::Method {
            class: class.into(),
            action: action.into(),
        }
    }

    /// Create an invokable reference
    pub fn invokable(class: impl Into<String>) -> Self {
        ControllerReference::Invokable {
            class: class.into(),
        }
    }

    /// Parse a callable string into a controller reference
    ///
    /// Accepted forms, following the type/method casing convention:
    /// - `path::to::Type::action` - a method reference (last segment starts
    ///   lowercase)
    /// - `path::to::Type` - an invokable handler (last segment starts
    ///   uppercase)
    /// - `path::to::Type::__invoke` - explicit invokable form
    ///
    /// Anything else fails with an invalid-shape error.
    pub fn from_callable(callable: &str) -> Result<Self> {
        let invalid = || ViewfinderError::InvalidControllerShape {
            given: callable.to_string(),
        };

        let trimmed = callable.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let segments: Vec<&str> = trimmed.split("::").collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid());
        }

        let last = segments[segments.len() - 1];
        if last == INVOKE_METHOD || starts_lowercase(last) {
            if last == INVOKE_METHOD {
                let class = segments[..segments.len() - 1].join("::");
                return checked_class(class, invalid).map(ControllerReference::invokable);
            }
            let class = segments[..segments.len() - 1].join("::");
            let class = checked_class(class, invalid)?;
            return Ok(ControllerReference::method(class, last));
        }

        if starts_uppercase(last) {
            return Ok(ControllerReference::invokable(trimmed));
        }

        Err(invalid())
    }

    /// The fully qualified type path as referenced, proxy wrapping included
    pub fn class(&self) -> &str {
        match self {
            ControllerReference::Method { class, .. } => class,
            ControllerReference::Invokable { class } => class,
        }
    }

    /// The action method name; invokable handlers dispatch via `__invoke`
    pub fn action(&self) -> &str {
        match self {
            ControllerReference::Method { action, .. } => action,
            ControllerReference::Invokable { .. } => INVOKE_METHOD,
        }
    }

    /// Whether this reference is an invokable handler
    pub fn is_invokable(&self) -> bool {
        matches!(self, ControllerReference::Invokable { .. })
    }

    /// The real type path with any lazy-loading proxy wrapping stripped
    ///
    /// A proxy-wrapped path looks like
    /// `generated::__proxy__::app::controller::NewsController`; the real
    /// type is the suffix after the last marker segment.
    pub fn real_class(&self) -> &str {
        let class = self.class();
        match class.rfind(PROXY_INFIX) {
            None => class,
            Some(pos) => &class[pos + PROXY_INFIX.len()..],
        }
    }
}

impl fmt::Display for ControllerReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerReference::Method { class, action } => {
                write!(f, "{}::{}", class, action)
            }
            ControllerReference::Invokable { class } => write!(f, "{}", class),
        }
    }
}

fn checked_class(
    class: String,
    invalid: impl Fn() -> ViewfinderError,
) -> Result<String> {
    let type_segment = class.rsplit("::").next().unwrap_or("");
    if starts_uppercase(type_segment) {
        Ok(class)
    } else {
        Err(invalid())
    }
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

fn starts_lowercase(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_callable_method() {
        let reference =
            ControllerReference::from_callable("app::controller::NewsController::detail").unwrap();
        assert_eq!(
            reference,
            ControllerReference::method("app::controller::NewsController", "detail")
        );
        assert_eq!(reference.action(), "detail");
        assert!(!reference.is_invokable());
    }

    #[test]
    fn test_from_callable_invokable_type() {
        let reference =
            ControllerReference::from_callable("app::controller::StatusController").unwrap();
        assert!(reference.is_invokable());
        assert_eq!(reference.class(), "app::controller::StatusController");
        assert_eq!(reference.action(), INVOKE_METHOD);
    }

    #[test]
    fn test_from_callable_explicit_invoke() {
        let reference =
            ControllerReference::from_callable("app::controller::StatusController::__invoke")
                .unwrap();
        assert!(reference.is_invokable());
        assert_eq!(reference.class(), "app::controller::StatusController");
    }

    #[test]
    fn test_from_callable_rejects_empty() {
        let err = ControllerReference::from_callable("").unwrap_err();
        assert!(matches!(
            err,
            ViewfinderError::InvalidControllerShape { .. }
        ));
    }

    #[test]
    fn test_from_callable_rejects_empty_segments() {
        assert!(ControllerReference::from_callable("app::::detail").is_err());
        assert!(ControllerReference::from_callable("::").is_err());
    }

    #[test]
    fn test_from_callable_rejects_method_without_type() {
        // all-lowercase path has no type segment to bind the method to
        assert!(ControllerReference::from_callable("app::controller").is_err());
    }

    #[test]
    fn test_real_class_without_proxy() {
        let reference = ControllerReference::method("app::controller::NewsController", "detail");
        assert_eq!(reference.real_class(), "app::controller::NewsController");
    }

    #[test]
    fn test_real_class_strips_proxy_marker() {
        let reference = ControllerReference::method(
            "generated::__proxy__::app::controller::NewsController",
            "detail",
        );
        assert_eq!(reference.real_class(), "app::controller::NewsController");
    }

    #[test]
    fn test_real_class_strips_last_marker_only() {
        let reference = ControllerReference::invokable(
            "generated::__proxy__::nested::__proxy__::app::controller::StatusController",
        );
        assert_eq!(
            reference.real_class(),
            "app::controller::StatusController"
        );
    }

    #[test]
    fn test_display() {
        let method = ControllerReference::method("app::controller::NewsController", "detail");
        assert_eq!(method.to_string(), "app::controller::NewsController::detail");
        let invokable = ControllerReference::invokable("app::controller::StatusController");
        assert_eq!(invokable.to_string(), "app::controller::StatusController");
    }
}
