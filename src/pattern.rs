//! Controller pattern matching
//!
//! Patterns extract the controller short name from a fully qualified type
//! path. Callers may register their own patterns; the framework default is
//! always appended last, so caller patterns take precedence and matching is
//! strictly first-match-wins in list order.

use regex::Regex;

use crate::error::{Result, ViewfinderError};

/// Default pattern matching the framework controller naming convention,
/// e.g. `cms::news::controller::NewsController` captures `News`.
pub const DEFAULT_CONTROLLER_PATTERN: &str = "controller::(.+)Controller$";

/// An ordered list of controller-name extraction patterns
#[derive(Debug)]
pub struct ControllerPatterns {
    patterns: Vec<(String, Regex)>,
}

impl ControllerPatterns {
    /// Compile caller patterns and append the framework default
    ///
    /// Every pattern must carry exactly one capture group for the
    /// controller short name.
    pub fn new<I, S>(custom: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sources: Vec<String> = custom
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        sources.push(DEFAULT_CONTROLLER_PATTERN.to_string());

        let mut patterns = Vec::with_capacity(sources.len());
        for source in sources {
            let regex =
                Regex::new(&source).map_err(|err| ViewfinderError::InvalidPattern {
                    pattern: source.clone(),
                    reason: err.to_string(),
                })?;
            if regex.captures_len() < 2 {
                return Err(ViewfinderError::InvalidPattern {
                    pattern: source,
                    reason: "pattern must capture the controller name".to_string(),
                });
            }
            patterns.push((source, regex));
        }

        Ok(ControllerPatterns { patterns })
    }

    /// The framework default pattern only
    #[allow(clippy::expect_used)]
    pub fn defaults() -> Self {
        // the default pattern is a valid regex with one capture group
        ControllerPatterns::new(Vec::<String>::new())
            .expect("default controller pattern compiles")
    }

    /// Extract the controller short name from a type path
    ///
    /// Patterns are tried in list order; the first match wins.
    pub fn match_class(&self, class: &str) -> Option<String> {
        self.patterns.iter().find_map(|(_, regex)| {
            regex
                .captures(class)
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().to_string())
        })
    }

    /// Pattern sources in matching order, for error reporting
    pub fn describe(&self) -> String {
        let quoted: Vec<String> = self
            .patterns
            .iter()
            .map(|(source, _)| format!("\"{}\"", source))
            .collect();
        quoted.join(", ")
    }
}
