//! Render request context
//!
//! The only request detail resolution needs is the negotiated output
//! format; the surrounding HTTP machinery stays outside this crate.

/// The request context a template is resolved for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    format: String,
}

impl RenderRequest {
    /// Create a request with an explicit output format (e.g. `json`)
    pub fn new(format: impl Into<String>) -> Self {
        RenderRequest {
            format: format.into(),
        }
    }

    /// Create a request with the default `html` format
    pub fn html() -> Self {
        RenderRequest::new("html")
    }

    /// The negotiated output format
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for RenderRequest {
    fn default() -> Self {
        RenderRequest::html()
    }
}
