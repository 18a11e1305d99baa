// src/application/ports/markdown.rs
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("markdown rendering failed: {0}")]
pub struct RenderError(pub String);

impl RenderError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Converts markdown source into HTML.
///
/// Implementations hold no per-call state, so one instance is shared by every
/// request.
pub trait MarkdownRenderer: Send + Sync {
    fn render_to_html(&self, markdown: &str) -> Result<String, RenderError>;
}
