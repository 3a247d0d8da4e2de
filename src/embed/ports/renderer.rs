//! Page rendering port.

use crate::embed::domain::{DomainRejection, PageMetadata, WidgetProps};
use thiserror::Error;

/// Turns embed outcomes into HTML documents.
pub trait EmbedPageRenderer: Send + Sync {
    /// Renders the page hosting the chat widget.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the page cannot be produced.
    fn render_widget(
        &self,
        metadata: &PageMetadata,
        props: &WidgetProps,
    ) -> Result<String, RenderError>;

    /// Renders the "Domain Not Authorized" page.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the page cannot be produced.
    fn render_rejection(
        &self,
        metadata: &PageMetadata,
        rejection: &DomainRejection,
    ) -> Result<String, RenderError>;

    /// Renders the generic not-found page.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the page cannot be produced.
    fn render_not_found(&self, metadata: &PageMetadata) -> Result<String, RenderError>;
}

/// Errors raised while rendering an embed page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Widget properties could not be serialized.
    #[error("failed to serialize widget props: {0}")]
    Props(String),

    /// A template failed to load or render.
    #[error("failed to render template '{template}': {reason}")]
    Template {
        /// Template name.
        template: String,
        /// Engine diagnostic.
        reason: String,
    },
}
