//! `axum` surface for the embed page.
//!
//! `GET /agents/embed/{token}` maps each outcome to a status code: the
//! widget is served with `200`, a rejected referer with `403` and an unknown
//! token with `404`. Lookup and render failures are logged and answered with
//! a bare `500`.

use crate::embed::{
    domain::{EmbedOutcome, PageMetadata, QueryParams},
    ports::{AgentDirectory, EmbedPageRenderer, RenderError},
    services::EmbedPageService,
};
use axum::{
    Router,
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;

/// Route serving embed pages.
pub const EMBED_ROUTE: &str = "/agents/embed/{token}";

/// Shared state for embed page handlers.
pub struct EmbedHttpState<D, R>
where
    D: AgentDirectory,
    R: EmbedPageRenderer,
{
    service: EmbedPageService<D>,
    renderer: Arc<R>,
}

impl<D, R> EmbedHttpState<D, R>
where
    D: AgentDirectory,
    R: EmbedPageRenderer,
{
    /// Bundles the page service with a renderer.
    #[must_use]
    pub const fn new(service: EmbedPageService<D>, renderer: Arc<R>) -> Self {
        Self { service, renderer }
    }
}

impl<D, R> Clone for EmbedHttpState<D, R>
where
    D: AgentDirectory,
    R: EmbedPageRenderer,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

/// Builds the router for embed pages and the health probe.
pub fn router<D, R>(state: EmbedHttpState<D, R>) -> Router
where
    D: AgentDirectory + 'static,
    R: EmbedPageRenderer + 'static,
{
    Router::new()
        .route("/healthz", get(healthz))
        .route(EMBED_ROUTE, get(embed_page::<D, R>))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn embed_page<D, R>(
    State(state): State<EmbedHttpState<D, R>>,
    Path(token): Path<String>,
    RawQuery(raw_query): RawQuery,
    headers: HeaderMap,
) -> Response
where
    D: AgentDirectory + 'static,
    R: EmbedPageRenderer + 'static,
{
    let referer = referer_header(&headers);
    let query = raw_query
        .as_deref()
        .map(QueryParams::parse)
        .unwrap_or_default();

    let outcome = match state
        .service
        .resolve(&token, referer.as_deref(), &query)
        .await
    {
        Ok(outcome) => outcome,
        Err(error) => {
            tracing::error!(error = %error, "embed page lookup failed");
            return internal_error();
        }
    };

    match outcome {
        EmbedOutcome::NotFound => html_page(
            StatusCode::NOT_FOUND,
            state.renderer.render_not_found(&PageMetadata::fallback()),
        ),
        EmbedOutcome::DomainRejected {
            metadata,
            rejection,
        } => html_page(
            StatusCode::FORBIDDEN,
            state.renderer.render_rejection(&metadata, &rejection),
        ),
        EmbedOutcome::Widget { metadata, props } => html_page(
            StatusCode::OK,
            state.renderer.render_widget(&metadata, &props),
        ),
    }
}

/// Reads the `Referer` header. Bytes outside UTF-8 are replaced, which
/// leaves the value unparseable and therefore rejected under an allow-list.
fn referer_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::REFERER)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

fn html_page(status: StatusCode, rendered: Result<String, RenderError>) -> Response {
    match rendered {
        Ok(body) => (status, [(header::CACHE_CONTROL, "no-store")], Html(body)).into_response(),
        Err(error) => {
            tracing::error!(error = %error, "embed page render failed");
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}
