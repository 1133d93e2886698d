//! Page server
//!
//! Every request mounts its page, waits for the single fetch to settle and
//! renders the resulting state. Rejected fetches answer 502 with the
//! page's error markup; a missing post answers 404.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::BlogConfig;
use crate::helpers::blog_url;
use crate::page::{BlogListView, EventsView, LoadState, PageError, PostView};
use crate::source::ContentSource;
use crate::templates::TemplateRenderer;
use crate::Site;

/// Shown when a page fails to render; details go to the log only
const RENDER_ERROR_PAGE: &str = "<!DOCTYPE html><html><body>\
<h1>Something went wrong</h1><p>This page could not be displayed. Please try again later.</p>\
</body></html>";

/// Server state
pub struct ServerState {
    renderer: TemplateRenderer,
    source: Arc<dyn ContentSource>,
    blog: BlogConfig,
}

impl ServerState {
    pub fn new(renderer: TemplateRenderer, source: Arc<dyn ContentSource>) -> Self {
        let blog = renderer.config().blog.clone();
        Self {
            renderer,
            source,
            blog,
        }
    }
}

/// Build the router for all pages
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/blog", get(blog_handler))
        .route("/blog/", get(blog_handler))
        .route("/blog/:id", get(post_handler))
        .route("/events", get(events_handler))
        .route("/events/", get(events_handler))
        .route("/healthz", get(health_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Site, source: Arc<dyn ContentSource>, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::new(site.renderer()?, source));
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(state): State<Arc<ServerState>>) -> Redirect {
    Redirect::temporary(&blog_url(state.renderer.config()))
}

async fn blog_handler(State(state): State<Arc<ServerState>>) -> Response {
    let load = BlogListView::mount(state.source.clone(), state.blog.clone())
        .settled()
        .await;
    page_response(status_for(&load), state.renderer.render_blog(&load))
}

async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Response {
    let load = PostView::mount(state.source.clone(), id, state.blog.render_markdown)
        .settled()
        .await;
    page_response(status_for(&load), state.renderer.render_post(&load))
}

async fn events_handler(State(state): State<Arc<ServerState>>) -> Response {
    let load = EventsView::mount(state.source.clone()).settled().await;
    page_response(status_for(&load), state.renderer.render_events(&load))
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn not_found_handler(State(state): State<Arc<ServerState>>) -> Response {
    page_response(StatusCode::NOT_FOUND, state.renderer.render_not_found())
}

fn status_for<T>(load: &LoadState<T>) -> StatusCode {
    match load {
        LoadState::Loading | LoadState::Loaded(_) => StatusCode::OK,
        LoadState::Failed(PageError::NotFound) => StatusCode::NOT_FOUND,
        LoadState::Failed(PageError::LoadFailure { .. }) => StatusCode::BAD_GATEWAY,
    }
}

fn page_response(status: StatusCode, rendered: Result<String>) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(RENDER_ERROR_PAGE)).into_response()
        }
    }
}
