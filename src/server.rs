//! HTTP front end: renders the page on every request and serves the static
//! files it links to.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tera::Tera;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{context::Context, render::render_site};

/// Shared, read-only state for all requests.
pub struct ServerState {
    pub context: Context,
    pub tera: Tera,
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    let static_dir = state.context.absolute(&state.context.config.static_dir);
    let assets_dir = state.context.absolute(&state.context.config.assets_dir);
    let assets_route = format!("/{}", state.context.config.assets_dir.trim_matches('/'));

    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .nest_service(&assets_route, ServeDir::new(assets_dir))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    let rendered = tokio::task::spawn_blocking(move || render_site(&state.context, &state.tera))
        .await
        .map_err(anyhow::Error::from)
        .and_then(|r| r);

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("failed to render page: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to render sitemap\n",
            )
                .into_response()
        }
    }
}

pub async fn serve(state: ServerState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(Arc::new(state));

    let listener = TcpListener::bind(addr).await?;

    tracing::info!("serving sitemap at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
