//! HTTP front end.
//!
//! Every request is one render pass. Passes are serialized through a single
//! lock around the [`Dashboard`], so the loader cache only ever has one
//! writer.

pub mod page;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::{
    dashboard::{Dashboard, RenderOutput},
    errors::Result,
    panels::input::InputQuery,
    providers::DataProvider,
};

use page::PageRenderer;

pub struct AppState<P> {
    dashboard: Mutex<Dashboard<P>>,
    page: PageRenderer,
}

pub fn router<P: DataProvider + 'static>(dashboard: Dashboard<P>) -> Result<Router> {
    let state = AppState {
        dashboard: Mutex::new(dashboard),
        page: PageRenderer::new()?,
    };

    Ok(Router::new()
        .route("/", get(index::<P>))
        .route("/download", get(download::<P>))
        .route("/api/health", get(health))
        .with_state(Arc::new(state)))
}

pub async fn run<P: DataProvider + 'static>(bind: &str, dashboard: Dashboard<P>) -> anyhow::Result<()> {
    let app = router(dashboard)?;
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("bind failed: {bind}"))?;
    info!(%bind, "dashboard listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn render_pass<P: DataProvider>(
    state: &AppState<P>,
    query: &InputQuery,
) -> std::result::Result<RenderOutput, Response> {
    let inputs = query
        .resolve(today())
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()).into_response())?;

    let mut dashboard = state.dashboard.lock().await;
    dashboard.render(&inputs).await.map_err(|err| {
        error!(error = %err, "render pass failed");
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
    })
}

async fn index<P: DataProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(query): Query<InputQuery>,
) -> Response {
    let output = match render_pass(&state, &query).await {
        Ok(output) => output,
        Err(response) => return response,
    };
    match state.page.render(&output) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(error = %err, "page render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

async fn download<P: DataProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(query): Query<InputQuery>,
) -> Response {
    let output = match render_pass(&state, &query).await {
        Ok(output) => output,
        Err(response) => return response,
    };
    let export = output.presentation.download;
    (
        [
            (header::CONTENT_TYPE, export.mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.file_name),
            ),
        ],
        export.body,
    )
        .into_response()
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}
