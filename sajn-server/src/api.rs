//! HTTP API
//!
//! `GET /api/config` resolves a demo query string the same way the web app
//! does, so links can be checked without a browser.

use std::sync::Arc;

use axum::extract::{Host, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use sajn_core::{ConfigState, DerivedProps, ParamDiagnostic};
use serde::Serialize;
use tracing::debug;

pub struct ApiState {
    /// Base of share links; the request host is used when unset
    pub public_origin: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigResponse {
    state: ConfigState,
    can_preview: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    props: Option<DerivedProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_url: Option<String>,
    embed_key: String,
    diagnostics: Vec<ParamDiagnostic>,
}

pub fn api_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/config", get(resolve_config))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Response {
    let body = serde_json::json!({ "status": "ok" });

    (
        StatusCode::OK,
        [("content-type", "application/json")],
        body.to_string(),
    )
        .into_response()
}

async fn resolve_config(
    State(state): State<Arc<ApiState>>,
    Host(host): Host,
    RawQuery(query): RawQuery,
) -> Json<ConfigResponse> {
    let (config, diagnostics) = ConfigState::parse_with_diagnostics(query.as_deref().unwrap_or(""));
    if !diagnostics.is_empty() {
        debug!("{} parameter(s) fell back to defaults", diagnostics.len());
    }

    let can_preview = config.can_preview();
    let origin = state
        .public_origin
        .clone()
        .unwrap_or_else(|| format!("http://{host}"));

    Json(ConfigResponse {
        can_preview,
        props: can_preview.then(|| config.derive_props()),
        share_url: can_preview.then(|| config.build_shareable_url(&origin)),
        embed_key: config.embed_key().to_string(),
        diagnostics,
        state: config,
    })
}
