//! HTTP routes.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use executor::{Host, ToolKind};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{BatchRequest, BatchResponse, Error, Gateway, PingResponse, Result, ToolsResponse};

/// Build the router for a gateway.
///
/// - `GET /ping` liveness
/// - `GET /tools` tool discovery
/// - `POST /execute` batch dispatch
pub fn create_router<H: Host + 'static>(gateway: Arc<Gateway<H>>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/tools", get(list_tools))
        .route("/execute", post(execute::<H>))
        // Batches of any size are accepted; a size cap would add a third
        // kind of rejection besides malformed JSON.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}

/// Serve `gateway` on an already bound listener until the server stops.
pub async fn serve<H: Host + 'static>(listener: TcpListener, gateway: Gateway<H>) -> Result<()> {
    info!(addr = %listener.local_addr()?, "gateway listening");
    axum::serve(listener, create_router(Arc::new(gateway))).await?;
    Ok(())
}

async fn ping() -> Json<PingResponse> {
    Json(PingResponse::ok())
}

async fn list_tools() -> Json<ToolsResponse> {
    Json(ToolsResponse {
        tools: ToolKind::ALL.into_iter().map(ToolKind::spec).collect(),
    })
}

// The body is parsed by hand so every decode failure, including a missing
// content type, is a 400 with a JSON error rather than axum's plain-text
// rejection.
//
// Dispatch runs on its own task so a client that disconnects mid-batch
// cannot cancel it: the handler future is dropped, the batch is not.
async fn execute<H: Host + 'static>(
    State(gateway): State<Arc<Gateway<H>>>,
    body: Bytes,
) -> Result<Json<BatchResponse>> {
    let batch = BatchRequest::from_json(&body).map_err(Error::InvalidBody)?;
    let response = tokio::spawn(async move { gateway.dispatch(batch).await }).await?;
    Ok(Json(response))
}
