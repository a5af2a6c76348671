//! Batch gateway: runs a batch of actions through the executor over HTTP.
//!
//! A [`Gateway`] takes a [`BatchRequest`], calls the executor once per
//! [`Action`] in order, and returns a [`BatchResponse`] with exactly one
//! [`ActionOutcome`] per action. A failing action never aborts the batch;
//! its error text becomes that outcome's `status`.
//!
//! [`create_router`] exposes the gateway with axum:
//!
//! | Route           | Reply                                   |
//! |-----------------|-----------------------------------------|
//! | `GET /ping`     | `{"status":"ok"}`                       |
//! | `GET /tools`    | `{"tools":[...]}`                       |
//! | `POST /execute` | `{"results":[...]}`, or 400 `{"error"}` |
//!
//! # Example
//!
//! ```no_run
//! use gateway::{Gateway, serve};
//! use tokio::net::TcpListener;
//!
//! # async fn example() -> gateway::Result<()> {
//! let listener = TcpListener::bind("0.0.0.0:8081").await?;
//! serve(listener, Gateway::new()).await?;
//! # Ok(())
//! # }
//! ```

mod dispatch;
mod error;
mod routes;
mod types;

pub use dispatch::Gateway;
pub use error::{Error, Result};
pub use routes::{create_router, serve};
pub use types::{Action, ActionOutcome, BatchRequest, BatchResponse, PingResponse, ToolsResponse};
