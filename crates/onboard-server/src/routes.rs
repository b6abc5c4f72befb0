//! HTTP routes
//!
//! Two routes on the service root: `POST /` appends a submission,
//! `GET /` is the read-only liveness ping. The transport contract is
//! unusual on purpose: every reply is HTTP 200 and failures travel
//! in-band as `{status: "error", message}`, because the browser client
//! may not be able to observe anything beyond "the request completed".

use crate::sheet::RowSink;
use onboard_schema::{
    receipt_timestamp, DerivedLinks, EndpointResponse, HearingSnapshot, SubmissionRecord,
};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{info, warn};
use warp::hyper::body::Bytes;
use warp::{Filter, Reply};

/// Shared route state
pub struct ServerState {
    /// Site base for the derived document links, without trailing slash
    pub site_base: String,
    /// Destination sheet
    pub sheet: Arc<dyn RowSink>,
}

impl ServerState {
    /// Bundle configuration and sheet for the routes
    #[must_use]
    pub fn new(site_base: impl Into<String>, sheet: Arc<dyn RowSink>) -> Arc<Self> {
        Arc::new(Self {
            site_base: site_base.into(),
            sheet,
        })
    }
}

/// Build the route tree
pub fn routes(
    state: Arc<ServerState>,
) -> impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone {
    let submit = warp::post()
        .and(warp::path::end())
        // The client posts text/plain carrying JSON, so take raw bytes.
        .and(warp::body::bytes())
        .and(with_state(state))
        .and_then(handle_submit);

    let ping = warp::get().and(warp::path::end()).and_then(handle_ping);

    submit.or(ping)
}

fn with_state(
    state: Arc<ServerState>,
) -> impl Filter<Extract = (Arc<ServerState>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&state))
}

async fn handle_submit(
    body: Bytes,
    state: Arc<ServerState>,
) -> Result<impl Reply, Infallible> {
    let response = match record_submission(&state, &body) {
        Ok(response) => response,
        Err(message) => {
            warn!(%message, "submission rejected in-band");
            EndpointResponse::error(message)
        }
    };
    // Errors are in-band; the HTTP status is always 200.
    Ok(warp::reply::json(&response))
}

async fn handle_ping() -> Result<impl Reply, Infallible> {
    Ok(warp::reply::json(&EndpointResponse::ok(
        "hearing sheet intake is alive",
    )))
}

fn record_submission(state: &ServerState, body: &[u8]) -> Result<EndpointResponse, String> {
    let snapshot: HearingSnapshot =
        serde_json::from_slice(body).map_err(|err| format!("malformed payload: {err}"))?;
    snapshot.validate().map_err(|err| err.to_string())?;

    let links = DerivedLinks::derive(&state.site_base, &snapshot)
        .map_err(|err| format!("link derivation failed: {err}"))?;
    let record = SubmissionRecord::project(&snapshot, receipt_timestamp(), &links);
    state
        .sheet
        .append(&record)
        .map_err(|err| format!("sheet append failed: {err}"))?;

    info!(columns = record.columns().len(), "submission recorded");
    Ok(EndpointResponse::success("submission recorded"))
}
