use crate::error::Result;
use crate::sse::body::BodySink;
use async_stream::stream;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use log::*;
use service::AppState;
use sse::{EventSink, Outcome, Session};
use std::convert::Infallible;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// GET /random-coord
///
/// Streams one random coordinate per tick as `text/event-stream` until the
/// client disconnects.
pub(crate) async fn random_coord_handler(State(app_state): State<AppState>) -> Result<Response> {
    info!("Request received for coordinates");

    let (sink, chunks) = BodySink::channel();
    let (response, _session) = open_stream(&app_state, sink, chunks)?;

    Ok(response)
}

/// Starts a session writing to `sink` and builds the response streaming
/// `chunks`. The body owns the request's cancellation scope: dropping it, as
/// hyper does when the client goes away, stops the session's generator.
pub(crate) fn open_stream<S: EventSink>(
    app_state: &AppState,
    sink: S,
    chunks: mpsc::Receiver<Bytes>,
) -> Result<(Response, JoinHandle<Outcome>)> {
    let cancel = CancellationToken::new();
    let session = Session::open(sink, app_state.config.tick_interval(), cancel.clone())?;
    let handle = tokio::spawn(session.run());

    let request_scope = cancel.drop_guard();
    let body = stream! {
        let _request_scope = request_scope;
        let mut chunks = chunks;
        while let Some(chunk) = chunks.recv().await {
            yield Ok::<_, Infallible>(chunk);
        }
        debug!("Coordinate stream body finished");
    };

    let response = (
        [(header::CONTENT_TYPE, "text/event-stream")],
        Body::from_stream(body),
    )
        .into_response();

    Ok((response, handle))
}
