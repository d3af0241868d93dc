//! SSE HTTP handler for the web layer.
//!
//! This module holds the Axum handler for the coordinate stream and the
//! response body transport it writes to. Generation, formatting and the relay
//! loop live in the `sse` crate.

pub(crate) mod body;
pub(crate) mod handler;
