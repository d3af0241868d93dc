//! Server-Sent Events (SSE) stream of random coordinates.
//!
//! Every client connected to the coordinate endpoint gets its own
//! [`Session`]: a [`Generator`] task picks one of five known coordinates on a
//! fixed interval and sends it over a channel, and the session relays each
//! value to the client as an SSE `data:` block.
//!
//! # Message Flow
//!
//! 1. The web layer opens a [`Session`] over an [`EventSink`] for the response
//!    body, bound to a cancellation token owned by that body.
//! 2. The generator ticks and sends a raw `"lat,long"` literal on the channel.
//! 3. The session formats it with [`format_event`], writes it and flushes.
//! 4. When the client disconnects the body is dropped, the token is cancelled,
//!    the generator stops and closes the channel, and the session returns.
//!
//! # Modules
//!
//! - `coordinate`: the fixed coordinate set and the typed [`Coordinate`]
//! - `format`: SSE wire formatting
//! - `generator`: the per-connection timer task
//! - `session`: the relay loop and the [`EventSink`] seam
//! - `error`: error kinds shared by the above

pub mod coordinate;
pub mod error;
pub mod format;
pub mod generator;
pub mod session;

pub use coordinate::{Coordinate, COORDINATES};
pub use error::{Error, ErrorKind};
pub use format::format_event;
pub use generator::Generator;
pub use session::{EventSink, Outcome, Session};
