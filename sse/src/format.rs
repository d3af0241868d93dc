use crate::coordinate::Coordinate;
use crate::error::Error;
use log::*;

/// Event name used for every coordinate pushed to a client.
pub const DEFAULT_EVENT: &str = "message";

/// Turns a raw `"lat,long"` value into an SSE block:
///
/// ```text
/// data: {"lat":"-16.48","long":"-68.08"}\n\n
/// ```
///
/// Only the `data:` field is written. `event` names the event for logging and
/// does not produce an `event:` line, so browsers deliver it as a plain
/// `message`.
pub fn format_event(event: &str, raw: &str) -> Result<String, Error> {
    let coordinate = Coordinate::parse(raw)?;
    let json = serde_json::to_string(&coordinate)?;

    trace!("Formatted {event} event: {json}");

    Ok(format!("data: {json}\n\n"))
}
