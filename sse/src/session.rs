use crate::error::Error;
use crate::format::{format_event, DEFAULT_EVENT};
use crate::generator::Generator;
use async_trait::async_trait;
use log::*;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

/// The response side of a coordinate stream.
#[async_trait]
pub trait EventSink: Send + 'static {
    /// Whether written bytes can reach the client before the response ends.
    fn can_flush(&self) -> bool;

    async fn write(&mut self, block: &str) -> Result<(), Error>;

    async fn flush(&mut self) -> Result<(), Error>;
}

/// Why a session stopped streaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The generator closed its channel, normally because the client left.
    GeneratorClosed,
    /// A coordinate could not be formatted; nothing was written for it.
    FormatError,
    /// Writing or flushing to the client failed.
    WriteError,
}

/// One client's coordinate stream: a running [`Generator`] and the sink its
/// coordinates are relayed to.
pub struct Session<S> {
    sink: S,
    rx: mpsc::Receiver<&'static str>,
    generator: JoinHandle<()>,
    cancel: DropGuard,
}

impl<S: EventSink> Session<S> {
    /// Starts a generator bound to `cancel`. Fails without spawning anything
    /// when `sink` cannot flush.
    pub fn open(sink: S, interval: Duration, cancel: CancellationToken) -> Result<Self, Error> {
        if !sink.can_flush() {
            warn!("Rejecting coordinate stream: response transport cannot flush");
            return Err(Error::stream_unsupported());
        }

        let (tx, rx) = mpsc::channel(1);
        let generator = tokio::spawn(Generator::new(interval).run(cancel.clone(), tx));

        debug!("Opened coordinate stream with a {interval:?} interval");

        Ok(Self {
            sink,
            rx,
            generator,
            cancel: cancel.drop_guard(),
        })
    }

    /// Relays coordinates until the stream ends, then waits for the generator
    /// to finish.
    pub async fn run(self) -> Outcome {
        let Session {
            mut sink,
            mut rx,
            generator,
            cancel,
        } = self;

        let outcome = relay(&mut sink, &mut rx).await;

        drop(cancel);
        drop(rx);
        if let Err(e) = generator.await {
            error!("Coordinate generator task failed: {e}");
        }

        info!("Finished sending coordinates ({outcome:?})");
        outcome
    }
}

/// Formats, writes and flushes every value from `rx` until something fails or
/// the channel closes.
pub(crate) async fn relay<S: EventSink>(
    sink: &mut S,
    rx: &mut mpsc::Receiver<&'static str>,
) -> Outcome {
    while let Some(raw) = rx.recv().await {
        let block = match format_event(DEFAULT_EVENT, raw) {
            Ok(block) => block,
            Err(e) => {
                error!("Failed to format coordinate event: {e}");
                return Outcome::FormatError;
            }
        };

        if let Err(e) = sink.write(&block).await {
            warn!("{e}");
            return Outcome::WriteError;
        }

        if let Err(e) = sink.flush().await {
            warn!("{e}");
            return Outcome::WriteError;
        }
    }

    Outcome::GeneratorClosed
}
