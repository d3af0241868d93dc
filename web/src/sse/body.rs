use async_trait::async_trait;
use axum::body::Bytes;
use sse::{Error, EventSink};
use tokio::sync::mpsc;

/// Writes SSE blocks into a streamed response body. Each flush hands the
/// buffered text to the body as one chunk, which hyper sends right away.
pub(crate) struct BodySink {
    tx: mpsc::Sender<Bytes>,
    buffer: String,
}

impl BodySink {
    /// Returns the sink and the receiving end the response body is built from.
    pub(crate) fn channel() -> (Self, mpsc::Receiver<Bytes>) {
        let (tx, rx) = mpsc::channel(1);
        (
            Self {
                tx,
                buffer: String::new(),
            },
            rx,
        )
    }
}

#[async_trait]
impl EventSink for BodySink {
    fn can_flush(&self) -> bool {
        true
    }

    async fn write(&mut self, block: &str) -> Result<(), Error> {
        if self.tx.is_closed() {
            return Err(Error::write("response body closed by client"));
        }
        self.buffer.push_str(block);
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), Error> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let chunk = Bytes::from(std::mem::take(&mut self.buffer));
        self.tx.send(chunk).await.map_err(Error::write)
    }
}
