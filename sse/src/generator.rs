use crate::coordinate::COORDINATES;
use log::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Shortest tick a generator runs with. A zero period cannot drive a timer.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Produces a randomly chosen coordinate every `interval` until cancelled.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    interval: Duration,
}

impl Generator {
    /// `interval` is raised to [`MIN_INTERVAL`] when shorter.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
        }
    }

    /// Sends one entry of [`COORDINATES`] on `tx` per tick. The first value goes
    /// out one full interval after start.
    ///
    /// Returns once `cancel` fires or the receiver is dropped. `tx` is dropped on
    /// the way out, which closes the channel for the consumer.
    pub async fn run(self, cancel: CancellationToken, tx: mpsc::Sender<&'static str>) {
        let mut rng = StdRng::from_entropy();

        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        // A slow consumer loses ticks instead of receiving a burst afterwards.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let coordinate = COORDINATES[rng.gen_range(0..COORDINATES.len())];
                    trace!("Generated coordinate {coordinate}");

                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => break,
                        sent = tx.send(coordinate) => {
                            if sent.is_err() {
                                debug!("Coordinate receiver dropped, stopping generator");
                                break;
                            }
                        }
                    }
                }
            }
        }

        drop(ticker);
        drop(tx);

        info!("Finished generating coordinates");
    }
}
