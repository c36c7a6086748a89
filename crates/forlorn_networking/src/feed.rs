//! # Decode Worker
//!
//! Moves frame decoding off the transport thread.
//!
//! ```text
//! transport ──frames──► [bounded channel] ──► worker ──► [results] ──► bot
//! ```
//!
//! Decoding holds no shared state, so one worker per connection is enough
//! and several can run side by side.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, unbounded, Receiver, SendError, Sender};
use parking_lot::Mutex;

use crate::config::FeedConfig;
use crate::error::DecodeResult;
use crate::protocol::ServerMessage;

/// Worker statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedStats {
    /// Frames received.
    pub frames: u64,
    /// Frames decoded successfully.
    pub decoded: u64,
    /// Frames that failed to decode.
    pub errors: u64,
    /// Total frame bytes received.
    pub bytes: u64,
}

/// Background decoder for one connection.
pub struct FeedDecoder {
    frames: Sender<Vec<u8>>,
    results: Receiver<DecodeResult<ServerMessage>>,
    stats: Arc<Mutex<FeedStats>>,
    worker: JoinHandle<()>,
}

impl FeedDecoder {
    /// Starts the worker thread.
    pub fn spawn(config: &FeedConfig) -> std::io::Result<Self> {
        let (frame_tx, frame_rx) = bounded::<Vec<u8>>(config.channel_capacity);
        let (result_tx, result_rx) = unbounded();
        let stats = Arc::new(Mutex::new(FeedStats::default()));

        let worker_stats = Arc::clone(&stats);
        let worker = thread::Builder::new()
            .name("forlorn-feed".to_string())
            .spawn(move || run_worker(&frame_rx, &result_tx, &worker_stats))?;

        Ok(Self {
            frames: frame_tx,
            results: result_rx,
            stats,
            worker,
        })
    }

    /// Queues a frame for decoding. Blocks while the queue is full.
    pub fn push(&self, frame: Vec<u8>) -> Result<(), SendError<Vec<u8>>> {
        self.frames.send(frame)
    }

    /// Another handle for queueing frames, e.g. for the transport thread.
    ///
    /// The worker only stops once every sender is dropped.
    #[must_use]
    pub fn sender(&self) -> Sender<Vec<u8>> {
        self.frames.clone()
    }

    /// Decoded messages, in frame order.
    #[must_use]
    pub const fn results(&self) -> &Receiver<DecodeResult<ServerMessage>> {
        &self.results
    }

    /// Snapshot of the counters.
    #[must_use]
    pub fn stats(&self) -> FeedStats {
        *self.stats.lock()
    }

    /// Stops accepting frames, waits for the worker to drain the queue and
    /// returns the final counters with every result not yet received.
    pub fn shutdown(self) -> (FeedStats, Vec<DecodeResult<ServerMessage>>) {
        drop(self.frames);
        if self.worker.join().is_err() {
            tracing::error!("Feed worker panicked");
        }
        let pending = self.results.try_iter().collect();
        let stats = *self.stats.lock();
        (stats, pending)
    }
}

fn run_worker(
    frames: &Receiver<Vec<u8>>,
    results: &Sender<DecodeResult<ServerMessage>>,
    stats: &Mutex<FeedStats>,
) {
    for frame in frames {
        let result = ServerMessage::decode(&frame);
        {
            let mut stats = stats.lock();
            stats.frames += 1;
            stats.bytes += frame.len() as u64;
            match &result {
                Ok(_) => stats.decoded += 1,
                Err(_) => stats.errors += 1,
            }
        }
        if let Err(e) = &result {
            tracing::warn!("Feed frame failed to decode: {}", e);
        }
        if results.send(result).is_err() {
            tracing::debug!("Feed result receiver dropped, stopping worker");
            break;
        }
    }
}
