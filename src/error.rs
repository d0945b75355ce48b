//! Errors surfaced to callers of the controller and the front end.
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Everything which can go wrong while running or draining a sort session.
///
/// Cancellation is not an error: an interrupted engine simply stops
/// (see [`Interrupted`]) and nobody ever observes its output.
#[derive(Debug, Error)]
pub enum SortError {
    /// The worker thread could not be spawned.
    #[error("failed spawning sort worker: {0}")]
    Spawn(#[source] io::Error),
    /// The worker panicked before handing over its result.
    #[error("sort worker panicked")]
    EngineFailed,
    /// Nothing was published before the drain timeout elapsed.
    #[error("no snapshot published within {0:?}")]
    DrainTimeout(Duration),
    /// The engine ended without publishing anything more.
    #[error("sort session closed before publishing")]
    SessionClosed,
    /// A full run terminated without its final snapshot.
    #[error("full run terminated without a final snapshot")]
    MissingSnapshot,
    /// Given name matches no algorithm.
    #[error("unknown sorting algorithm '{0}'")]
    UnknownAlgorithm(String),
    /// Failed reading or writing a file.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Failed (de)serializing a report or a config.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Marker returned through every pause point once the session got cancelled.
/// Algorithms propagate it with `?` and unwind immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;
