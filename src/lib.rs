//! # Frameflow
//!
//! Small combinators for orchestrating asynchronous work with deterministic
//! composition semantics.
//!
//! ## Overview
//!
//! Given a collection of independent async operations, frameflow runs them
//! all at once, strictly one after another, or in fixed-size concurrent
//! batches, and hands back results in the same order (or under the same keys)
//! as the input. A partitioning helper splits any ordered sequence into
//! fixed-length frames; batched execution is built directly on it.
//!
//! ## Quick Start
//!
//! ```rust
//! use frameflow::combinators::{concurrent_chunked, sequential};
//! use frameflow::frames::{to_frames, FrameOptions};
//!
//! # async fn example() -> frameflow::Result<()> {
//! // Ten requests, at most three in flight at a time
//! let requests = (0..10).map(|id| move || async move { Ok::<_, frameflow::FrameflowError>(id * 2) });
//! let responses = concurrent_chunked(3, requests)?.await?;
//! assert_eq!(responses.len(), 10);
//!
//! // Steps that must not overlap
//! let steps = vec![|| async { Ok::<_, frameflow::FrameflowError>("migrate") }];
//! sequential(steps).await?;
//!
//! // Plain partitioning
//! let frames = to_frames(responses, 4, FrameOptions::new().keep_trailing(true))?;
//! assert_eq!(frames.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`frames`]: fixed-length partitioning of sequences
//! - [`combinators`]: concurrent, sequential, keyed, and chunked execution

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use thiserror::Error;

/// Result type for frameflow operations
pub type Result<T> = std::result::Result<T, FrameflowError>;

/// General error type for callers who want a single error across partitioning
/// and their own operations.
///
/// The combinators themselves are generic over the operation error and never
/// wrap it; this type is a convenience for the common case.
#[derive(Error, Debug)]
pub enum FrameflowError {
    /// Invalid frame or chunk arguments
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] frames::FrameError),

    /// Failure reported by a caller-supplied operation
    #[error("Operation failed: {0}")]
    Operation(String),

    /// Join error from a spawned task
    #[error("Async join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Fixed-length partitioning
pub mod frames;

/// Execution combinators
pub mod combinators;

pub use combinators::{
    concurrent, concurrent_chunked, concurrent_keyed, concurrent_spawned, sequential,
    sequential_keyed, ChunkedRunner,
};
pub use frames::{to_frames, FrameError, FrameOptions};
