//! Execution policies for collections of futures and deferred operations
//!
//! A *deferred operation* is any `FnOnce() -> Fut` whose future resolves to a
//! `Result`; nothing happens until the combinator invokes it. Every policy
//! preserves input order (or key order for the keyed variants) in its output
//! and fails fast: the first error is returned unchanged with no partial
//! results attached.
//!
//! - [`concurrent`] / [`concurrent_keyed`]: await everything together
//! - [`sequential`] / [`sequential_keyed`]: invoke one operation at a time
//! - [`concurrent_chunked`] / [`ChunkedRunner`]: concurrent within a chunk,
//!   sequential across chunks
//! - [`concurrent_spawned`]: like [`concurrent`], with each future on its own
//!   Tokio task

pub mod chunked;
pub mod concurrent;
pub mod sequential;

pub use chunked::{concurrent_chunked, ChunkedRunner, ProgressCallback};
pub use concurrent::{concurrent, concurrent_keyed, concurrent_spawned};
pub use sequential::{sequential, sequential_keyed};
