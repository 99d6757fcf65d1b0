//! Bounded concurrency: frames of operations run concurrently, frames run in sequence

use std::fmt;
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;

use tracing::{debug, debug_span, trace, Instrument};

use super::{concurrent, sequential};
use crate::frames::partition::split_frames;
use crate::frames::FrameError;

/// Callback invoked with `(frames_completed, total_frames)` after each frame settles
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Runs deferred operations in fixed-size concurrent chunks.
///
/// Each chunk is driven through [`concurrent`], and the chunks themselves are
/// driven through [`sequential`], so chunk `k + 1` is not started until every
/// operation in chunk `k` has resolved. A short final chunk is always run.
#[derive(Clone)]
pub struct ChunkedRunner {
    chunk_size: NonZeroUsize,
    progress_callback: Option<ProgressCallback>,
}

impl ChunkedRunner {
    /// Create a runner with the given chunk size, which must be non-zero
    pub fn new(chunk_size: usize) -> Result<Self, FrameError> {
        let chunk_size = NonZeroUsize::new(chunk_size).ok_or(FrameError::ZeroFrameLength)?;
        Ok(Self {
            chunk_size,
            progress_callback: None,
        })
    }

    /// Maximum number of operations in flight at once
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.get()
    }

    /// Set a callback reporting `(frames_completed, total_frames)`.
    ///
    /// Called once per successful frame; never called for a failed frame.
    pub fn with_progress_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.progress_callback = Some(Arc::new(callback));
        self
    }

    /// Run `ops` chunk by chunk and return every result in input order.
    ///
    /// Fails with the first operation failure; results from earlier chunks
    /// are discarded and later chunks are never started.
    pub fn run<I, Op, Fut, T, E>(&self, ops: I) -> impl Future<Output = Result<Vec<T>, E>>
    where
        I: IntoIterator<Item = Op>,
        Op: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let ops: Vec<Op> = ops.into_iter().collect();
        let total_ops = ops.len();
        let frames = split_frames(ops, self.chunk_size, true);
        let total_frames = frames.len();
        let progress = self.progress_callback.clone();
        let span = debug_span!(
            "concurrent_chunked",
            chunk_size = self.chunk_size.get(),
            total_ops,
            total_frames
        );

        async move {
            debug!("Starting chunked execution");

            let frame_ops = frames.into_iter().enumerate().map(move |(index, frame)| {
                let progress = progress.clone();
                move || async move {
                    trace!(frame = index, size = frame.len(), "Starting frame");
                    let results = concurrent(frame.into_iter().map(|op| op())).await?;
                    if let Some(callback) = &progress {
                        callback(index + 1, total_frames);
                    }
                    Ok::<_, E>(results)
                }
            });

            let per_frame = sequential(frame_ops).await?;

            let mut results = Vec::with_capacity(total_ops);
            results.extend(per_frame.into_iter().flatten());
            debug!(count = results.len(), "Chunked execution completed");
            Ok::<_, E>(results)
        }
        .instrument(span)
    }
}

impl fmt::Debug for ChunkedRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedRunner")
            .field("chunk_size", &self.chunk_size)
            .field("progress_callback", &self.progress_callback.is_some())
            .finish()
    }
}

/// Run `ops` in chunks of `chunk_size`: operations within a chunk run
/// concurrently, chunks run one after another.
///
/// Returns [`FrameError::ZeroFrameLength`] immediately, before any operation is
/// invoked, when `chunk_size` is zero.
///
/// ```
/// use frameflow::combinators::concurrent_chunked;
/// use futures::future::ready;
///
/// # tokio_test::block_on(async {
/// let ops = (0..10).map(|n| move || ready(Ok::<_, String>(n)));
/// let results = concurrent_chunked(3, ops)?.await;
/// assert_eq!(results, Ok((0..10).collect::<Vec<_>>()));
/// # Ok::<(), frameflow::frames::FrameError>(())
/// # }).unwrap();
/// ```
pub fn concurrent_chunked<I, Op, Fut, T, E>(
    chunk_size: usize,
    ops: I,
) -> Result<impl Future<Output = Result<Vec<T>, E>>, FrameError>
where
    I: IntoIterator<Item = Op>,
    Op: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    Ok(ChunkedRunner::new(chunk_size)?.run(ops))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use futures::future::ready;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_chunk_size_rejected() {
        assert_eq!(ChunkedRunner::new(0).unwrap_err(), FrameError::ZeroFrameLength);

        let ops = vec![|| ready(Ok::<u8, String>(1))];
        assert!(concurrent_chunked(0, ops).is_err());
    }

    #[tokio::test]
    async fn test_single_frame_when_chunk_exceeds_input() {
        let ops = (0..4).map(|n| move || ready(Ok::<_, String>(n * 2)));
        let results = concurrent_chunked(16, ops).unwrap().await;

        assert_eq!(results, Ok(vec![0, 2, 4, 6]));
    }

    #[tokio::test]
    async fn test_progress_reports_each_frame() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let runner = ChunkedRunner::new(3)
            .unwrap()
            .with_progress_callback(move |done, total| recorder.lock().unwrap().push((done, total)));

        let ops = (0..7).map(|n| move || ready(Ok::<_, String>(n)));
        let results = runner.run(ops).await.unwrap();

        assert_eq!(results.len(), 7);
        assert_eq!(*seen.lock().unwrap(), vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[tokio::test]
    async fn test_progress_stops_at_failed_frame() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let runner = ChunkedRunner::new(2)
            .unwrap()
            .with_progress_callback(move |done, total| recorder.lock().unwrap().push((done, total)));

        let ops = (0..6).map(|n| move || ready(if n == 3 { Err("frame two") } else { Ok(n) }));

        assert_eq!(runner.run(ops).await, Err("frame two"));
        assert_eq!(*seen.lock().unwrap(), vec![(1, 3)]);
    }

    #[test]
    fn test_debug_hides_callback() {
        let runner = ChunkedRunner::new(4).unwrap().with_progress_callback(|_, _| {});
        let rendered = format!("{runner:?}");

        assert!(rendered.contains("chunk_size: 4"));
        assert!(rendered.contains("progress_callback: true"));
    }
}
