//! All-at-once execution of futures, positional and keyed

use std::future::Future;
use std::hash::Hash;

use futures::future::try_join_all;
use indexmap::IndexMap;
use tokio::task::JoinError;
use tracing::{debug, instrument};

/// Await every future together and collect their results in input order.
///
/// The futures are polled in input order and make progress interleaved on the
/// calling task; completion order does not affect the output order. The first
/// failure is returned unchanged and the remaining futures are dropped.
///
/// ```
/// use frameflow::combinators::concurrent;
/// use futures::future::ready;
///
/// # tokio_test::block_on(async {
/// let results = concurrent(vec![ready(Ok::<_, String>(1)), ready(Ok(2))]).await;
/// assert_eq!(results, Ok(vec![1, 2]));
/// # });
/// ```
#[instrument(level = "debug", skip_all)]
pub async fn concurrent<I, F, T, E>(futures: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    let futures: Vec<F> = futures.into_iter().collect();
    let count = futures.len();
    debug!(count, "Awaiting futures concurrently");

    match try_join_all(futures).await {
        Ok(results) => {
            debug!(count, "All futures resolved");
            Ok(results)
        }
        Err(err) => {
            debug!(count, "Future failed, abandoning siblings");
            Err(err)
        }
    }
}

/// Keyed form of [`concurrent`]: await every value of the map together.
///
/// The output has exactly the input's keys, in the input's insertion order.
#[instrument(level = "debug", skip_all, fields(keys = futures.len()))]
pub async fn concurrent_keyed<K, F, T, E>(futures: IndexMap<K, F>) -> Result<IndexMap<K, T>, E>
where
    K: Hash + Eq,
    F: Future<Output = Result<T, E>>,
{
    let (keys, futures): (Vec<K>, Vec<F>) = futures.into_iter().unzip();
    let values = concurrent(futures).await?;

    Ok(keys.into_iter().zip(values).collect())
}

/// Spawn every future onto the Tokio runtime and collect results in input order.
///
/// Unlike [`concurrent`], the work runs as independent tasks: after a failure
/// is returned the remaining tasks keep running detached. A panicked task is
/// reported through `E::from(JoinError)`.
///
/// Must be called from within a Tokio runtime.
#[instrument(level = "debug", skip_all)]
pub async fn concurrent_spawned<I, F, T, E>(futures: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: From<JoinError> + Send + 'static,
{
    let handles: Vec<_> = futures.into_iter().map(tokio::spawn).collect();
    debug!(tasks = handles.len(), "Spawned tasks");

    concurrent(handles.into_iter().map(|handle| async move {
        match handle.await {
            Ok(result) => result,
            Err(join_err) => Err(E::from(join_err)),
        }
    }))
    .await
}
