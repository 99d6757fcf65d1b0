//! One-at-a-time execution of deferred operations

use std::future::Future;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::{debug, instrument, trace};

/// Invoke each operation only after the previous one has resolved.
///
/// Operation `i + 1` is not called until the future returned by operation `i`
/// has settled. On the first failure the remaining operations are never
/// invoked, results gathered so far are dropped, and the failure is returned
/// unchanged.
///
/// ```
/// use frameflow::combinators::sequential;
/// use futures::future::ready;
///
/// # tokio_test::block_on(async {
/// let ops = (1..=3).map(|n| move || ready(Ok::<_, String>(n * 10)));
/// assert_eq!(sequential(ops).await, Ok(vec![10, 20, 30]));
/// # });
/// ```
#[instrument(level = "debug", skip_all)]
pub async fn sequential<I, Op, Fut, T, E>(ops: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Op>,
    Op: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let ops = ops.into_iter();
    let mut results = Vec::with_capacity(ops.size_hint().0);

    for (index, op) in ops.enumerate() {
        trace!(index, "Invoking operation");
        match op().await {
            Ok(value) => results.push(value),
            Err(err) => {
                debug!(index, completed = results.len(), "Operation failed, aborting sequence");
                return Err(err);
            }
        }
    }

    debug!(count = results.len(), "Sequence completed");
    Ok(results)
}

/// Keyed form of [`sequential`], walking the map in insertion order.
#[instrument(level = "debug", skip_all, fields(keys = ops.len()))]
pub async fn sequential_keyed<K, Op, Fut, T, E>(ops: IndexMap<K, Op>) -> Result<IndexMap<K, T>, E>
where
    K: Hash + Eq,
    Op: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut results = IndexMap::with_capacity(ops.len());

    for (index, (key, op)) in ops.into_iter().enumerate() {
        trace!(index, "Invoking keyed operation");
        match op().await {
            Ok(value) => {
                results.insert(key, value);
            }
            Err(err) => {
                debug!(index, completed = results.len(), "Keyed operation failed, aborting sequence");
                return Err(err);
            }
        }
    }

    debug!(count = results.len(), "Keyed sequence completed");
    Ok(results)
}
