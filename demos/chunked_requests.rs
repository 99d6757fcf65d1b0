//! Chunked requests example: fetch a list of resources at most three at a time
//!
//! Run with `RUST_LOG=frameflow=trace` to see per-frame events.

use std::time::Duration;

use frameflow::combinators::{concurrent_keyed, sequential, ChunkedRunner};
use frameflow::frames::{to_frames, FrameOptions};
use frameflow::{FrameflowError, Result};
use indexmap::IndexMap;
use tokio::time::{sleep, Instant};
use tracing_subscriber::EnvFilter;

/// Stand-in for a network call with a latency proportional to the id
async fn fetch(id: u32) -> Result<String> {
    sleep(Duration::from_millis(50 + u64::from(id % 4) * 25)).await;
    if id == 404 {
        return Err(FrameflowError::Operation(format!("resource {id} not found")));
    }
    Ok(format!("resource-{id}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("frameflow=debug")),
        )
        .init();

    println!("Frameflow - Chunked Requests Example\n");

    // Step 1: bounded concurrency
    let runner = ChunkedRunner::new(3)?.with_progress_callback(|done, total| {
        println!("  frame {done}/{total} settled");
    });

    let start = Instant::now();
    let bodies = runner.run((0..10).map(|id| move || fetch(id))).await?;
    println!("Fetched {} resources in {:?}\n", bodies.len(), start.elapsed());

    // Step 2: regroup the responses into pages
    let pages = to_frames(bodies, 4, FrameOptions::new().keep_trailing(true))?;
    for (i, page) in pages.iter().enumerate() {
        println!("  page {}: {}", i + 1, page.join(", "));
    }

    // Step 3: named lookups resolved together
    let mut lookups = IndexMap::new();
    lookups.insert("profile", fetch(1));
    lookups.insert("settings", fetch(2));
    lookups.insert("history", fetch(3));
    let resolved = concurrent_keyed(lookups).await?;
    println!("\nKeyed lookups:");
    for (name, body) in &resolved {
        println!("  {name}: {body}");
    }

    // Step 4: a failing step stops the sequence
    let steps = [1, 404, 2].map(|id| move || fetch(id));
    match sequential(steps).await {
        Ok(_) => println!("\nAll steps succeeded"),
        Err(err) => println!("\nSequence aborted: {err}"),
    }

    Ok(())
}
