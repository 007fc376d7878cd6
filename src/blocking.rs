//! Synchronous bridges over the async clients and services.
//!
//! Every blocking operation in the crate is its async counterpart driven to
//! completion here. Callers inside a Tokio runtime must be on a blocking-pool
//! thread (see [`run_blocking`]); callers outside any runtime get a private
//! current-thread runtime for the duration of the call.

use crate::{Error, Result};
use std::future::Future;
use tokio::runtime::{Builder, Handle};

/// Drives `future` to completion on the current thread.
///
/// Must not be called from an async worker thread: Tokio panics when a
/// worker blocks on a nested future.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    match Handle::try_current() {
        Ok(handle) => Ok(handle.block_on(future)),
        Err(_) => {
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| Error::Runtime(format!("Failed to start runtime: {}", e)))?;
            Ok(runtime.block_on(future))
        }
    }
}

/// Runs a blocking closure on Tokio's blocking pool and awaits its result.
pub async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}
