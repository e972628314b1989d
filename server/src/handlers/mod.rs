//! Request handlers for catalog operations.
//!
//! Every handler loads the full catalog from the store, acts on it in memory
//! and, for mutations, saves it back. Store access is blocking and runs on
//! the blocking thread pool.

mod list;
mod write;

pub use list::*;
pub use write::*;

use crate::error::{AppError, Result};

/// Run blocking store work off the async executor.
async fn run_blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(format!("blocking task failed: {}", e)))?
}
