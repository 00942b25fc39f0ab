//! Deferred work that is cancelled when its handle goes away

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Handle to a spawned resumption. Dropping it aborts the task, so a
/// timer owned by a torn-down form can never fire into it.
#[derive(Debug)]
pub struct DeferredTask {
    handle: JoinHandle<()>,
}

impl DeferredTask {
    /// Run `work` on the runtime
    pub fn spawn<F>(work: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(work),
        }
    }

    /// Run `resume` once `delay` has elapsed
    pub fn after<F>(delay: Duration, resume: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::spawn(async move {
            tokio::time::sleep(delay).await;
            resume();
        })
    }

}

impl Drop for DeferredTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
