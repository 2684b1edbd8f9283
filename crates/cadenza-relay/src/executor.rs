//! Work-submission contract for browsing callbacks.

use tokio::runtime::Handle;

/// A single browsing callback invocation, boxed for submission.
pub type UnitOfWork = Box<dyn FnOnce() + Send + 'static>;

/// An execution context accepting units of work for later execution.
///
/// `submit` must enqueue and return without blocking; the relay never
/// observes the work's completion, panics, or ordering relative to work
/// submitted from other threads. Whatever ordering the context applies to
/// accepted work is its own policy.
pub trait WorkExecutor: Send + Sync {
    /// Accept a unit of work. Fire-and-forget.
    fn submit(&self, work: UnitOfWork);
}

/// [`WorkExecutor`] backed by a tokio runtime.
///
/// Each submitted unit of work becomes a task on the runtime; nothing is
/// awaited on the submitting thread.
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    /// Create an executor submitting onto the given runtime handle.
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Create an executor for the runtime the caller is running inside.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, as
    /// [`Handle::current`] does.
    #[must_use]
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl WorkExecutor for TokioExecutor {
    fn submit(&self, work: UnitOfWork) {
        // Detach: the relay never joins browsing work.
        drop(self.handle.spawn(async move { work() }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_tokio_executor_runs_submitted_work() {
        let executor = TokioExecutor::current();
        let (tx, rx) = mpsc::channel();

        executor.submit(Box::new(move || {
            tx.send(7_u32).unwrap();
        }));

        let value = tokio::task::spawn_blocking(move || {
            rx.recv_timeout(Duration::from_secs(5)).unwrap()
        })
        .await
        .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_submit_returns_before_work_runs() {
        // Work that blocks until the submitter releases it: if submit were
        // synchronous this test would deadlock.
        let executor = TokioExecutor::current();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let (done_tx, done_rx) = mpsc::channel::<()>();

        executor.submit(Box::new(move || {
            release_rx.recv_timeout(Duration::from_secs(5)).unwrap();
            done_tx.send(()).unwrap();
        }));

        release_tx.send(()).unwrap();
        tokio::task::spawn_blocking(move || done_rx.recv_timeout(Duration::from_secs(5)).unwrap())
            .await
            .unwrap();
    }
}
