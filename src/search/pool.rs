//! Bounded async worker pool.
//!
//! A semaphore caps how many submitted tasks run at once; a `JoinSet` owns them so teardown can
//! drain or abort. Each task reports through its own oneshot, so callers collect results in
//! whatever order they like independent of completion order.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use tokio::sync::{Semaphore, oneshot};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::error::{PoolError, PoolResult};

/// How [`WorkerPool::shutdown`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every task finished before the deadline.
    Drained,
    /// The deadline passed; `remaining` tasks were aborted.
    Aborted { remaining: usize },
}

/// Receives the result of one submitted task.
#[derive(Debug)]
pub struct TaskHandle<T> {
    rx: oneshot::Receiver<Result<T, String>>,
}

impl<T> TaskHandle<T> {
    /// Waits for the task. A panic or an abort before completion is an error.
    pub async fn join(self) -> PoolResult<T> {
        match self.rx.await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(message)) => Err(PoolError::TaskPanicked { message }),
            Err(_) => Err(PoolError::TaskCancelled),
        }
    }
}

pub struct WorkerPool {
    name: &'static str,
    workers: usize,
    permits: Arc<Semaphore>,
    tasks: JoinSet<()>,
}

impl WorkerPool {
    /// Creates a pool running at most `workers` tasks at once (minimum 1).
    pub fn new(name: &'static str, workers: usize) -> Self {
        let workers = workers.max(1);
        Self {
            name,
            workers,
            permits: Arc::new(Semaphore::new(workers)),
            tasks: JoinSet::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Tasks spawned and not yet reaped.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Queues `task`; it starts once a worker slot frees up.
    pub fn submit<F, T>(&mut self, task: F) -> TaskHandle<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let permits = Arc::clone(&self.permits);

        self.tasks.spawn(async move {
            let Ok(_permit) = permits.acquire_owned().await else {
                return;
            };
            let outcome = AssertUnwindSafe(task)
                .catch_unwind()
                .await
                .map_err(panic_message);
            // The caller may have stopped listening; nothing to do then.
            let _ = tx.send(outcome);
        });

        TaskHandle { rx }
    }

    /// Waits up to `deadline` for outstanding tasks, then aborts whatever is left.
    pub async fn shutdown(mut self, deadline: Duration) -> ShutdownOutcome {
        let drained = tokio::time::timeout(deadline, async {
            while self.tasks.join_next().await.is_some() {}
        })
        .await;

        match drained {
            Ok(()) => {
                debug!(pool = self.name, "Worker pool drained");
                ShutdownOutcome::Drained
            }
            Err(_) => {
                let remaining = self.tasks.len();
                self.tasks.abort_all();
                warn!(
                    pool = self.name,
                    remaining,
                    deadline_ms = deadline.as_millis() as u64,
                    "Worker pool shutdown deadline passed, aborting remaining tasks"
                );
                ShutdownOutcome::Aborted { remaining }
            }
        }
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("name", &self.name)
            .field("workers", &self.workers)
            .field("pending", &self.tasks.len())
            .finish()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
