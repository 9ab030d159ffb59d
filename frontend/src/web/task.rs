//! Page-scoped async tasks
//!
//! A page fetch must not outlive the page. Every task spawned through a
//! [`PageScope`] is wrapped in `futures::future::Abortable`; the scope
//! registers a cleanup with the page's reactive owner that aborts whatever
//! is still in flight, so none of those tasks write to signals after the
//! page is gone.

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::on_cleanup;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Abort handle of a running task
#[derive(Debug, Clone)]
pub struct PageTask {
    handle: AbortHandle,
}

impl PageTask {
    /// Wraps `fut` so it can be aborted through the returned handle.
    pub fn bind<F: Future>(fut: F) -> (Self, Abortable<F>) {
        let (handle, registration) = AbortHandle::new_pair();
        (Self { handle }, Abortable::new(fut, registration))
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_aborted(&self) -> bool {
        self.handle.is_aborted()
    }
}

/// Owner of every task a page starts, from mount fetches to form submits.
#[derive(Clone)]
pub struct PageScope {
    label: &'static str,
    tasks: Arc<Mutex<Vec<PageTask>>>,
}

impl PageScope {
    /// Creates the scope and ties it to the current reactive owner.
    ///
    /// Must be called while the page component is being built.
    pub fn new(label: &'static str) -> Self {
        let scope = Self::detached(label);
        let on_teardown = scope.clone();
        on_cleanup(move || on_teardown.abort_all());
        scope
    }

    fn detached(label: &'static str) -> Self {
        Self {
            label,
            tasks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Spawns `fut` on the local executor under this scope.
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (task, abortable) = PageTask::bind(fut);
        self.track(task);

        let label = self.label;
        spawn_local(async move {
            if abortable.await.is_err() {
                log::debug!("[{label}] task aborted, result discarded");
            }
        });
    }

    fn track(&self, task: PageTask) {
        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.retain(|t| !t.is_aborted());
            tasks.push(task);
        }
    }

    pub fn abort_all(&self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            if !tasks.is_empty() {
                log::debug!("[{}] aborting {} task(s)", self.label, tasks.len());
            }
            for task in tasks.drain(..) {
                task.abort();
            }
        }
    }
}
