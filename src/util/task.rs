use std::collections::HashMap;
use tokio::task::JoinHandle;

use crate::ui::state::RequestId;

/// Handles of requests that have not reported back yet.
///
/// Superseded requests are left running; their settlements are discarded by
/// the form state instead.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<RequestId, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn(&mut self, request_id: RequestId, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(request_id, task) {
            handle.abort();
        }
    }

    pub fn finish(&mut self, request_id: RequestId) {
        self.tasks.remove(&request_id);
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
