//! In-process collaborators for driving the game flow service in tests:
//! a channel that records every delivery and a scheduler that queues tasks
//! until the test fires them.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use parking_lot::Mutex;

use crate::protocol::ServerMsg;
use crate::rooms::{ConnectionId, RoomCode};
use crate::services::game_flow::{
    GameFlowService, RoomChannel, ScheduledTask, TaskOutcome, TaskScheduler,
};

/// Records what each connection would have received.
#[derive(Default)]
pub struct RecordingChannel {
    inner: Mutex<Recorded>,
}

#[derive(Default)]
struct Recorded {
    subscriptions: HashMap<RoomCode, BTreeSet<ConnectionId>>,
    inbox: HashMap<ConnectionId, Vec<ServerMsg>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered to `conn` so far, oldest first.
    pub fn messages(&self, conn: ConnectionId) -> Vec<ServerMsg> {
        self.inner.lock().inbox.get(&conn).cloned().unwrap_or_default()
    }

    /// Drain and return what `conn` received.
    pub fn take(&self, conn: ConnectionId) -> Vec<ServerMsg> {
        self.inner.lock().inbox.remove(&conn).unwrap_or_default()
    }

    pub fn last(&self, conn: ConnectionId) -> Option<ServerMsg> {
        self.inner
            .lock()
            .inbox
            .get(&conn)
            .and_then(|msgs| msgs.last().cloned())
    }

    pub fn subscribers(&self, room: &RoomCode) -> BTreeSet<ConnectionId> {
        self.inner
            .lock()
            .subscriptions
            .get(room)
            .cloned()
            .unwrap_or_default()
    }
}

impl RoomChannel for RecordingChannel {
    fn subscribe(&self, conn: ConnectionId, room: &RoomCode) {
        self.inner
            .lock()
            .subscriptions
            .entry(room.clone())
            .or_default()
            .insert(conn);
    }

    fn unsubscribe(&self, conn: ConnectionId, room: &RoomCode) {
        let mut inner = self.inner.lock();
        if let Some(members) = inner.subscriptions.get_mut(room) {
            members.remove(&conn);
            if members.is_empty() {
                inner.subscriptions.remove(room);
            }
        }
    }

    fn publish(&self, room: &RoomCode, msg: ServerMsg) {
        let mut inner = self.inner.lock();
        let members: Vec<ConnectionId> = inner
            .subscriptions
            .get(room)
            .map(|m| m.iter().copied().collect())
            .unwrap_or_default();
        for conn in members {
            inner.inbox.entry(conn).or_default().push(msg.clone());
        }
    }

    fn send(&self, conn: ConnectionId, msg: ServerMsg) {
        self.inner.lock().inbox.entry(conn).or_default().push(msg);
    }
}

/// Queues scheduled tasks; nothing runs until the test says so.
#[derive(Default)]
pub struct ManualScheduler {
    queue: Mutex<Vec<(Duration, ScheduledTask)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Vec<ScheduledTask> {
        self.queue.lock().iter().map(|(_, t)| t.clone()).collect()
    }

    pub fn pending_with_delays(&self) -> Vec<(Duration, ScheduledTask)> {
        self.queue.lock().clone()
    }

    /// Remove and return every queued task.
    pub fn take(&self) -> Vec<ScheduledTask> {
        self.queue.lock().drain(..).map(|(_, t)| t).collect()
    }

    /// Fire queued tasks, including ones they schedule, until the queue is
    /// empty or `limit` tasks have run. Returns the outcomes in firing order.
    pub fn run_until_idle(&self, flow: &GameFlowService, limit: usize) -> Vec<TaskOutcome> {
        let mut outcomes = Vec::new();
        while outcomes.len() < limit {
            let next = {
                let mut queue = self.queue.lock();
                if queue.is_empty() {
                    None
                } else {
                    Some(queue.remove(0).1)
                }
            };
            let Some(task) = next else { break };
            outcomes.push(flow.run_task(task));
        }
        outcomes
    }
}

impl TaskScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask, _flow: GameFlowService) {
        self.queue.lock().push((delay, task));
    }
}
