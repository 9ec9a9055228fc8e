//! Single-slot blocking handoff between one producer and one consumer.
//!
//! Both ends wait in short bounded intervals so that a cancelled token is
//! noticed even while the other side is stalled.

use std::{
    sync::mpsc::{Receiver, RecvTimeoutError, SyncSender, TrySendError, sync_channel},
    thread,
    time::Duration,
};

use log::trace;
use thiserror::Error;

use super::task::{CancellationToken, Task};

/// How long each side blocks before re-checking the token.
pub const POLL_INTERVAL: Duration = Duration::from_millis(5);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandoffError {
    #[error("handoff cancelled")]
    Cancelled,

    #[error("the other side of the handoff has gone away")]
    Disconnected,
}

/// Creates a connected pair holding at most one pending task.
pub fn task_slot(token: CancellationToken) -> (TaskSender, TaskReceiver) {
    let (tx, rx) = sync_channel(1);
    (
        TaskSender {
            tx,
            token: token.clone(),
        },
        TaskReceiver { rx, token },
    )
}

#[derive(Debug)]
pub struct TaskSender {
    tx: SyncSender<Task>,
    token: CancellationToken,
}

impl TaskSender {
    /// Places `task` in the slot, waiting while it is occupied.
    pub fn send(&self, task: Task) -> Result<(), HandoffError> {
        let mut pending = task;
        loop {
            if self.token.is_cancelled() {
                return Err(HandoffError::Cancelled);
            }
            match self.tx.try_send(pending) {
                Ok(()) => return Ok(()),
                Err(TrySendError::Full(task)) => {
                    trace!("task slot full, waiting");
                    pending = task;
                    thread::sleep(POLL_INTERVAL);
                }
                Err(TrySendError::Disconnected(_)) => return Err(HandoffError::Disconnected),
            }
        }
    }
}

#[derive(Debug)]
pub struct TaskReceiver {
    rx: Receiver<Task>,
    token: CancellationToken,
}

impl TaskReceiver {
    /// Takes the next task, waiting while the slot is empty.
    ///
    /// Returns `Disconnected` once the sender is dropped and the slot drained.
    pub fn recv(&self) -> Result<Task, HandoffError> {
        loop {
            if self.token.is_cancelled() {
                return Err(HandoffError::Cancelled);
            }
            match self.rx.recv_timeout(POLL_INTERVAL) {
                Ok(task) => return Ok(task),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return Err(HandoffError::Disconnected),
            }
        }
    }
}
