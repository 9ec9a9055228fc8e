use std::sync::Arc;

use log::{debug, info, warn};
use rand::Rng;

use crate::function::basic::Log;

use super::{
    handoff::{HandoffError, TaskSender},
    task::Task,
};

/// Produces random logarithm-integration tasks.
#[derive(Debug)]
pub struct Generator {
    sender: TaskSender,
    task_count: usize,
}

impl Generator {
    pub fn new(sender: TaskSender, task_count: usize) -> Self {
        Generator { sender, task_count }
    }

    /// Runs with the thread-local generator. Returns how many tasks were
    /// handed off.
    pub fn run(self) -> usize {
        self.run_with(&mut rand::thread_rng())
    }

    pub fn run_with<R: Rng>(self, rng: &mut R) -> usize {
        let mut produced = 0;
        for i in 0..self.task_count {
            let task = match random_task(rng) {
                Some(task) => task,
                None => continue,
            };
            info!("Source {}: {}", i, task);
            match self.sender.send(task) {
                Ok(()) => produced += 1,
                Err(HandoffError::Cancelled) => {
                    debug!("generator cancelled after {} tasks", produced);
                    break;
                }
                Err(HandoffError::Disconnected) => {
                    warn!("integrator went away after {} tasks", produced);
                    break;
                }
            }
        }
        produced
    }
}

fn random_task<R: Rng>(rng: &mut R) -> Option<Task> {
    let base = rng.gen_range(1.0..10.0);
    let log = match Log::new(base) {
        Ok(log) => log,
        Err(err) => {
            warn!("skipping task: {}", err);
            return None;
        }
    };
    let left = rng.gen_range(0.0..100.0);
    let right = rng.gen_range(100.0..200.0);
    let step = rng.gen_range(0.01..1.0);
    Some(Task::new(Arc::new(log), left, right, step))
}
