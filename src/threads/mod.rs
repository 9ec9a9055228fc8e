//! # Producer/consumer demo
//!
//! A generator thread creates random integration tasks and hands them one at
//! a time to an integrator thread through a single-slot handoff. Both sides
//! share a [`CancellationToken`]; cancelling it makes every blocked wait
//! return within [`handoff::POLL_INTERVAL`].

pub mod generator;
pub mod handoff;
pub mod integrator;
pub mod task;

use std::{
    thread,
    time::{Duration, Instant},
};

use log::{debug, info};
use thiserror::Error;

pub use generator::Generator;
pub use handoff::{HandoffError, TaskReceiver, TaskSender, task_slot};
pub use integrator::{Integrator, IntegratorReport};
pub use task::{CancellationToken, Task};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to spawn the {name} thread")]
    Spawn {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("the {0} thread panicked")]
    Panicked(&'static str),
}

/// Totals of a finished pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub produced: usize,
    pub processed: usize,
    pub failed: usize,
    pub cancelled: bool,
}

/// Runs a generator and an integrator on their own threads until
/// `task_count` tasks have been handled or `deadline` passes.
pub fn run_pipeline(
    task_count: usize,
    deadline: Option<Duration>,
) -> Result<PipelineReport, PipelineError> {
    let token = CancellationToken::new();
    let (sender, receiver) = task_slot(token.clone());

    let generator = thread::Builder::new()
        .name("generator".to_string())
        .spawn(move || Generator::new(sender, task_count).run())
        .map_err(|source| PipelineError::Spawn {
            name: "generator",
            source,
        })?;

    let integrator = match thread::Builder::new()
        .name("integrator".to_string())
        .spawn(move || Integrator::new(receiver).run())
    {
        Ok(handle) => handle,
        Err(source) => {
            token.cancel();
            let _ = generator.join();
            return Err(PipelineError::Spawn {
                name: "integrator",
                source,
            });
        }
    };

    let mut cancelled = false;
    if let Some(deadline) = deadline {
        let started = Instant::now();
        while !(generator.is_finished() && integrator.is_finished()) {
            if started.elapsed() >= deadline {
                info!("deadline of {:?} reached, cancelling pipeline", deadline);
                token.cancel();
                cancelled = true;
                break;
            }
            thread::sleep(handoff::POLL_INTERVAL);
        }
    }

    let produced = generator
        .join()
        .map_err(|_| PipelineError::Panicked("generator"))?;
    let IntegratorReport { processed, failed } = integrator
        .join()
        .map_err(|_| PipelineError::Panicked("integrator"))?;

    debug!(
        "pipeline done: {} produced, {} processed, {} failed",
        produced, processed, failed
    );
    Ok(PipelineReport {
        produced,
        processed,
        failed,
        cancelled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_processes_everything() {
        let report = run_pipeline(20, None).unwrap();
        assert_eq!(report.produced, 20);
        assert_eq!(report.processed, 20);
        assert_eq!(report.failed, 0);
        assert!(!report.cancelled);
    }

    #[test]
    fn test_pipeline_with_generous_deadline() {
        let report = run_pipeline(5, Some(Duration::from_secs(60))).unwrap();
        assert_eq!(report.processed, 5);
        assert!(!report.cancelled);
    }

    #[test]
    fn test_zero_tasks() {
        let report = run_pipeline(0, Some(Duration::from_secs(5))).unwrap();
        assert_eq!(report, PipelineReport::default());
    }
}
