use log::{debug, info, warn};

use super::handoff::{HandoffError, TaskReceiver};

/// Outcome of an integrator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegratorReport {
    pub processed: usize,
    pub failed: usize,
}

/// Consumes tasks until the generator is done or the token is cancelled.
///
/// A task that fails to integrate is logged and counted; the loop keeps going.
#[derive(Debug)]
pub struct Integrator {
    receiver: TaskReceiver,
}

impl Integrator {
    pub fn new(receiver: TaskReceiver) -> Self {
        Integrator { receiver }
    }

    pub fn run(self) -> IntegratorReport {
        let mut report = IntegratorReport::default();
        loop {
            let task = match self.receiver.recv() {
                Ok(task) => task,
                Err(HandoffError::Disconnected) => {
                    debug!("generator finished, integrator draining done");
                    break;
                }
                Err(HandoffError::Cancelled) => {
                    debug!("integrator cancelled after {} tasks", report.processed);
                    break;
                }
            };

            report.processed += 1;
            match task.integrate() {
                Ok(value) => info!("Result {}: {} = {}", report.processed, task, value),
                Err(err) => {
                    report.failed += 1;
                    warn!("Result {}: {} failed: {}", report.processed, task, err);
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;
    use crate::function::basic::{Exp, Log};
    use crate::threads::{
        handoff::task_slot,
        task::{CancellationToken, Task},
    };

    #[test]
    fn test_counts_failures_and_continues() {
        let (tx, rx) = task_slot(CancellationToken::new());
        let producer = thread::spawn(move || {
            tx.send(Task::new(Arc::new(Exp), 0.0, 1.0, 0.1)).unwrap();
            tx.send(Task::new(Arc::new(Log::natural()), -1.0, 1.0, 0.1))
                .unwrap();
            tx.send(Task::new(Arc::new(Exp), 1.0, 2.0, 0.1)).unwrap();
        });

        let report = Integrator::new(rx).run();
        producer.join().unwrap();
        assert_eq!(
            report,
            IntegratorReport {
                processed: 3,
                failed: 1
            }
        );
    }
}
