use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::{error::TabulatedError, function::Function, integration::integral};

/// One integration job handed from the generator to the integrator.
#[derive(Clone)]
pub struct Task {
    pub function: Arc<dyn Function + Send + Sync>,
    pub left: f64,
    pub right: f64,
    pub step: f64,
}

impl Task {
    pub fn new(
        function: Arc<dyn Function + Send + Sync>,
        left: f64,
        right: f64,
        step: f64,
    ) -> Self {
        Task {
            function,
            left,
            right,
            step,
        }
    }

    /// Integrates the task's function over its interval.
    pub fn integrate(&self) -> Result<f64, TabulatedError> {
        integral(self.function.as_ref(), self.left, self.right, self.step)
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("domain", &(self.function.left_border(), self.function.right_border()))
            .field("left", &self.left)
            .field("right", &self.right)
            .field("step", &self.step)
            .finish()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] step {}", self.left, self.right, self.step)
    }
}

/// Cooperative stop flag shared by every party of a pipeline.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
