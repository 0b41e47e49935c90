//! Batch options

/// Options for a generation batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Run entity pipelines concurrently
    pub parallel: bool,
    /// Worker threads for concurrent runs (0 = rayon's global pool)
    pub threads: usize,
    /// Reject batches whose entities derive colliding names
    pub check_collisions: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: 0,
            check_collisions: true,
        }
    }
}

impl BatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parallel execution
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set worker thread count
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set collision checking
    pub fn with_collision_check(mut self, check: bool) -> Self {
        self.check_collisions = check;
        self
    }
}
