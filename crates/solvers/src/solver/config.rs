use graphscan_core::Real;
use thiserror::Error;

/// Configuration for the scanning solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<T> {
    absolute_precision: T,
    exclude_discontinuities: bool,
    max_exclusion_steps: usize,
    max_samples: usize,
    brent_max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("absolute_precision must be finite and positive")]
    Precision,

    #[error("max_samples must be at least 3")]
    Samples,

    #[error("brent_max_iters must be positive")]
    Iterations,
}

impl<T: Real> Default for Config<T> {
    fn default() -> Self {
        Self {
            absolute_precision: T::ABSOLUTE_PRECISION,
            exclude_discontinuities: T::EXCLUDE_DISCONTINUITIES,
            max_exclusion_steps: 128,
            max_samples: 100_000,
            brent_max_iters: 100,
        }
    }
}

impl<T: Real> Config<T> {
    /// Creates a new config with validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the precision is not finite and positive, if
    /// fewer than three samples are allowed, or if Brent's methods may not
    /// iterate.
    pub fn new(
        absolute_precision: T,
        exclude_discontinuities: bool,
        max_exclusion_steps: usize,
        max_samples: usize,
        brent_max_iters: usize,
    ) -> Result<Self, ConfigError> {
        if !absolute_precision.is_finite() || absolute_precision <= T::zero() {
            return Err(ConfigError::Precision);
        }
        if max_samples < 3 {
            return Err(ConfigError::Samples);
        }
        if brent_max_iters == 0 {
            return Err(ConfigError::Iterations);
        }

        Ok(Self {
            absolute_precision,
            exclude_discontinuities,
            max_exclusion_steps,
            max_samples,
            brent_max_iters,
        })
    }

    /// Returns the absolute precision requested from Brent's methods.
    #[must_use]
    pub fn absolute_precision(&self) -> T {
        self.absolute_precision
    }

    /// Returns whether brackets straddling an undefined region are narrowed
    /// before being tested.
    #[must_use]
    pub fn exclude_discontinuities(&self) -> bool {
        self.exclude_discontinuities
    }

    /// Returns the maximum number of bisections when narrowing such a bracket.
    #[must_use]
    pub fn max_exclusion_steps(&self) -> usize {
        self.max_exclusion_steps
    }

    /// Returns the maximum number of samples a single call may take.
    #[must_use]
    pub fn max_samples(&self) -> usize {
        self.max_samples
    }

    /// Returns the maximum number of iterations of Brent's methods.
    #[must_use]
    pub fn brent_max_iters(&self) -> usize {
        self.brent_max_iters
    }
}
