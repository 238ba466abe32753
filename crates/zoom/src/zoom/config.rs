use thiserror::Error;

/// Configuration for the viewport fitter.
///
/// The defaults are tuned for a display about 320 pixels wide. Setters
/// validate their argument and return the updated config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    sample_size: usize,
    max_points_on_one_side: usize,
    max_points_if_infinite: usize,
    margin_around_zero: f32,
    asymptote_threshold: f32,
    asymptote_hysteresis: f32,
    dichotomy_iterations: usize,
    minimal_coverage: f32,
}

/// Errors that can occur when validating a zoom config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sample_size must be at least 2")]
    SampleSize,

    #[error("max_points_if_infinite must be positive and below max_points_on_one_side")]
    PointCaps,

    #[error("margin_around_zero must be finite and positive")]
    Margin,

    #[error("asymptote hysteresis must be non-negative and below the threshold")]
    Asymptote,

    #[error("minimal_coverage must lie in (0, 1]")]
    Coverage,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_size: 160,
            max_points_on_one_side: 20,
            max_points_if_infinite: 5,
            margin_around_zero: 1e-2,
            asymptote_threshold: 0.2,
            asymptote_hysteresis: 0.01,
            dichotomy_iterations: 9,
            minimal_coverage: 0.3,
        }
    }
}

impl Config {
    /// Sets the number of samples used for coarse sampling and magnitude
    /// estimation.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two samples are requested.
    pub fn with_sample_size(self, sample_size: usize) -> Result<Self, ConfigError> {
        if sample_size < 2 {
            return Err(ConfigError::SampleSize);
        }
        Ok(Self { sample_size, ..self })
    }

    /// Sets how many points a one-sided sweep may find before the curve is
    /// assumed to have infinitely many, and how many are kept in that case.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < max_points_if_infinite < max_points_on_one_side`.
    pub fn with_point_caps(
        self,
        max_points_on_one_side: usize,
        max_points_if_infinite: usize,
    ) -> Result<Self, ConfigError> {
        if max_points_if_infinite == 0 || max_points_if_infinite >= max_points_on_one_side {
            return Err(ConfigError::PointCaps);
        }
        Ok(Self {
            max_points_on_one_side,
            max_points_if_infinite,
            ..self
        })
    }

    /// Sets the half width of the bracket tested around the center of the
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the margin is not finite and positive.
    pub fn with_margin_around_zero(self, margin_around_zero: f32) -> Result<Self, ConfigError> {
        if !margin_around_zero.is_finite() || margin_around_zero <= 0.0 {
            return Err(ConfigError::Margin);
        }
        Ok(Self {
            margin_around_zero,
            ..self
        })
    }

    /// Sets the slope below which a curve flattens into a horizontal
    /// asymptote, and the hysteresis around it.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 <= hysteresis < threshold`, both finite.
    pub fn with_asymptote_threshold(self, threshold: f32, hysteresis: f32) -> Result<Self, ConfigError> {
        if !threshold.is_finite() || !hysteresis.is_finite() || hysteresis < 0.0 || hysteresis >= threshold {
            return Err(ConfigError::Asymptote);
        }
        Ok(Self {
            asymptote_threshold: threshold,
            asymptote_hysteresis: hysteresis,
            ..self
        })
    }

    /// Sets the number of golden-section steps used to refine a point.
    #[must_use]
    pub fn with_dichotomy_iterations(self, dichotomy_iterations: usize) -> Self {
        Self {
            dichotomy_iterations,
            ..self
        }
    }

    /// Sets the share of a normalized axis the curve must cover for that
    /// axis to be normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the coverage is not in `(0, 1]`.
    pub fn with_minimal_coverage(self, minimal_coverage: f32) -> Result<Self, ConfigError> {
        if !(minimal_coverage > 0.0 && minimal_coverage <= 1.0) {
            return Err(ConfigError::Coverage);
        }
        Ok(Self {
            minimal_coverage,
            ..self
        })
    }

    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    #[must_use]
    pub fn max_points_on_one_side(&self) -> usize {
        self.max_points_on_one_side
    }

    #[must_use]
    pub fn max_points_if_infinite(&self) -> usize {
        self.max_points_if_infinite
    }

    #[must_use]
    pub fn margin_around_zero(&self) -> f32 {
        self.margin_around_zero
    }

    #[must_use]
    pub fn asymptote_threshold(&self) -> f32 {
        self.asymptote_threshold
    }

    #[must_use]
    pub fn asymptote_hysteresis(&self) -> f32 {
        self.asymptote_hysteresis
    }

    #[must_use]
    pub fn dichotomy_iterations(&self) -> usize {
        self.dichotomy_iterations
    }

    #[must_use]
    pub fn minimal_coverage(&self) -> f32 {
        self.minimal_coverage
    }
}
