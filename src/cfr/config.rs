//! Training-run configuration and statistics.

use serde::{Deserialize, Serialize};

/// Configuration for one training run.
///
/// Vanilla CFR on the fixed Kuhn game has no algorithmic knobs; the config
/// covers how long to run and how often the driver reports progress.
///
/// # Example
/// ```
/// use kuhn_cfr::TrainConfig;
///
/// let config = TrainConfig::default().with_iterations(50_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Number of training iterations to run.
    pub iterations: u64,

    /// How many iterations between progress updates in the driver.
    pub report_interval: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            report_interval: 1_000,
        }
    }
}

impl TrainConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the iteration count.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Builder method: set the progress report interval.
    pub fn with_report_interval(mut self, interval: u64) -> Self {
        self.report_interval = interval;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.report_interval == 0 {
            return Err(ConfigError::ZeroReportInterval);
        }
        Ok(())
    }
}

/// Errors that can occur when validating a training configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The iteration count is zero; nothing would be solved.
    ZeroIterations,
    /// The report interval is zero; the driver could never report.
    ZeroReportInterval,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroIterations => write!(f, "iteration count must be at least 1"),
            ConfigError::ZeroReportInterval => write!(f, "report interval must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Statistics from one [`train`](crate::CfrSolver::train) call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainStats {
    /// Iterations completed by this call.
    pub iterations: u64,

    /// Number of unique information sets discovered.
    pub info_sets: usize,

    /// Mean game value for player 1 over this call's iterations.
    pub game_value: f64,

    /// Wall-clock time spent (in seconds).
    pub elapsed_seconds: f64,

    /// Iterations per second.
    pub iterations_per_second: f64,
}

impl TrainStats {
    /// Update iterations per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.iterations_per_second = self.iterations as f64 / self.elapsed_seconds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TrainConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = TrainConfig::default().with_iterations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroIterations));
    }

    #[test]
    fn test_zero_report_interval_rejected() {
        let config = TrainConfig::default().with_report_interval(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroReportInterval));
    }

    #[test]
    fn test_update_rate() {
        let mut stats = TrainStats {
            iterations: 100,
            elapsed_seconds: 2.0,
            ..Default::default()
        };
        stats.update_rate();
        assert_eq!(stats.iterations_per_second, 50.0);
    }
}
