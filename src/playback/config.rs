//! Playback tuning: auto-play delay and log size

use crate::constants::{
    DEFAULT_LOG_CAPACITY, MAX_LOG_CAPACITY, MAX_STEP_DELAY, MIN_LOG_CAPACITY, MIN_STEP_DELAY,
};
use std::time::Duration;

/// Per-controller playback settings
///
/// Both fields are clamped on construction, so a config in hand is always
/// inside the supported ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    delay: Duration,
    log_capacity: usize,
}

impl PlaybackConfig {
    pub fn new(delay: Duration, log_capacity: usize) -> Self {
        PlaybackConfig {
            delay: delay.clamp(MIN_STEP_DELAY, MAX_STEP_DELAY),
            log_capacity: log_capacity.clamp(MIN_LOG_CAPACITY, MAX_LOG_CAPACITY),
        }
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        PlaybackConfig::new(delay, self.log_capacity)
    }

    pub fn with_log_capacity(self, log_capacity: usize) -> Self {
        PlaybackConfig::new(self.delay, log_capacity)
    }

    /// Time between two auto-play ticks
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Most descriptions the rolling log keeps
    pub fn log_capacity(&self) -> usize {
        self.log_capacity
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig::new(Duration::from_millis(1000), DEFAULT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_clamped() {
        let config = PlaybackConfig::new(Duration::from_millis(10), 100);
        assert_eq!(config.delay(), MIN_STEP_DELAY);
        assert_eq!(config.log_capacity(), MAX_LOG_CAPACITY);

        let config = config.with_delay(Duration::from_secs(60)).with_log_capacity(1);
        assert_eq!(config.delay(), MAX_STEP_DELAY);
        assert_eq!(config.log_capacity(), MIN_LOG_CAPACITY);
    }

    #[test]
    fn test_default_is_in_range() {
        let config = PlaybackConfig::default();
        assert_eq!(config.delay(), Duration::from_millis(1000));
        assert_eq!(config.log_capacity(), DEFAULT_LOG_CAPACITY);
    }
}
