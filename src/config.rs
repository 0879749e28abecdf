/*
 * Timing of the fixture. The defaults are the values the fixture ships with;
 * the binary lets every one of them be overridden for experiments.
 */

use embassy_time::Duration;

use crate::error::ConfigError;
use crate::io::Buzzer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureConfig {
    /// How long each phase lasts outside night mode.
    pub phase_duration: Duration,
    /// Granularity of every interruptible wait.
    pub poll_slice: Duration,
    /// How often the mode button is sampled.
    pub input_poll: Duration,
    /// Minimum time between two accepted button presses.
    pub debounce: Duration,
    /// Redraw cadence of the lamp and matrix in night mode.
    pub night_refresh: Duration,
    pub display_refresh: Duration,
    pub buzzer: Buzzer,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            phase_duration: Duration::from_millis(2000),
            poll_slice: Duration::from_millis(10),
            input_poll: Duration::from_millis(10),
            debounce: Duration::from_millis(250),
            night_refresh: Duration::from_millis(250),
            display_refresh: Duration::from_millis(100),
            buzzer: Buzzer::A,
        }
    }
}

impl FixtureConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("phase duration", self.phase_duration),
            ("poll slice", self.poll_slice),
            ("input poll", self.input_poll),
            ("debounce window", self.debounce),
            ("night refresh", self.night_refresh),
            ("display refresh", self.display_refresh),
        ];
        for (name, interval) in intervals {
            if interval == Duration::from_ticks(0) {
                return Err(ConfigError::ZeroInterval(name));
            }
        }

        if self.poll_slice > self.phase_duration {
            return Err(ConfigError::SliceLongerThanPhase {
                slice_ms: self.poll_slice.as_millis(),
                phase_ms: self.phase_duration.as_millis(),
            });
        }

        if self.input_poll >= self.debounce {
            return Err(ConfigError::PollNotShorterThanDebounce {
                poll_ms: self.input_poll.as_millis(),
                debounce_ms: self.debounce.as_millis(),
            });
        }

        Ok(())
    }
}
