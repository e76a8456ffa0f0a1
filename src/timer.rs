//! Motion onset detection, speed integration, and run timing.
//!
//! This module is the logical core of the crate: a three-state machine
//! (idle → active → finished) driven by periodic acceleration samples.
//!
//! Design: fixed-step numerical integration
//! - Each sample contributes `magnitude * sample_interval_s * speed_unit_factor`
//!   to the running speed estimate
//! - The first sample whose magnitude crosses the onset threshold starts the
//!   run and itself contributes to the integral
//! - The first sample whose post-update speed crosses the finish threshold
//!   ends the run
//! - O(1) per sample, no buffers, no allocation in the hot path beyond the
//!   returned event list
//!
//! The integration step is a configured constant, not derived from wall-clock
//! deltas between samples. The estimator stays simple and deterministic, but
//! the estimate degrades silently if the actual sample cadence drifts from
//! the nominal rate. Onset and finish detection are single-sample threshold
//! crossings with no debounce or hysteresis.

use crate::error::TimerError;
use crate::types::{AccelSample, RunState, TimerEvent};

/// Tunable constants for the timing kernel.
///
/// Defaults reproduce the reference system: a 100 Hz accelerometer feeding a
/// 0-to-60 km/h run timer.
#[derive(Debug, Clone, Copy)]
pub struct TimerConfig {
    /// Minimum planar acceleration magnitude that ends the idle state (m/s²).
    /// A single sample above this starts the run. Default: 0.1.
    pub motion_threshold: f64,

    /// Speed whose crossing ends the active state (km/h).
    /// Checked against the post-update speed of every sample. Default: 60.0.
    pub finish_threshold: f64,

    /// Fixed time delta assumed between consecutive samples (seconds).
    /// Must match the host's actual delivery cadence for the speed estimate
    /// to be unbiased. Default: 0.01 (100 Hz).
    pub sample_interval_s: f64,

    /// Conversion factor from integrated m/s to the reported speed unit.
    /// Default: 3.6 (m/s → km/h).
    pub speed_unit_factor: f64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            motion_threshold: 0.1,
            finish_threshold: 60.0,
            sample_interval_s: 0.01,
            speed_unit_factor: 3.6,
        }
    }
}

impl TimerConfig {
    /// Speed increment contributed by one sample of the given magnitude.
    fn speed_increment(&self, magnitude: f64) -> f64 {
        magnitude * self.sample_interval_s * self.speed_unit_factor
    }
}

/// The stateful timing kernel.
///
/// Exclusively owned by its host; there is no ambient global instance.
/// Mutates only through [`on_sample`](MotionTimer::on_sample) and
/// [`reset`](MotionTimer::reset). Calls must be serialized (single writer);
/// the kernel has no internal concurrency.
///
/// Maintains:
/// - Current run state and speed estimate
/// - Start/finish timestamps of the current run
/// - Cumulative diagnostics counters (survive reset)
pub struct MotionTimer {
    config: TimerConfig,

    state: RunState,
    speed_kmh: f64,
    start_timestamp_ms: Option<u64>,
    finish_timestamp_ms: Option<u64>,

    // Diagnostics
    total_samples: u64,
    ignored_samples: u64,
}

impl MotionTimer {
    /// Creates a new timer in the idle state with zero speed.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            state: RunState::Idle,
            speed_kmh: 0.0,
            start_timestamp_ms: None,
            finish_timestamp_ms: None,
            total_samples: 0,
            ignored_samples: 0,
        }
    }

    /// Processes one accelerometer sample.
    ///
    /// Returns the observable events produced by this sample, in emission
    /// order. Zero events means the sample changed nothing observable
    /// (sub-threshold noise while idle, or a stale sample after the finish).
    ///
    /// Errors only on an internal invariant violation: reaching the finished
    /// state without both run timestamps set. That is a bug in the transition
    /// logic and is never silently tolerated.
    pub fn on_sample(&mut self, sample: &AccelSample) -> Result<Vec<TimerEvent>, TimerError> {
        self.total_samples += 1;

        match self.state {
            RunState::Idle => {
                let magnitude = sample.magnitude();
                if magnitude <= self.config.motion_threshold {
                    return Ok(Vec::new());
                }

                // Motion onset. The triggering sample is not discarded: it
                // contributes the first increment of the integral.
                self.state = RunState::Active;
                self.start_timestamp_ms = Some(sample.timestamp_ms);

                let mut events = vec![TimerEvent::StateChanged(RunState::Active)];
                self.integrate(magnitude, sample.timestamp_ms, &mut events)?;
                Ok(events)
            }
            RunState::Active => {
                let mut events = Vec::new();
                self.integrate(sample.magnitude(), sample.timestamp_ms, &mut events)?;
                Ok(events)
            }
            RunState::Finished => {
                // Stale sample: a no-op, but observable for diagnosability.
                self.ignored_samples += 1;
                log::debug!(
                    "ignoring sample at {} ms: run already finished",
                    sample.timestamp_ms
                );
                Ok(Vec::new())
            }
        }
    }

    /// Applies one integration step and checks the finish threshold.
    ///
    /// The finish check runs against the post-update speed of every
    /// increment, including the one applied by the onset sample, so a run
    /// finishes on the first sample whose updated speed crosses the
    /// threshold and never earlier.
    fn integrate(
        &mut self,
        magnitude: f64,
        timestamp_ms: u64,
        events: &mut Vec<TimerEvent>,
    ) -> Result<(), TimerError> {
        self.speed_kmh += self.config.speed_increment(magnitude);
        events.push(TimerEvent::SpeedUpdated(self.speed_kmh));

        if self.speed_kmh > self.config.finish_threshold {
            self.state = RunState::Finished;
            self.finish_timestamp_ms = Some(timestamp_ms);
            events.push(TimerEvent::StateChanged(RunState::Finished));

            let duration_s = match (self.start_timestamp_ms, self.finish_timestamp_ms) {
                (Some(start), Some(finish)) => (finish - start) as f64 / 1000.0,
                (start_ms, finish_ms) => {
                    return Err(TimerError::InvariantViolation { start_ms, finish_ms })
                }
            };
            events.push(TimerEvent::RunFinished { duration_s });
        }

        Ok(())
    }

    /// Returns the timer to idle, clearing speed and both timestamps.
    ///
    /// Host-issued; the kernel never auto-resets. Returns no events: the
    /// host initiates the reset and already knows. Diagnostics counters are
    /// cumulative and survive.
    pub fn reset(&mut self) {
        self.state = RunState::Idle;
        self.speed_kmh = 0.0;
        self.start_timestamp_ms = None;
        self.finish_timestamp_ms = None;
    }

    /// Current phase of the state machine.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Running speed estimate in km/h. Zero while idle.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Timestamp of motion onset for the current run, if one has started.
    pub fn start_timestamp_ms(&self) -> Option<u64> {
        self.start_timestamp_ms
    }

    /// Timestamp of the finish crossing, if the run has concluded.
    pub fn finish_timestamp_ms(&self) -> Option<u64> {
        self.finish_timestamp_ms
    }

    /// Elapsed run time in seconds. `Some` only once the run has finished.
    pub fn duration_s(&self) -> Option<f64> {
        match (self.start_timestamp_ms, self.finish_timestamp_ms) {
            (Some(start), Some(finish)) => Some((finish - start) as f64 / 1000.0),
            _ => None,
        }
    }

    /// The configuration this timer was built with.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Total samples delivered over the timer's lifetime.
    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    /// Samples delivered while finished and therefore ignored.
    pub fn ignored_samples(&self) -> u64 {
        self.ignored_samples
    }
}

impl Default for MotionTimer {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}
