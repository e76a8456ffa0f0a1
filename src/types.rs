//! Core data types for the sprint timing kernel.
//!
//! This module defines the fundamental types used throughout the
//! sensor-to-decision pipeline. All types are small, copyable where possible,
//! and carry explicit units.
//!
//! Design principle: Types should make intent obvious. If a concept exists,
//! it gets a type. Never pass raw tuples or untyped collections across
//! boundaries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single raw accelerometer sample.
///
/// This is the minimal input contract: a two-axis acceleration vector and a
/// monotonic timestamp. The kernel never interprets the axes individually;
/// only the planar magnitude matters.
///
/// Samples are expected at a fixed nominal interval (see
/// [`TimerConfig::sample_interval_s`](crate::timer::TimerConfig)). The kernel
/// does not validate spacing; the speed estimate assumes the host honors the
/// nominal rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccelSample {
    /// Monotonic timestamp in milliseconds. Required for temporal ordering
    /// and start/finish bookkeeping.
    pub timestamp_ms: u64,

    /// Acceleration along the X axis in m/s².
    pub ax: f64,

    /// Acceleration along the Y axis in m/s².
    pub ay: f64,
}

impl AccelSample {
    /// Creates a new sample.
    ///
    /// Assumption: `timestamp_ms` must be monotonically increasing within a
    /// sequence.
    pub fn new(timestamp_ms: u64, ax: f64, ay: f64) -> Self {
        Self { timestamp_ms, ax, ay }
    }

    /// Planar acceleration magnitude in m/s².
    ///
    /// Always non-negative, which is what makes the speed integral
    /// monotonically non-decreasing within a run.
    pub fn magnitude(&self) -> f64 {
        (self.ax * self.ax + self.ay * self.ay).sqrt()
    }
}

/// Phase of a timed run.
///
/// Transitions only ever flow `Idle → Active → Finished`, driven by
/// [`MotionTimer::on_sample`](crate::timer::MotionTimer::on_sample), and back
/// to `Idle` through an explicit host-issued reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunState {
    /// Waiting for motion onset. Speed is pinned at zero.
    Idle,

    /// A run is in progress. Speed accumulates sample by sample.
    Active,

    /// The run has concluded. Timestamps and duration are fixed and readable
    /// until the next reset; further samples are ignored.
    Finished,
}

impl RunState {
    /// Returns a human-readable description of the state.
    pub fn description(&self) -> &'static str {
        match self {
            RunState::Idle => "waiting for motion onset",
            RunState::Active => "run in progress",
            RunState::Finished => "run concluded",
        }
    }

    /// Returns true if the timer is measuring (a run is underway).
    pub fn is_measuring(&self) -> bool {
        matches!(self, RunState::Active)
    }

    /// Returns true if this state is terminal until an explicit reset.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Finished)
    }
}

/// Discrete observable event emitted by the timer.
///
/// Every mutation that should be observable is returned as an event value
/// from [`MotionTimer::on_sample`](crate::timer::MotionTimer::on_sample);
/// there is no implicit observer-on-write coupling. A single sample yields
/// zero, one, or several events in emission order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimerEvent {
    /// The state machine moved to a new phase.
    StateChanged(RunState),

    /// The running speed estimate changed. Value in km/h.
    SpeedUpdated(f64),

    /// A run concluded. Duration in seconds, finish minus start timestamp.
    RunFinished {
        /// Elapsed time of the run in seconds.
        duration_s: f64,
    },
}

impl TimerEvent {
    /// Returns true if this event marks the conclusion of a run.
    pub fn is_run_finished(&self) -> bool {
        matches!(self, TimerEvent::RunFinished { .. })
    }

    /// Returns true if this event is a phase change.
    pub fn is_state_change(&self) -> bool {
        matches!(self, TimerEvent::StateChanged(_))
    }
}

/// The immutable record of a completed run.
///
/// Captured at the `Active → Finished` transition and readable until the
/// next reset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunRecord {
    /// Timestamp of the sample that triggered motion onset (ms).
    pub start_timestamp_ms: u64,

    /// Timestamp of the sample that crossed the finish threshold (ms).
    pub finish_timestamp_ms: u64,

    /// Speed estimate at the finish, in km/h.
    pub final_speed_kmh: f64,
}

impl RunRecord {
    /// Elapsed run time in seconds.
    pub fn duration_s(&self) -> f64 {
        (self.finish_timestamp_ms - self.start_timestamp_ms) as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_magnitude() {
        let sample = AccelSample::new(0, 3.0, 4.0);
        assert!((sample.magnitude() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_magnitude_is_non_negative() {
        let sample = AccelSample::new(0, -3.0, -4.0);
        assert!((sample.magnitude() - 5.0).abs() < 1e-12);

        let zero = AccelSample::new(0, 0.0, 0.0);
        assert_eq!(zero.magnitude(), 0.0);
    }

    #[test]
    fn test_run_state_predicates() {
        assert!(!RunState::Idle.is_measuring());
        assert!(RunState::Active.is_measuring());
        assert!(!RunState::Finished.is_measuring());

        assert!(RunState::Finished.is_terminal());
        assert!(!RunState::Active.is_terminal());
    }

    #[test]
    fn test_event_predicates() {
        assert!(TimerEvent::RunFinished { duration_s: 1.0 }.is_run_finished());
        assert!(!TimerEvent::SpeedUpdated(3.0).is_run_finished());
        assert!(TimerEvent::StateChanged(RunState::Active).is_state_change());
    }

    #[test]
    fn test_run_record_duration() {
        let record = RunRecord {
            start_timestamp_ms: 1_000,
            finish_timestamp_ms: 1_830,
            final_speed_kmh: 60.48,
        };
        assert!((record.duration_s() - 0.83).abs() < 1e-12);
    }
}
