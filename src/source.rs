//! The sample-source collaborator boundary.
//!
//! Raw accelerometer acquisition is a host-platform concern; the kernel only
//! consumes an ordered sequence of samples. This module defines the seam as a
//! trait so hosts wrap their platform sensor API and tests replay recorded or
//! synthetic sequences.
//!
//! Availability is reported once, at stream-start time. A source that cannot
//! start returns `SensorUnavailable` from `start`, and the timer is simply
//! never driven.

use crate::error::TimerError;
use crate::types::AccelSample;

/// A periodic accelerometer sample stream.
///
/// Contract:
/// - `start` is called once before any sample is drawn and reports
///   availability; it must not be retried by the kernel (retrying
///   acquisition is a host-level concern)
/// - `next_sample` yields samples in timestamp order, `None` when the stream
///   is exhausted or stopped
/// - `stop` disables delivery; subsequent `next_sample` calls return `None`
pub trait SampleSource {
    /// Starts acquisition. Errors with [`TimerError::SensorUnavailable`] if
    /// the underlying sensor cannot be started.
    fn start(&mut self) -> Result<(), TimerError>;

    /// Draws the next sample, if any.
    fn next_sample(&mut self) -> Option<AccelSample>;

    /// Stops acquisition.
    fn stop(&mut self);
}

/// A vector-backed source that replays a fixed sequence of samples.
///
/// Used by tests and demo programs in place of a live sensor. Can be
/// constructed in an "unavailable" mode to exercise the stream-start failure
/// path.
pub struct ReplaySource {
    samples: Vec<AccelSample>,
    cursor: usize,
    started: bool,
    available: bool,
}

impl ReplaySource {
    /// Creates a source that will replay the given samples in order.
    pub fn new(samples: Vec<AccelSample>) -> Self {
        Self {
            samples,
            cursor: 0,
            started: false,
            available: true,
        }
    }

    /// Creates a source whose `start` fails with `SensorUnavailable`.
    pub fn unavailable() -> Self {
        Self {
            samples: Vec::new(),
            cursor: 0,
            started: false,
            available: false,
        }
    }

    /// Samples not yet delivered.
    pub fn remaining(&self) -> usize {
        self.samples.len().saturating_sub(self.cursor)
    }
}

impl SampleSource for ReplaySource {
    fn start(&mut self) -> Result<(), TimerError> {
        if !self.available {
            return Err(TimerError::SensorUnavailable(
                "replay source constructed as unavailable".into(),
            ));
        }
        self.started = true;
        Ok(())
    }

    fn next_sample(&mut self) -> Option<AccelSample> {
        if !self.started {
            return None;
        }
        let sample = self.samples.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(sample)
    }

    fn stop(&mut self) {
        self.started = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_source_delivers_in_order() {
        let mut source = ReplaySource::new(vec![
            AccelSample::new(0, 1.0, 0.0),
            AccelSample::new(10, 2.0, 0.0),
        ]);

        // Nothing before start.
        assert!(source.next_sample().is_none());

        source.start().unwrap();
        assert_eq!(source.next_sample().unwrap().timestamp_ms, 0);
        assert_eq!(source.next_sample().unwrap().timestamp_ms, 10);
        assert!(source.next_sample().is_none());
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_stop_halts_delivery() {
        let mut source = ReplaySource::new(vec![
            AccelSample::new(0, 1.0, 0.0),
            AccelSample::new(10, 1.0, 0.0),
        ]);
        source.start().unwrap();
        source.next_sample().unwrap();

        source.stop();
        assert!(source.next_sample().is_none());
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_unavailable_source_fails_at_start() {
        let mut source = ReplaySource::unavailable();
        let err = source.start().unwrap_err();
        assert!(matches!(err, TimerError::SensorUnavailable(_)));
        assert!(source.next_sample().is_none());
    }
}
