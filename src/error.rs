//! Error taxonomy for the timing kernel.
//!
//! Two conditions are errors; everything else is observable but benign.
//! A sample arriving after the run finished is *not* an error: it is counted
//! and logged at debug level, never propagated.

use thiserror::Error;

/// Failures surfaced by the timing kernel and its sample-source boundary.
#[derive(Debug, Error)]
pub enum TimerError {
    /// The accelerometer source cannot be started. Reported once to the host
    /// at stream-start time, not per sample; the timer stays idle.
    #[error("accelerometer source unavailable: {0}")]
    SensorUnavailable(String),

    /// The finished state was reached without both run timestamps set. This
    /// indicates a bug in the transition logic and is unrecoverable: the
    /// kernel refuses to produce a wrong duration.
    #[error("run finished without both timestamps (start: {start_ms:?}, finish: {finish_ms:?})")]
    InvariantViolation {
        /// Start timestamp at the moment of the violation, if any.
        start_ms: Option<u64>,
        /// Finish timestamp at the moment of the violation, if any.
        finish_ms: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_condition() {
        let unavailable = TimerError::SensorUnavailable("no accelerometer".into());
        assert!(unavailable.to_string().contains("unavailable"));

        let violation = TimerError::InvariantViolation {
            start_ms: Some(100),
            finish_ms: None,
        };
        assert!(violation.to_string().contains("timestamps"));
    }
}
