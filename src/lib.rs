//! Sprint Timer Kernel
//!
//! A sensor-to-decision library that derives an elapsed-time measurement
//! from a stream of noisy accelerometer samples: it detects the onset of
//! motion, accumulates a velocity estimate by numerical integration of
//! acceleration, and detects a terminating event when the estimated velocity
//! crosses a fixed threshold.
//!
//! # Design Philosophy
//!
//! - **Explicit ownership**: the host constructs and owns every timer; there
//!   is no ambient global instance.
//! - **Events, not side effects**: every observable mutation is returned as
//!   a discrete event value, never fired implicitly from a property write.
//! - **Fail-loud behavior**: an internal invariant violation is a hard error,
//!   never a printed-and-ignored wrong duration.
//! - **Deterministic integration**: a fixed, configured integration step, so
//!   the same sample sequence always produces the same run.
//!
//! # Example
//!
//! ```
//! use sprint_timer::{AccelSample, MotionTimer, RunState, TimerConfig};
//!
//! let mut timer = MotionTimer::new(TimerConfig::default());
//!
//! // A sub-threshold sample changes nothing.
//! let events = timer.on_sample(&AccelSample::new(0, 0.05, 0.0)).unwrap();
//! assert!(events.is_empty());
//! assert_eq!(timer.state(), RunState::Idle);
//!
//! // The first sample above the onset threshold starts the run.
//! let events = timer.on_sample(&AccelSample::new(10, 0.2, 0.0)).unwrap();
//! assert_eq!(timer.state(), RunState::Active);
//! assert_eq!(events.len(), 2);
//! ```

pub mod error;
pub mod format;
pub mod session;
pub mod source;
pub mod timer;
pub mod types;

#[cfg(test)]
mod stress_tests;

// Re-export commonly used types
pub use error::TimerError;
pub use session::{EventSink, RunSession};
pub use source::{ReplaySource, SampleSource};
pub use timer::{MotionTimer, TimerConfig};
pub use types::{AccelSample, RunRecord, RunState, TimerEvent};
