//! Host-facing run orchestration.
//!
//! [`RunSession`] ties the pieces together the way a host application would:
//! it owns the timer and the sample source, pumps samples through the state
//! machine, hands every event to a sink, stops acquisition when the run
//! finishes, and performs the explicit reset back to idle.
//!
//! The session imposes no threading model. The host schedules `pump` however
//! it delivers samples (a periodic callback, a drain loop over a recording);
//! calls must be serialized.

use crate::error::TimerError;
use crate::source::SampleSource;
use crate::timer::{MotionTimer, TimerConfig};
use crate::types::{RunRecord, TimerEvent};

/// Consumer of observable timer events.
///
/// Implemented for any `FnMut(&TimerEvent)` closure, so a display or
/// telemetry layer can subscribe without a dedicated type.
pub trait EventSink {
    /// Receives one event. Called in emission order.
    fn on_event(&mut self, event: &TimerEvent);
}

impl<F: FnMut(&TimerEvent)> EventSink for F {
    fn on_event(&mut self, event: &TimerEvent) {
        self(event)
    }
}

/// One measurement session: a timer, its sample source, and the run record.
///
/// Lifecycle: [`start`](RunSession::start) begins acquisition (reporting
/// `SensorUnavailable` once, at stream-start time), [`pump`](RunSession::pump)
/// drains available samples through the timer, and after a finished run the
/// host reads [`last_run`](RunSession::last_run) and calls
/// [`reset`](RunSession::reset) before measuring again.
pub struct RunSession<S: SampleSource> {
    timer: MotionTimer,
    source: S,
    acquiring: bool,
    last_run: Option<RunRecord>,
}

impl<S: SampleSource> RunSession<S> {
    /// Creates a session over the given source with the given tuning.
    pub fn new(config: TimerConfig, source: S) -> Self {
        Self {
            timer: MotionTimer::new(config),
            source,
            acquiring: false,
            last_run: None,
        }
    }

    /// Starts sample acquisition.
    ///
    /// On `SensorUnavailable` the timer is never driven and remains idle;
    /// whether to retry is the host's decision.
    pub fn start(&mut self) -> Result<(), TimerError> {
        self.source.start()?;
        self.acquiring = true;
        log::info!("sample acquisition started");
        Ok(())
    }

    /// Drains every sample currently available from the source through the
    /// timer, dispatching events to the sink.
    ///
    /// When a run finishes, acquisition is stopped, the run is recorded, and
    /// remaining samples are left in the source. Returns the number of
    /// samples processed.
    pub fn pump(&mut self, sink: &mut dyn EventSink) -> Result<usize, TimerError> {
        let mut processed = 0;

        while self.acquiring {
            let Some(sample) = self.source.next_sample() else {
                break;
            };
            processed += 1;

            let events = self.timer.on_sample(&sample)?;
            let finished = events.iter().any(|e| e.is_run_finished());
            for event in &events {
                sink.on_event(event);
            }

            if finished {
                self.record_finished_run()?;
                self.stop_acquisition();
            }
        }

        Ok(processed)
    }

    fn record_finished_run(&mut self) -> Result<(), TimerError> {
        // on_sample already guarantees both timestamps at the finish
        // transition; a miss here is the same internal fault.
        match (
            self.timer.start_timestamp_ms(),
            self.timer.finish_timestamp_ms(),
        ) {
            (Some(start), Some(finish)) => {
                let record = RunRecord {
                    start_timestamp_ms: start,
                    finish_timestamp_ms: finish,
                    final_speed_kmh: self.timer.speed_kmh(),
                };
                log::info!(
                    "run finished: {:.3} s, final speed {:.2} km/h",
                    record.duration_s(),
                    record.final_speed_kmh
                );
                self.last_run = Some(record);
                Ok(())
            }
            (start_ms, finish_ms) => Err(TimerError::InvariantViolation { start_ms, finish_ms }),
        }
    }

    /// Stops sample acquisition without touching timer state.
    pub fn stop_acquisition(&mut self) {
        if self.acquiring {
            self.source.stop();
            self.acquiring = false;
            log::info!("sample acquisition stopped");
        }
    }

    /// Returns the session to idle: timer reset, recorded run cleared.
    ///
    /// The record of a finished run is readable until this call.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.last_run = None;
    }

    /// Read access to the underlying timer.
    pub fn timer(&self) -> &MotionTimer {
        &self.timer
    }

    /// The most recently completed run, if the session has not been reset.
    pub fn last_run(&self) -> Option<&RunRecord> {
        self.last_run.as_ref()
    }

    /// True while the source is delivering samples.
    pub fn is_acquiring(&self) -> bool {
        self.acquiring
    }
}
