//! Noise-floor example: a stream that never crosses the onset threshold.
//!
//! Shows the quiet path: sub-threshold jitter produces zero events and the
//! timer never leaves idle, no matter how long the stream runs.
use sprint_timer::{AccelSample, ReplaySource, RunSession, TimerConfig, TimerEvent};

fn main() {
    env_logger::init();

    println!("=== Sprint Timer: Noise Rejection ===\n");

    // Ten seconds of deterministic jitter below the 0.1 m/s² threshold.
    let samples: Vec<AccelSample> = (0u64..1_000)
        .map(|i| {
            let jitter = 0.08 * ((i % 17) as f64 / 17.0);
            AccelSample::new(i * 10, jitter, jitter * 0.5)
        })
        .collect();

    let mut session = RunSession::new(TimerConfig::default(), ReplaySource::new(samples));
    session.start().expect("replay source is available");

    let mut event_count = 0usize;
    let processed = session
        .pump(&mut |_: &TimerEvent| event_count += 1)
        .expect("transition invariants hold");

    println!("Samples processed: {processed}");
    println!("Events emitted:    {event_count}");
    println!("Timer state:       {:?}", session.timer().state());
    println!("Speed:             {} km/h", session.timer().speed_kmh());

    assert_eq!(event_count, 0);
}
