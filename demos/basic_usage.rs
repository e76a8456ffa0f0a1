//! Basic usage example: replay a launch recording, time the run.
use sprint_timer::{
    format, AccelSample, ReplaySource, RunSession, TimerConfig, TimerEvent,
};

fn main() {
    env_logger::init();

    println!("=== Sprint Timer: Basic Example ===\n");

    // Simulated accelerometer stream at 10 ms spacing: a noisy standstill,
    // then a hard launch that holds ~20 m/s² until the finish threshold.
    let mut samples: Vec<AccelSample> = (0u64..50)
        .map(|i| AccelSample::new(i * 10, 0.04, 0.02))
        .collect();
    samples.extend((0u64..120).map(|i| AccelSample::new(500 + i * 10, 19.0, 6.0)));

    println!("Replaying {} samples...\n", samples.len());

    let mut session = RunSession::new(TimerConfig::default(), ReplaySource::new(samples));
    session.start().expect("replay source is available");

    let mut speed_updates = 0usize;
    let mut sink = |event: &TimerEvent| match event {
        TimerEvent::StateChanged(state) => {
            println!("state -> {state:?} ({})", state.description());
        }
        TimerEvent::SpeedUpdated(speed) => {
            speed_updates += 1;
            // Print every 20th update to keep the output readable.
            if speed_updates % 20 == 0 {
                println!("  speed: {}", format::format_speed_kmh(*speed));
            }
        }
        TimerEvent::RunFinished { duration_s } => {
            println!("run finished in {}", format::format_duration_s(*duration_s));
        }
    };

    let processed = session.pump(&mut sink).expect("transition invariants hold");

    println!("\n=== Summary ===");
    println!("Samples processed: {processed}");
    if let Some(record) = session.last_run() {
        println!(
            "Run: {} ms -> {} ms, {}, final speed {}",
            record.start_timestamp_ms,
            record.finish_timestamp_ms,
            format::format_duration_s(record.duration_s()),
            format::format_speed_kmh(record.final_speed_kmh),
        );
    }

    // The host owns the reset; the kernel never auto-resets.
    session.reset();
    println!("Session reset, ready for the next run.");
}
