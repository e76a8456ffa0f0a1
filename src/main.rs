//! Sprint Timer Kernel
//!
//! Entry point for the standalone binary. For library use, see lib.rs; for
//! fuller walkthroughs, see the programs under demos/.

use sprint_timer::{format, AccelSample, MotionTimer, TimerConfig};

fn main() {
    println!("Sprint Timer Kernel v0.1.0");
    println!("Accelerometer-driven run timing");

    // Example: a short constant launch driven straight through the timer.
    let mut timer = MotionTimer::new(TimerConfig::default());

    let mut t = 0u64;
    while !timer.state().is_terminal() {
        timer
            .on_sample(&AccelSample::new(t, 20.0, 0.0))
            .expect("transition invariants hold");
        t += 10;
    }

    println!(
        "Run finished: {} at {}",
        format::format_duration_s(timer.duration_s().unwrap_or(0.0)),
        format::format_speed_kmh(timer.speed_kmh())
    );
}
