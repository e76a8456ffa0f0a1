//! High-volume robustness tests.
//!
//! The kernel is O(1) per sample with no buffers, so long streams must stay
//! numerically sane and deterministic: no drift in the idle state, no
//! non-monotonic speed, identical results across repeated replays.

use crate::timer::{MotionTimer, TimerConfig};
use crate::types::{AccelSample, RunState};

#[test]
fn test_hours_of_noise_never_trigger_onset() {
    let mut timer = MotionTimer::default();

    // One simulated hour of 100 Hz sub-threshold jitter.
    for i in 0u64..360_000 {
        // Deterministic pseudo-noise below the 0.1 m/s² threshold.
        let jitter = 0.09 * ((i % 97) as f64 / 97.0);
        timer.on_sample(&AccelSample::new(i * 10, jitter, 0.0)).unwrap();
    }

    assert_eq!(timer.state(), RunState::Idle);
    assert_eq!(timer.speed_kmh(), 0.0);
    assert_eq!(timer.total_samples(), 360_000);
}

#[test]
fn test_long_run_speed_stays_finite_and_monotonic() {
    // Finish threshold high enough that a long stream stays active.
    let config = TimerConfig {
        finish_threshold: 1_000_000.0,
        ..Default::default()
    };
    let mut timer = MotionTimer::new(config);

    let mut last = 0.0;
    for i in 0u64..100_000 {
        let magnitude = 1.0 + ((i % 31) as f64) * 0.1;
        timer.on_sample(&AccelSample::new(i * 10, magnitude, 0.0)).unwrap();

        let speed = timer.speed_kmh();
        assert!(speed.is_finite());
        assert!(speed >= last);
        last = speed;
    }

    assert_eq!(timer.state(), RunState::Active);
}

#[test]
fn test_replay_determinism() {
    let profile: Vec<AccelSample> = (0u64..10_000)
        .map(|i| {
            let magnitude = if i < 500 { 0.05 } else { 3.0 + ((i % 13) as f64) * 0.5 };
            AccelSample::new(i * 10, magnitude, 0.0)
        })
        .collect();

    let run = |samples: &[AccelSample]| {
        let mut timer = MotionTimer::default();
        for sample in samples {
            timer.on_sample(sample).unwrap();
        }
        (
            timer.state(),
            timer.speed_kmh(),
            timer.start_timestamp_ms(),
            timer.finish_timestamp_ms(),
        )
    };

    let first = run(&profile);
    let second = run(&profile);
    assert_eq!(first, second);
}

#[test]
fn test_stale_flood_after_finish_is_stable() {
    let config = TimerConfig {
        finish_threshold: 1.0,
        ..Default::default()
    };
    let mut timer = MotionTimer::new(config);

    timer.on_sample(&AccelSample::new(0, 20.0, 0.0)).unwrap();
    timer.on_sample(&AccelSample::new(10, 20.0, 0.0)).unwrap();
    assert_eq!(timer.state(), RunState::Finished);

    let speed = timer.speed_kmh();
    let finish = timer.finish_timestamp_ms();
    for i in 2u64..50_000 {
        let events = timer.on_sample(&AccelSample::new(i * 10, 50.0, 50.0)).unwrap();
        assert!(events.is_empty());
    }

    assert_eq!(timer.speed_kmh(), speed);
    assert_eq!(timer.finish_timestamp_ms(), finish);
    assert_eq!(timer.ignored_samples(), 50_000 - 2);
}
