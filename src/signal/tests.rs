use super::{classify, Intent, Sample, SignalSmoother, SlidingWindow};
use crate::config::SessionConfig;
use crate::info;
use rand::Rng;

fn joystick_config() -> SessionConfig {
    SessionConfig::default()
}

fn raw_config() -> SessionConfig {
    SessionConfig { norm_divisor: 500.0, ..SessionConfig::default() }
}

#[test]
fn test_window_mean_within_hull_after_prefill_flushed() {
    info!("Running window convex hull test");
    let mut rng = rand::rng();
    for _ in 0..50 {
        let mut window = SlidingWindow::new(10);
        let values: Vec<f32> = (0..25).map(|_| rng.random_range(-1.0..1.0)).collect();
        for v in &values {
            window.push(*v);
        }
        let recent = &values[values.len() - 10..];
        let min = recent.iter().copied().fold(f32::INFINITY, f32::min);
        let max = recent.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mean = window.mean();
        assert!(mean >= min - 1e-6 && mean <= max + 1e-6, "mean {mean} outside [{min}, {max}]");
    }
}

#[test]
fn test_window_is_zero_filled_at_creation() {
    let window = SlidingWindow::new(10);
    assert_eq!(window.mean(), 0.0);
    assert_eq!(window.capacity(), 10);
}

#[test]
fn test_smoother_scenario_a_full_window() {
    info!("Running Scenario A smoothing test");
    let mut smoother = SignalSmoother::new(&joystick_config(), 2);
    let mut smoothed = 0.0;
    for _ in 0..10 {
        smoothed = smoother.observe(&Sample::now(vec![-0.5, 0.0]));
    }
    assert!((smoothed - (-0.5)).abs() < 1e-6);
    let (intent, intensity) = classify(smoothed, 0.2);
    assert_eq!(intent, Intent::Backward);
    assert!((intensity - 0.5).abs() < 1e-6);
}

#[test]
fn test_smoother_scenario_b_single_sample_damped() {
    info!("Running Scenario B smoothing test");
    let mut smoother = SignalSmoother::new(&joystick_config(), 2);
    let smoothed = smoother.observe(&Sample::now(vec![0.1, 0.0]));
    assert!((smoothed - 0.01).abs() < 1e-6);
    let (intent, intensity) = classify(smoothed, 0.2);
    assert_eq!(intent, Intent::Hover);
    assert_eq!(intensity, 0.0);
}

#[test]
fn test_smoother_normalizes_raw_single_channel() {
    let mut smoother = SignalSmoother::new(&raw_config(), 1);
    // 250.0 amplitude over divisor 500.0 lands at 0.5 per sample.
    let mut smoothed = 0.0;
    for _ in 0..10 {
        smoothed = smoother.observe(&Sample::now(vec![250.0]));
    }
    assert!((smoothed - 0.5).abs() < 1e-6);
}

#[test]
fn test_smoother_polarity_flips_sign() {
    let config = SessionConfig { polarity: -1.0, ..SessionConfig::default() };
    let mut smoother = SignalSmoother::new(&config, 2);
    let mut smoothed = 0.0;
    for _ in 0..10 {
        smoothed = smoother.observe(&Sample::now(vec![-0.5, 0.0]));
    }
    assert!((smoothed - 0.5).abs() < 1e-6);
}

#[test]
fn test_smoother_uses_configured_axis() {
    let config = SessionConfig { axis_of_interest: 1, ..SessionConfig::default() };
    let mut smoother = SignalSmoother::new(&config, 2);
    let mut smoothed = 0.0;
    for _ in 0..10 {
        smoothed = smoother.observe(&Sample::now(vec![0.9, 0.3]));
    }
    assert!((smoothed - 0.3).abs() < 1e-6);
}

#[test]
fn test_classifier_dead_zone_is_inclusive_at_boundary() {
    info!("Running classifier dead-zone test");
    let t = 0.2;
    assert_eq!(classify(t, t), (Intent::Hover, 0.0));
    assert_eq!(classify(-t, t), (Intent::Hover, 0.0));
    assert_eq!(classify(0.0, t), (Intent::Hover, 0.0));
    assert_eq!(classify(t + 1e-4, t).0, Intent::Forward);
    assert_eq!(classify(-t - 1e-4, t).0, Intent::Backward);
}

#[test]
fn test_classifier_intensity_monotonic_and_clamped() {
    let t = 0.2;
    let mut last = 0.0;
    for i in 0..100 {
        let x = 0.21 + (i as f32) * 0.02;
        let (intent, intensity) = classify(x, t);
        assert_eq!(intent, Intent::Forward);
        assert!(intensity >= last, "intensity not monotonic at x={x}");
        assert!(intensity <= 1.0);
        last = intensity;
    }
    assert_eq!(classify(1.7, t).1, 1.0);
    assert_eq!(classify(-1.7, t), (Intent::Backward, 1.0));
}

#[test]
fn test_sample_out_of_range_channel_reads_zero() {
    let sample = Sample::now(vec![0.4]);
    assert_eq!(sample.channel(0), 0.4);
    assert_eq!(sample.channel(5), 0.0);
}

#[tokio::test]
async fn test_synthetic_source_shape_and_range() {
    use super::{SampleSource, SyntheticSource};
    use std::time::Duration;
    let mut source = SyntheticSource::new(0);
    assert_eq!(source.channel_count(), 2);
    for _ in 0..5 {
        let sample = source
            .next(Duration::from_millis(500))
            .await
            .unwrap()
            .expect("synthetic source should always produce within its cadence");
        assert_eq!(sample.channel_count(), 2);
        assert!(sample.channel(0).abs() <= 0.7 + 1e-6);
        assert!(sample.channel(1).abs() <= 0.1 + 1e-6);
    }
}
