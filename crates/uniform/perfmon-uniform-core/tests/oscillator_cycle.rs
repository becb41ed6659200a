use perfmon_test_fixtures::{oscillators, RecordingUniformSink};
use perfmon_uniform_core::{lerp, LerpOscillator, OscillatorConfig};
use rand::rngs::mock::StepRng;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn fixture_configs_parse() {
    for key in oscillators::keys() {
        let json = oscillators::json(&key).unwrap();
        let cfg = OscillatorConfig::from_json(&json).unwrap();
        assert!(cfg.lerp_frames > 0, "{key}");
    }
}

#[test]
fn values_stay_between_targets_and_in_range() {
    let cfg: OscillatorConfig = oscillators::load("fast_narrow").unwrap();
    let (lo, hi) = cfg.target_bounds();
    let mut osc = LerpOscillator::seeded(cfg, 3).unwrap();
    let mut sink = RecordingUniformSink::default();
    osc.start(&mut sink);
    for _ in 0..200 {
        let (a, b) = osc.targets();
        let v = osc.tick(&mut sink);
        let (a2, b2) = osc.targets();
        // targets only move at the start of a tick
        let (min, max) = if (a, b) == (a2, b2) {
            (a.min(b), a.max(b))
        } else {
            (a2.min(b2), a2.max(b2))
        };
        assert!(v >= min - 1e-6 && v <= max + 1e-6);
        assert!(v >= lo - 1e-6 && v < hi);
    }
    let writes = sink.values("wave_height");
    assert_eq!(writes.len(), 201);
}

#[test]
fn rerolls_after_lerp_frames() {
    let cfg = OscillatorConfig {
        uniform: "u".to_string(),
        min_percent: 0,
        max_percent: 1000,
        lerp_frames: 4,
    };
    let mut osc = LerpOscillator::new(cfg, StepRng::new(0, 1 << 30)).unwrap();
    let mut sink = RecordingUniformSink::default();
    let (p0, n0) = osc.targets();

    let expected: Vec<f32> = (0..4).map(|i| lerp(p0, n0, i as f32 / 4.0)).collect();
    for want in &expected {
        approx(osc.tick(&mut sink), *want, 1e-6);
    }
    assert_eq!(osc.progress(), 1.0);

    // fifth tick promotes the old target and restarts the lerp
    let v = osc.tick(&mut sink);
    let (p1, _) = osc.targets();
    assert_eq!(p1, n0);
    assert_eq!(v, n0);
    assert_eq!(sink.values("u").len(), 5);
}
