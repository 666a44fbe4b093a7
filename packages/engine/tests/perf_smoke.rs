mod common;

use common::FakeElement;
use tumble_engine::{Config, SimulationSession};

#[test]
fn perf_smoke_step() {
    let container = FakeElement::container_with(1200.0, 800.0, &[(100.0, 50.0); 64]);
    let mut session = SimulationSession::with_seed(Config::default(), 11);
    session.enable_perf_metrics(true);
    session.build(&container, 0.0);

    for i in 1..=120 {
        session.tick(i as f64 * 16.0);
    }
    let stats = session.perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.steps(), 120);
    assert_eq!(stats.body_count(), 67);
    assert_eq!(stats.bodies_rendered(), 64);
}

#[test]
fn perf_disabled_reports_zeros() {
    let container = FakeElement::container_with(800.0, 600.0, &[(100.0, 50.0)]);
    let mut session = SimulationSession::with_seed(Config::default(), 11);
    session.build(&container, 0.0);
    session.tick(16.0);

    let stats = session.perf_stats();
    assert_eq!(stats.steps(), 0);
    assert_eq!(stats.body_count(), 0);
}
