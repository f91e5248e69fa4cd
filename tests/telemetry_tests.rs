#[cfg(not(feature = "telemetry"))]
#[test]
fn init_default_tracing_is_a_noop_without_the_feature() {
    assert!(!sparktable::telemetry::init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn init_default_tracing_installs_a_subscriber_once() {
    // First call installs the global subscriber; repeat calls report failure.
    let first = sparktable::telemetry::init_default_tracing();
    let second = sparktable::telemetry::init_default_tracing();
    assert!(first);
    assert!(!second);
}
