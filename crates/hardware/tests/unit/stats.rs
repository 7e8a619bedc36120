use cordic_sim::stats::SimStats;

#[test]
fn in_flight_counts_accepted_but_unfinished() {
    let stats = SimStats {
        accepted: 3,
        completed: 2,
        ..SimStats::default()
    };
    assert_eq!(stats.in_flight(), 1);
    assert_eq!(SimStats::default().in_flight(), 0);
}

#[test]
fn serializes_every_counter() {
    let value = serde_json::to_value(SimStats::default()).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    for key in [
        "cycles",
        "accepted",
        "completed",
        "consumed",
        "backpressure_cycles",
        "resets",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
}
