use cordic_sim::config::{EngineConfig, OutputPolicy};
use cordic_sim::{Config, SimError};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn defaults_hold_results_until_accepted() {
    let config = Config::default();
    assert_eq!(config.engine.output_policy, OutputPolicy::HoldUntilAccepted);
    assert!(!config.trace);
}

#[test]
fn empty_document_yields_defaults() {
    assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
}

#[test]
fn parses_output_policy() {
    let config =
        Config::from_json_str(r#"{ "engine": { "output_policy": "single_pulse" }, "trace": true }"#)
            .unwrap();
    assert_eq!(
        config,
        Config {
            engine: EngineConfig {
                output_policy: OutputPolicy::SinglePulse,
            },
            trace: true,
        }
    );
    assert!(config.trace_enabled());
}

#[test]
fn rejects_unknown_fields() {
    let err = Config::from_json_str(r#"{ "iterations": 12 }"#).unwrap_err();
    assert!(matches!(err, SimError::Json { what: "configuration", .. }));

    assert!(Config::from_json_str(r#"{ "engine": { "policy": "hold" } }"#).is_err());
    assert!(Config::from_json_str(r#"{ "engine": { "output_policy": "forever" } }"#).is_err());
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "engine": {{ "output_policy": "hold_until_accepted" }} }}"#).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.engine.output_policy, OutputPolicy::HoldUntilAccepted);
}

#[test]
fn missing_file_reports_path() {
    let err = Config::load("/nonexistent/cordic.json").unwrap_err();
    match err {
        SimError::Io { path, .. } => assert_eq!(path, "/nonexistent/cordic.json"),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn round_trips_through_json() {
    let config = Config {
        engine: EngineConfig {
            output_policy: OutputPolicy::SinglePulse,
        },
        trace: false,
    };
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json_str(&text).unwrap(), config);
}
