use cordic_sim::sim::loader::{load_stimulus, parse_stimulus};
use cordic_sim::{CordicSample, Mode, RotationType, SimError};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn accepts_mixed_literal_forms() {
    let samples = parse_stimulus(
        r#"[
            { "x": "0b0000100110110010", "y": 0, "z": 0 },
            { "x": "0x1000", "y": "0xCDBD", "z": -1, "mode": "vectoring" },
            { "x": 4947, "y": "0", "z": "0xEE67", "mode": "rotation", "rotType": "hyperbolic" }
        ]"#,
    )
    .unwrap();

    assert_eq!(
        samples,
        vec![
            CordicSample::from_raw(0x09B2, 0, 0, Mode::Rotation, RotationType::Circular),
            CordicSample::from_raw(0x1000, -12867, -1, Mode::Vectoring, RotationType::Circular),
            CordicSample::from_raw(4947, 0, -4505, Mode::Rotation, RotationType::Hyperbolic),
        ]
    );
}

#[test]
fn rejects_bad_literal() {
    let err = parse_stimulus(r#"[{ "x": "0xGG", "y": 0, "z": 0 }]"#).unwrap_err();
    assert!(matches!(err, SimError::Json { what: "stimulus", .. }));
}

#[test]
fn accepts_unsigned_bit_patterns_as_integers() {
    let samples =
        parse_stimulus(r#"[{ "x": 4096, "y": 52669, "z": 65535, "mode": "vectoring" }]"#).unwrap();
    assert_eq!(
        samples[0],
        CordicSample::from_raw(4096, -12867, -1, Mode::Vectoring, RotationType::Circular)
    );
}

#[test]
fn rejects_integer_wider_than_port() {
    assert!(parse_stimulus(r#"[{ "x": 65536, "y": 0, "z": 0 }]"#).is_err());
    assert!(parse_stimulus(r#"[{ "x": -32769, "y": 0, "z": 0 }]"#).is_err());
}

#[test]
fn rejects_unknown_mode() {
    assert!(parse_stimulus(r#"[{ "x": 0, "y": 0, "z": 0, "mode": "linear" }]"#).is_err());
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[{{ "x": "0x1266", "y": "0xF266", "z": 0, "mode": "vectoring", "rot_type": "hyperbolic" }}]"#
    )
    .unwrap();

    let samples = load_stimulus(file.path()).unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].x.raw(), 0x1266);
    assert_eq!(samples[0].y.to_bits(), 0xF266);
    assert_eq!(samples[0].rot_type, RotationType::Hyperbolic);
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        load_stimulus("/nonexistent/stimulus.json"),
        Err(SimError::Io { .. })
    ));
}
