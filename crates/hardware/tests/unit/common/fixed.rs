use cordic_sim::{Fixed, SimError};
use rstest::rstest;

#[rstest]
#[case("0b0000100110110010", 0x09B2)]
#[case("0b1110111001100111", -4505)]
#[case("0xCDBD", -12867)]
#[case("0x7fff", i16::MAX)]
#[case("0x8000", i16::MIN)]
#[case("-4505", -4505)]
#[case("  4096 ", 4096)]
#[case("0b0001_0000_0000_0000", 4096)]
fn parses_raw_literals(#[case] text: &str, #[case] raw: i16) {
    assert_eq!(Fixed::parse_raw(text).unwrap().raw(), raw);
    assert_eq!(text.parse::<Fixed>().unwrap().raw(), raw);
}

#[rstest]
#[case("")]
#[case("0x10000")]
#[case("0b1_0000_0000_0000_0000")]
#[case("40000")]
#[case("-0x10")]
#[case("1.5")]
#[case("0xZZ")]
fn rejects_malformed_literals(#[case] text: &str) {
    assert!(matches!(
        Fixed::parse_raw(text),
        Err(SimError::InvalidLiteral(_))
    ));
}

#[test]
fn real_conversion_uses_twelve_fraction_bits() {
    assert_eq!(Fixed::ONE.raw(), 4096);
    assert_eq!(Fixed::from_f64(1.0).unwrap(), Fixed::ONE);
    assert_eq!(Fixed::from_f64(-0.5).unwrap().raw(), -2048);
    assert_eq!(Fixed::from_raw(0x09B2).to_f64(), 2482.0 / 4096.0);
    assert_eq!(Fixed::ULP.to_f64(), 1.0 / 4096.0);
}

#[test]
fn real_conversion_rounds_to_nearest() {
    let third = Fixed::from_f64(1.0 / 3.0).unwrap();
    assert_eq!(third.raw(), 1365);
}

#[test]
fn real_conversion_rejects_out_of_range() {
    assert!(Fixed::from_f64(7.9997).is_ok());
    assert!(Fixed::from_f64(-8.0).is_ok());
    assert!(matches!(
        Fixed::from_f64(8.0),
        Err(SimError::OutOfRange { .. })
    ));
    assert!(Fixed::from_f64(-8.001).is_err());
    assert!(Fixed::from_f64(f64::NAN).is_err());
}

#[test]
fn arithmetic_wraps_like_hardware() {
    assert_eq!(Fixed::MAX + Fixed::ULP, Fixed::MIN);
    assert_eq!(Fixed::MIN - Fixed::ULP, Fixed::MAX);
    assert_eq!(-Fixed::MIN, Fixed::MIN);
    assert_eq!(Fixed::ONE - Fixed::ONE, Fixed::ZERO);
}

#[test]
fn bit_patterns_are_twos_complement() {
    assert_eq!(Fixed::from_bits(0xFFFF).raw(), -1);
    assert_eq!(Fixed::from_raw(-1).to_bits(), 0xFFFF);
    assert_eq!(i16::from(Fixed::from(123i16)), 123);
}

#[test]
fn ulp_distance_does_not_wrap() {
    assert_eq!(Fixed::MAX.ulp_distance(Fixed::MIN), 0xFFFF);
    assert_eq!(Fixed::from_raw(-3).ulp_distance(Fixed::from_raw(2)), 5);
}

#[test]
fn display_shows_value_and_pattern() {
    assert_eq!(Fixed::ONE.to_string(), "1.000000 (0x1000)");
    assert_eq!(Fixed::from_raw(-1).to_string(), "-0.000244 (0xffff)");
}

#[test]
fn deserializes_integers_and_literals() {
    let values: Vec<Fixed> = serde_json::from_str(r#"[4096, -1, "0xCDBD", "0b11"]"#).unwrap();
    let raws: Vec<i16> = values.iter().map(|v| v.raw()).collect();
    assert_eq!(raws, vec![4096, -1, -12867, 3]);

    assert_eq!(serde_json::from_str::<Fixed>("52669").unwrap().raw(), -12867);
    assert_eq!(serde_json::from_str::<Fixed>("32768").unwrap(), Fixed::MIN);
    assert!(serde_json::from_str::<Fixed>("70000").is_err());
    assert!(serde_json::from_str::<Fixed>("-32769").is_err());
    assert!(serde_json::from_str::<Fixed>(r#""nope""#).is_err());
    assert_eq!(serde_json::to_string(&Fixed::from_raw(-5)).unwrap(), "-5");
}
