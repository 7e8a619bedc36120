//! Adder/subtractor tests through the `A`, `B`, `D`, `S` ports.

use cordic_sim::core::units::alu::AdderIo;
use cordic_sim::{AdderSubtractor, Direction, Fixed, FixedPointAlu};
use proptest::prelude::*;
use rstest::rstest;

fn settle(a: i16, b: i16, d: Direction) -> i16 {
    let io = AdderIo {
        a: Fixed::from_raw(a),
        b: Fixed::from_raw(b),
        d,
    };
    AdderSubtractor::new().evaluate(&io).raw()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn random_additions_match_integer_sum(a in -(1i32 << 14)..(1i32 << 14), b in -(1i32 << 14)..=(1i32 << 14)) {
        let s = settle(a as i16, b as i16, Direction::Add);
        prop_assert_eq!(s as i32, a + b);
    }

    #[test]
    fn random_subtractions_match_integer_difference(a in -(1i32 << 14)..(1i32 << 14), b in -(1i32 << 14)..=(1i32 << 14)) {
        let s = settle(a as i16, b as i16, Direction::Subtract);
        prop_assert_eq!(s as i32, a - b);
    }

    #[test]
    fn full_range_results_are_truncated_to_port_width(a in any::<i16>(), b in any::<i16>(), sub in any::<bool>()) {
        let d = Direction::from_bit(sub);
        let full = if sub { a as i32 - b as i32 } else { a as i32 + b as i32 };
        prop_assert_eq!(settle(a, b, d), full as i16);
    }
}

#[rstest]
#[case(0x7FFF, 1, Direction::Add, i16::MIN)]
#[case(i16::MIN, 1, Direction::Subtract, 0x7FFF)]
#[case(i16::MIN, i16::MIN, Direction::Add, 0)]
#[case(0, i16::MIN, Direction::Subtract, i16::MIN)]
#[case(-1, -1, Direction::Add, -2)]
fn overflow_wraps_without_fault(
    #[case] a: i16,
    #[case] b: i16,
    #[case] d: Direction,
    #[case] expected: i16,
) {
    assert_eq!(settle(a, b, d), expected);
}

#[test]
fn direction_port_encoding() {
    assert_eq!(Direction::from_bit(false), Direction::Add);
    assert_eq!(Direction::from_bit(true), Direction::Subtract);
    assert!(!Direction::Add.bit());
    assert!(Direction::Subtract.bit());
    assert_eq!(Direction::default(), Direction::Add);
}

#[test]
fn trait_methods_agree_with_ports() {
    let alu = AdderSubtractor::new();
    let a = Fixed::from_raw(1234);
    let b = Fixed::from_raw(-567);

    assert_eq!(alu.add(a, b), alu.execute(a, b, Direction::Add));
    assert_eq!(alu.subtract(a, b), alu.execute(a, b, Direction::Subtract));
    assert_eq!(alu.add(a, b).raw(), 667);
    assert_eq!(alu.subtract(a, b).raw(), 1801);
}

#[test]
fn fractional_values_add_exactly() {
    let alu = AdderSubtractor::new();
    let half = Fixed::from_f64(0.5).unwrap();
    let quarter = Fixed::from_f64(0.25).unwrap();

    assert_eq!(alu.add(half, quarter).to_f64(), 0.75);
    assert_eq!(alu.subtract(quarter, half).to_f64(), -0.25);
}
