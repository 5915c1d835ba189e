use softfloat::Comparison;
use softfloat::abi::*;
use softfloat::{double, single};

#[test]
fn test_three_way_compare_f32() {
    println!("=== binary32 three-way comparison ===");
    let cmp = |a: f32, b: f32| single::compare(a.to_bits(), b.to_bits());
    assert_eq!(cmp(1.0, 2.0), Comparison::Less);
    assert_eq!(cmp(2.0, 1.0), Comparison::Greater);
    assert_eq!(cmp(-1.0, -2.0), Comparison::Greater);
    assert_eq!(cmp(-1.0, 1.0), Comparison::Less);
    assert_eq!(cmp(-0.0, 0.0), Comparison::Equal);
    assert_eq!(cmp(f32::INFINITY, f32::MAX), Comparison::Greater);
    assert_eq!(cmp(f32::NEG_INFINITY, f32::MIN), Comparison::Less);
    assert_eq!(cmp(f32::NAN, 1.0), Comparison::Unordered);
    assert_eq!(cmp(1.0, f32::NAN), Comparison::Unordered);
    println!("✓ ordering follows numeric value");
}

#[test]
fn test_three_way_compare_f64() {
    let cmp = |a: f64, b: f64| double::compare(a.to_bits(), b.to_bits());
    assert_eq!(cmp(1.0, 2.0), Comparison::Less);
    assert_eq!(cmp(-3.5, -3.25), Comparison::Less);
    assert_eq!(cmp(0.0, -0.0), Comparison::Equal);
    assert_eq!(cmp(1e-300, -1e300), Comparison::Greater);
    assert_eq!(cmp(f64::NAN, f64::NAN), Comparison::Unordered);
}

#[test]
fn test_ordered_sentinels() {
    assert_eq!(gtsf2(2.0, 1.0), 1);
    assert_eq!(gtsf2(1.0, 2.0), -1);
    assert_eq!(gesf2(1.0, 1.0), 0);
    assert_eq!(ltsf2(1.0, 2.0), -1);
    assert_eq!(lesf2(3.0, 3.0), 0);
    assert_eq!(eqsf2(0.0, -0.0), 0);
    assert_eq!(eqsf2(1.0, 2.0), 1);
    assert_eq!(nesf2(1.0, 1.0), 0);
    assert_eq!(unordsf2(1.0, 2.0), 0);

    assert_eq!(gtdf2(2.0, 1.0), 1);
    assert_eq!(ltdf2(-1.0, 0.0), -1);
    assert_eq!(eqdf2(4.0, 4.0), 0);
    assert_eq!(unorddf2(0.5, 0.25), 0);
}

#[test]
fn test_unordered_sentinels() {
    println!("=== NaN operands make every ordered predicate false ===");
    let nan = f32::NAN;
    assert_eq!(gtsf2(nan, 1.0), -1);
    assert_eq!(gesf2(nan, 1.0), -1);
    assert_eq!(ltsf2(nan, 1.0), 1);
    assert_eq!(lesf2(1.0, nan), 1);
    assert_eq!(eqsf2(nan, nan), 1);
    assert_eq!(nesf2(nan, 1.0), 1);
    assert_eq!(unordsf2(nan, 1.0), 1);
    assert_eq!(unordsf2(1.0, nan), 1);

    let nan = f64::NAN;
    assert_eq!(gtdf2(nan, 1.0), -1);
    assert_eq!(gedf2(1.0, nan), -1);
    assert_eq!(ltdf2(nan, 1.0), 1);
    assert_eq!(ledf2(nan, 1.0), 1);
    assert_eq!(eqdf2(nan, 1.0), 1);
    assert_eq!(nedf2(nan, nan), 1);
    assert_eq!(unorddf2(nan, 1.0), 1);

    // The way a compiler consumes them: `a > b` is `__gtsf2(a, b) > 0`.
    assert!(!(gtsf2(f32::NAN, 0.0) > 0));
    assert!(!(ltsf2(f32::NAN, 0.0) < 0));
    assert!(!(lesf2(f32::NAN, 0.0) <= 0));
    assert!(!(gesf2(f32::NAN, 0.0) >= 0));
    println!("✓ sentinels match the builtin contract");
}

#[test]
fn test_infinity_is_not_nan() {
    assert!(!single::is_nan(f32::INFINITY.to_bits()));
    assert!(single::is_nan(f32::NAN.to_bits()));
    assert!(single::is_nan(0xFF80_0001));
    assert!(!double::is_nan(f64::NEG_INFINITY.to_bits()));
    assert!(double::is_nan(0x7FF0_0000_0000_0001));
    assert_eq!(unordsf2(f32::INFINITY, f32::NEG_INFINITY), 0);
}

#[test]
fn test_comparison_predicates() {
    assert!(Comparison::Less.lt());
    assert!(Comparison::Less.le());
    assert!(!Comparison::Less.ge());
    assert!(Comparison::Equal.le() && Comparison::Equal.ge());
    assert!(Comparison::Greater.gt());
    assert!(Comparison::Unordered.ne());
    assert!(!Comparison::Unordered.eq());
    assert!(!Comparison::Unordered.lt() && !Comparison::Unordered.gt());
    assert_eq!(Comparison::Unordered.to_ordering(), None);
    assert_eq!(Comparison::Greater.to_ordering(), Some(std::cmp::Ordering::Greater));
}
