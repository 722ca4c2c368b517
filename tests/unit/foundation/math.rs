use super::*;

#[test]
fn sign_covers_all_three_cases() {
    assert_eq!(sign(-7i32), -1);
    assert_eq!(sign(0i32), 0);
    assert_eq!(sign(42i32), 1);
    assert_eq!(sign(i64::MIN), -1);
}

#[test]
fn abs_matches_std_for_representable_values() {
    for v in [-100i64, -1, 0, 1, 100, i64::from(i32::MIN)] {
        assert_eq!(abs(v), v.abs());
    }
}

#[test]
fn ordered_swaps_only_when_needed() {
    assert_eq!(ordered(3, 1), (1, 3));
    assert_eq!(ordered(1, 3), (1, 3));
    assert_eq!(ordered(-2, -2), (-2, -2));
}
