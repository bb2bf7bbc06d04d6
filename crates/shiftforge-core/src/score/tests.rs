//! Tests for score types.

use super::*;

#[test]
fn test_creation() {
    let score = SimpleScore::of(-5);
    assert_eq!(score.score(), -5);
    assert_eq!(SimpleScore::of_penalty(7), SimpleScore::of(-7));
    assert_eq!(SimpleScore::of_penalty(0), SimpleScore::ZERO);
    assert_eq!(SimpleScore::default(), SimpleScore::ZERO);
}

#[test]
fn test_comparison() {
    let s1 = SimpleScore::of(-10);
    let s2 = SimpleScore::of(-5);
    let s3 = SimpleScore::ZERO;

    assert!(s3 > s2);
    assert!(s2 > s1);
    assert_eq!([s2, s1, s3].iter().max(), Some(&s3));
}

#[test]
fn test_extreme_penalty_does_not_overflow() {
    assert_eq!(SimpleScore::of_penalty(i64::MIN).score(), i64::MAX);
    assert_eq!(SimpleScore::of_penalty(i64::MAX).score(), -i64::MAX);
}

#[test]
fn test_formatting() {
    let score = SimpleScore::of(-3);
    assert_eq!(format!("{}", score), "-3");
    assert_eq!(format!("{:?}", score), "SimpleScore(-3)");
}
