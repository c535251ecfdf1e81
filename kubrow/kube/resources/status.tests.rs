use rstest::rstest;

use super::*;

#[rstest]
#[case(3, 3)]
#[case(0, 0)]
#[case(1, 1)]
fn diagnose_healthy_test(#[case] desired: i32, #[case] ready: i32) {
    let diagnosis = diagnose(desired, ready);

    assert_eq!(Diagnosis::Healthy, diagnosis);
    assert_eq!("", diagnosis.to_status());
}

#[rstest]
#[case(3, 2, "desiring 3 replicas got 2 available")]
#[case(1, 0, "desiring 1 replicas got 0 available")]
#[case(0, 2, "desiring 0 replicas got 2 available")]
fn diagnose_unhealthy_test(#[case] desired: i32, #[case] ready: i32, #[case] expected: &str) {
    let diagnosis = diagnose(desired, ready);

    assert_ne!(Diagnosis::Healthy, diagnosis);
    assert_eq!(Some(expected), diagnosis.message());
    assert_eq!(expected, diagnosis.to_status());
}
