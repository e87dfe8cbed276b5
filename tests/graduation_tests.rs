use frieze::TimelineError;
use frieze::core::graduation_years;

#[test]
fn graduations_cover_bce_years_up_to_end_inclusive() {
    let years: Vec<i64> = graduation_years(-500, 200, 100)
        .expect("positive step")
        .collect();

    assert_eq!(years, vec![-500, -400, -300, -200, -100, 0, 100, 200]);
}

#[test]
fn graduations_stop_before_overshooting_end() {
    let years: Vec<i64> = graduation_years(1400, 1530, 50).expect("positive step").collect();
    assert_eq!(years, vec![1400, 1450, 1500]);
}

#[test]
fn zero_step_refuses_to_start() {
    let result = graduation_years(-500, 200, 0);
    assert!(matches!(
        result,
        Err(TimelineError::DegenerateRange { scale: 0, .. })
    ));
}

#[test]
fn negative_step_refuses_to_start() {
    assert!(graduation_years(0, 100, -10).is_err());
}

#[test]
fn graduation_sequence_is_restartable() {
    let first = graduation_years(1400, 2000, 50).expect("positive step");
    let second = first.clone();

    assert_eq!(first.len(), 13);
    assert_eq!(first.collect::<Vec<_>>(), second.collect::<Vec<_>>());
}

#[test]
fn inverted_range_yields_no_graduations() {
    let mut years = graduation_years(2000, 1400, 50).expect("positive step");
    assert_eq!(years.len(), 0);
    assert_eq!(years.next(), None);
}

#[test]
fn graduations_near_i64_max_terminate() {
    let years: Vec<i64> = graduation_years(i64::MAX - 5, i64::MAX, 4)
        .expect("positive step")
        .collect();
    assert_eq!(years, vec![i64::MAX - 5, i64::MAX - 1]);
}
