use approx::assert_abs_diff_eq;
use frieze::TimelineError;
use frieze::core::{LinearScale, TimelineConfig, YearScale};

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original, 1000.0).expect("to pixel");
    let recovered = scale.pixel_to_domain(px, 1000.0).expect("from pixel");

    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn linear_scale_rejects_empty_extent() {
    let scale = LinearScale::new(0.0, 1.0).expect("valid scale");

    let result = scale.domain_to_pixel(0.5, 0.0);
    assert!(matches!(result, Err(TimelineError::InvalidViewport { .. })));
}

#[test]
fn linear_scale_rejects_zero_width_domain() {
    assert!(LinearScale::new(5.0, 5.0).is_err());
    assert!(LinearScale::new(f64::NAN, 5.0).is_err());
}

#[test]
fn year_to_x_spans_full_logical_canvas() {
    let config = TimelineConfig::new(1400, 2000, 50).with_pages(1000.0, 700.0, 3, 1);
    let scale = YearScale::from_config(config).expect("valid config");

    assert_eq!(scale.canvas_width(), 3000.0);
    assert_abs_diff_eq!(scale.year_to_x(1400.0).expect("start"), 0.0);
    assert_abs_diff_eq!(scale.year_to_x(2000.0).expect("end"), 3000.0);
    assert_abs_diff_eq!(scale.year_to_x(1700.0).expect("middle"), 1500.0);
}

#[test]
fn x_to_year_inverts_year_to_x() {
    let scale = YearScale::new(1800, 2000, 1000.0).expect("valid scale");

    assert_abs_diff_eq!(scale.x_to_year(500.0).expect("middle"), 1900.0);
    assert_abs_diff_eq!(scale.x_to_year(125.0).expect("quarter"), 1825.0);
}

#[test]
fn years_outside_range_extrapolate_linearly() {
    let scale = YearScale::new(1800, 2000, 1000.0).expect("valid scale");

    assert_abs_diff_eq!(scale.year_to_x(1700.0).expect("before start"), -500.0);
    assert_abs_diff_eq!(scale.year_to_x(2100.0).expect("after end"), 1500.0);
}

#[test]
fn equal_years_are_a_degenerate_range() {
    let result = YearScale::new(1900, 1900, 1000.0);
    assert!(matches!(
        result,
        Err(TimelineError::DegenerateRange {
            start: 1900,
            end: 1900,
            ..
        })
    ));
}

#[test]
fn years_to_width_matches_pixel_distance() {
    let scale = YearScale::new(1800, 2000, 1000.0).expect("valid scale");

    let width = scale.years_to_width(50.0).expect("width");
    let distance =
        scale.year_to_x(1950.0).expect("end") - scale.year_to_x(1900.0).expect("start");

    assert_abs_diff_eq!(width, 250.0);
    assert_abs_diff_eq!(width, distance, epsilon = 1e-9);
}

#[test]
fn year_scale_rejects_non_finite_canvas_width() {
    assert!(YearScale::new(1800, 2000, f64::INFINITY).is_err());
    assert!(YearScale::new(1800, 2000, -10.0).is_err());
}
