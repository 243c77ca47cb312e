use grading_scale::record::evaluate_batch;
use grading_scale::scale::{
    GradeRange, GradeType, detect_grading_scale, get_grade_type, is_grade_in_range,
    is_numeric_in_range, normalize_limits_for_grade,
};

#[test]
fn test_full_pipeline() {
    let bytes = include_bytes!("fixtures/grades.csv");
    let records = evaluate_batch(bytes).expect("Failed to evaluate batch");

    assert_eq!(records.len(), 9);

    let german = &records[0];
    assert_eq!(german.grade_type, Some(GradeType::Numeric));
    assert_eq!(german.upper_limit.as_deref(), Some("1.0"));
    assert_eq!(german.lower_limit.as_deref(), Some("4.0"));
    assert!(german.in_range);

    let letter = &records[1];
    assert_eq!(letter.upper_limit.as_deref(), Some("A+"));
    assert!(letter.in_range);

    let percentage = &records[3];
    assert_eq!(percentage.upper_limit.as_deref(), Some("100%"));
    assert_eq!(percentage.lower_limit.as_deref(), Some("50%"));
    assert!(percentage.is_percentage);

    let italian = &records[4];
    assert_eq!(italian.lower_limit.as_deref(), Some("66"));

    let swiss_manual = &records[5];
    assert_eq!(swiss_manual.upper_limit.as_deref(), Some("1"));
    assert!(swiss_manual.in_range);

    let invalid = &records[6];
    assert_eq!(invalid.grade_type, Some(GradeType::Invalid));
    assert!(!invalid.has_limits());

    assert!(!records[7].in_range);
    assert_eq!(records[8].error_type.as_deref(), Some("parse_error"));
    assert_eq!(records[8].applicant_id.as_deref(), Some("bad-009"));
}

#[test]
fn test_edit_cycle_keeps_limits_consistent() {
    // Proposed from a bare number, then the user switches to a percentage.
    let proposed = detect_grading_scale("75").unwrap();
    assert_eq!(proposed, GradeRange::new("100", "50"));

    let as_percentage = normalize_limits_for_grade("75%", &proposed);
    assert_eq!(
        as_percentage,
        GradeRange::new("100%", "50%").with_percentage(true)
    );
    assert!(is_grade_in_range("75%", &as_percentage));

    let back = normalize_limits_for_grade("75", &as_percentage);
    assert_eq!(back, proposed);
}

#[test]
fn test_documented_scenarios() {
    assert_eq!(get_grade_type("A+"), GradeType::Letter);
    assert_eq!(get_grade_type("3,5"), GradeType::Numeric);
    assert_eq!(get_grade_type("85%"), GradeType::Percentage);
    assert_eq!(
        detect_grading_scale("3.5"),
        Some(GradeRange::new("1.0", "4.0"))
    );
    assert_eq!(detect_grading_scale("C"), Some(GradeRange::new("A", "E")));
    assert_eq!(
        detect_grading_scale("150"),
        Some(GradeRange::new("150", "75"))
    );
    assert!(is_numeric_in_range("2.5", "1.0", "4.0"));
    assert!(is_numeric_in_range("2.5", "4.0", "1.0"));
}
