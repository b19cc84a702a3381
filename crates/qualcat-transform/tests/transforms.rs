//! Tests for catalogue transformation.

use qualcat_model::{Faculty, QualificationLevel, RawQualification};
use qualcat_transform::{
    classify_level, infer_faculty, normalization::parse_duration_years, synthesize_id,
    transform_catalogue,
};

#[test]
fn identifier_example_from_title() {
    assert_eq!(
        synthesize_id("Bachelor of Business Administration in Project Management"),
        "BBA_PROJECT_MANAGEMENT"
    );
}

#[test]
fn identifier_is_deterministic() {
    let title = "Postgraduate Diploma in Digital Transformation";
    assert_eq!(synthesize_id(title), synthesize_id(title));
}

#[test]
fn level_classification_cases() {
    assert_eq!(
        classify_level(Some(8), "Bachelor of Commerce HONOURS in Accounting"),
        QualificationLevel::HonoursDegree
    );
    assert_eq!(
        classify_level(Some(8), "Postgraduate Diploma in Management"),
        QualificationLevel::PostgraduateDiploma
    );
    assert_eq!(
        classify_level(Some(7), "Bachelor of Commerce"),
        QualificationLevel::UndergraduateDegree
    );
    assert_eq!(
        classify_level(None, "Bachelor of Commerce"),
        QualificationLevel::UndergraduateDegree
    );
    assert_eq!(
        classify_level(Some(3), "Bachelor of Commerce"),
        QualificationLevel::UndergraduateDegree
    );
}

#[test]
fn duration_cases() {
    assert_eq!(parse_duration_years(Some("3 Years")), 3);
    assert_eq!(parse_duration_years(Some("18 months")), 18);
    assert_eq!(parse_duration_years(None), 1);
    assert_eq!(parse_duration_years(Some("")), 1);
    assert_eq!(parse_duration_years(Some("Flexible")), 1);
}

#[test]
fn faculty_precedence_for_overlapping_keywords() {
    assert_eq!(
        infer_faculty("Bachelor of Accounting and Tax Administration"),
        Faculty::AccountingAndFinance
    );
    // "tax" (rule 9) is checked before "events" (rule 11).
    assert_eq!(
        infer_faculty("Higher Certificate in Tax and Events"),
        Faculty::AccountingAndFinance
    );
}

#[test]
fn description_truncation_through_transform() {
    let long = RawQualification {
        about: Some("x".repeat(250)),
        ..RawQualification::new("Bachelor of Commerce", Some(7))
    };
    let short = RawQualification {
        about: Some("y".repeat(150)),
        ..RawQualification::new("Master of Commerce", Some(9))
    };
    let catalogue = transform_catalogue(&[long, short]).expect("transform");
    let records = catalogue.as_slice();
    assert_eq!(records[0].description, format!("{}...", "x".repeat(200)));
    assert_eq!(records[1].description, "y".repeat(150));
}

#[test]
fn two_record_catalogue_end_to_end() {
    let records = vec![
        RawQualification::new("Bachelor of Commerce in Accounting", Some(7)),
        RawQualification::new("Master of Business Administration", Some(9)),
    ];
    let catalogue = transform_catalogue(&records).expect("transform");

    assert_eq!(catalogue.len(), 2);
    let ids: Vec<&str> = catalogue.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["BCOM_ACCOUNTING", "MBA"]);
    let levels: Vec<QualificationLevel> = catalogue.iter().map(|q| q.level).collect();
    assert_eq!(
        levels,
        vec![
            QualificationLevel::UndergraduateDegree,
            QualificationLevel::MastersDegree
        ]
    );

    let summary = catalogue.summary();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.by_level.len(), 2);
    assert_eq!(summary.by_level.get("Undergraduate Degree"), Some(&1));
    assert_eq!(summary.by_level.get("Masters Degree"), Some(&1));
}

#[test]
fn order_and_length_are_preserved() {
    let titles = [
        "Higher Certificate in Marketing",
        "Doctor of Business Administration",
        "Advanced Certificate in Project Management",
        "Bachelor of Education in Senior Phase",
    ];
    let records: Vec<RawQualification> = titles
        .iter()
        .map(|title| RawQualification::new(*title, None))
        .collect();
    let catalogue = transform_catalogue(&records).expect("transform");
    let names: Vec<&str> = catalogue.iter().map(|q| q.name.as_str()).collect();
    assert_eq!(names, titles);
}

#[test]
fn colliding_identifiers_do_not_fail_the_run() {
    let records = vec![
        RawQualification::new("Master of Business Administration", Some(9)),
        RawQualification::new("MASTER OF BUSINESS ADMINISTRATION", Some(9)),
    ];
    let catalogue = transform_catalogue(&records).expect("transform");
    assert_eq!(catalogue.len(), 2);
    assert_eq!(catalogue.duplicate_ids().get("MBA"), Some(&vec![0, 1]));
}
