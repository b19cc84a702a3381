//! End-to-end tests for the generate pipeline.

use std::fs;
use std::path::Path;

use qualcat_cli::pipeline::{GenerateOptions, QueryFilter, generate, load_and_transform};
use qualcat_model::QualificationLevel;

const TWO_RECORDS: &str = r#"[
  {
    "Title": "Bachelor of Commerce in Accounting",
    "NQF_Level": 7,
    "Duration": "3 Years",
    "Credits": 360,
    "SAQA_ID": "90845",
    "AcademicProgrammeManager": "Dr A. Naidoo",
    "CareerPaths": ["Accountant", "Auditor"],
    "ShortDescription": "Foundations of financial and management accounting."
  },
  {
    "Title": "Master of Business Administration",
    "NQF_Level": 9,
    "Duration": "2 Years",
    "Credits": 180,
    "About": "A general management programme for experienced professionals."
  }
]"#;

fn write_catalogue(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("catalogue.json");
    fs::write(&path, contents).expect("write catalogue");
    path
}

#[test]
fn generate_writes_module_next_to_input() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_catalogue(dir.path(), TWO_RECORDS);

    let result = generate(&GenerateOptions::new(&input)).expect("generate");

    let output = dir.path().join("qualifications.ts");
    assert_eq!(result.output.as_deref(), Some(output.as_path()));
    let module = fs::read_to_string(&output).expect("read module");
    assert!(module.contains("Auto-generated from catalogue.json"));
    assert!(module.contains("\"id\": \"BCOM_ACCOUNTING\""));
    assert!(module.contains("\"id\": \"MBA\""));
    assert!(module.contains("\"coordinator\": \"Dr A. Naidoo\""));
    assert!(result.duplicate_ids.is_empty());
}

#[test]
fn summary_counts_levels_and_faculties() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_catalogue(dir.path(), TWO_RECORDS);

    let result = generate(&GenerateOptions::new(&input).with_dry_run(true)).expect("generate");

    assert_eq!(result.summary.total, 2);
    assert_eq!(result.summary.by_level.len(), 2);
    assert_eq!(result.summary.by_level["Undergraduate Degree"], 1);
    assert_eq!(result.summary.by_level["Masters Degree"], 1);
    assert_eq!(result.summary.by_faculty["Accounting and Finance"], 1);
    assert_eq!(result.summary.by_faculty["Business Management"], 1);
}

#[test]
fn repeated_runs_produce_identical_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_catalogue(dir.path(), TWO_RECORDS);
    let options = GenerateOptions::new(&input);

    generate(&options).expect("first run");
    let first = fs::read(&options.output).expect("read first");
    generate(&options).expect("second run");
    let second = fs::read(&options.output).expect("read second");

    assert_eq!(first, second);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_catalogue(dir.path(), TWO_RECORDS);

    let result = generate(&GenerateOptions::new(&input).with_dry_run(true)).expect("generate");

    assert!(result.output.is_none());
    assert!(!dir.path().join("qualifications.ts").exists());
}

#[test]
fn custom_output_and_title() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_catalogue(dir.path(), TWO_RECORDS);
    let output = dir.path().join("web").join("src").join("catalogue.ts");
    let options = GenerateOptions::new(&input)
        .with_output(Some(output.clone()))
        .with_title(Some("MANCOSA Programmes".to_string()));

    generate(&options).expect("generate");

    let module = fs::read_to_string(&output).expect("read module");
    assert!(module.starts_with("/**\n * MANCOSA Programmes\n"));
}

#[test]
fn record_without_title_aborts_without_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_catalogue(
        dir.path(),
        r#"[{"Title": "Higher Certificate in Marketing", "NQF_Level": 5}, {"NQF_Level": 7}]"#,
    );

    let error = generate(&GenerateOptions::new(&input)).unwrap_err();

    assert!(format!("{error:#}").contains("record 1 has no title"));
    assert!(!dir.path().join("qualifications.ts").exists());
}

#[test]
fn failed_run_keeps_previous_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_catalogue(dir.path(), TWO_RECORDS);
    let options = GenerateOptions::new(&input);
    generate(&options).expect("first run");
    let before = fs::read(&options.output).expect("read module");

    fs::write(&input, "{ not json").expect("corrupt catalogue");
    assert!(generate(&options).is_err());

    assert_eq!(fs::read(&options.output).expect("read module"), before);
}

#[test]
fn missing_catalogue_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let error = load_and_transform(&dir.path().join("absent.json")).unwrap_err();
    assert!(format!("{error:#}").contains("absent.json"));
}

#[test]
fn duplicate_identifiers_are_reported_but_not_fatal() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_catalogue(
        dir.path(),
        r#"[
          {"Title": "Master of Business Administration", "NQF_Level": 9},
          {"Title": "master of business administration", "NQF_Level": 9}
        ]"#,
    );
    let result = generate(&GenerateOptions::new(&input).with_dry_run(true)).expect("generate");

    assert_eq!(result.summary.total, 2);
    assert_eq!(result.duplicate_ids, vec!["MBA".to_string()]);
}

#[test]
fn list_filter_over_loaded_catalogue() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_catalogue(dir.path(), TWO_RECORDS);
    let catalogue = load_and_transform(&input).expect("load");

    let filter = QueryFilter {
        level: Some(QualificationLevel::MastersDegree),
        ..QueryFilter::default()
    };
    let matches = filter.apply(&catalogue);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "MBA");
    assert_eq!(matches[0].duration_years, 2);
    assert_eq!(matches[0].total_credits, 180);
}
