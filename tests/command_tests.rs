use perflog_studio::commands::{check_log_file, execute_parse, validate_args, ParseArgs};
use perflog_studio::output::{read_report, ExportMode};
use std::path::{Path, PathBuf};

const LOG: &str = "\
CMainFrame.OnCreate:[35996247]
    Page.DataReady:[65535.36866.35997371]
    [35997371]
    Obj.ResetSize: [35997380]
    [35997390]
[35997417]
";

fn write_log(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("trace.log");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_validate_args_defaults_need_input() {
    assert!(validate_args(&ParseArgs::default()).is_err());
}

#[test]
fn test_execute_parse_complete() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_log(temp_dir.path(), LOG);
    let output_csv = temp_dir.path().join("costs.csv");
    let output_json = temp_dir.path().join("costs.json");

    let outcome = execute_parse(ParseArgs {
        input,
        output_csv: output_csv.clone(),
        output_json: Some(output_json.clone()),
        mode: ExportMode::Complete,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(outcome.records, 3);
    assert_eq!(outcome.functions, 3);
    assert_eq!(outcome.rows_written, 3);

    let csv = std::fs::read_to_string(&output_csv).unwrap();
    assert_eq!(
        csv,
        "function,parameter,cost\n\
         Page.DataReady,65535.36866,0\n\
         Obj.ResetSize,default,10\n\
         CMainFrame.OnCreate,default,1170\n"
    );

    let report = read_report(&output_json).unwrap();
    assert_eq!(report.total_records, 3);
}

#[test]
fn test_execute_parse_simple_mode() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_log(temp_dir.path(), LOG);
    let output_csv = temp_dir.path().join("costs.csv");

    let outcome = execute_parse(ParseArgs {
        input,
        output_csv,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(outcome.records, 3);
    assert_eq!(outcome.rows_written, 1);
}

#[test]
fn test_execute_parse_malformed_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_log(temp_dir.path(), "Foo:[1]\n    Bar:[2]\n    [3]\n");
    let output_csv = temp_dir.path().join("costs.csv");

    let result = execute_parse(ParseArgs {
        input,
        output_csv: output_csv.clone(),
        ..Default::default()
    });

    assert!(result.is_err());
    assert!(!output_csv.exists());
}

#[test]
fn test_execute_parse_missing_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    let result = execute_parse(ParseArgs {
        input: temp_dir.path().join("missing.log"),
        output_csv: temp_dir.path().join("costs.csv"),
        ..Default::default()
    });

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("not found"));
}

#[test]
fn test_check_log_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_log(temp_dir.path(), LOG);

    assert_eq!(check_log_file(&input).unwrap(), 3);
}
