use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, GzipLevel};
use parquet::file::properties::WriterProperties;
use tempfile::TempDir;

fn cli_bin() -> &'static str {
    env!("CARGO_BIN_EXE_parquet-tools")
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(cli_bin()).args(args).output().unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        stdout(output),
        stderr(output)
    );
}

fn write_people(path: &Path, ids: &[i64], compression: Compression) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("name", DataType::Utf8, true),
        Field::new("city", DataType::Utf8, true),
    ]));
    let names: Vec<String> = ids.iter().map(|i| format!("person{i}")).collect();
    let cities: Vec<&str> = ids.iter().map(|_| "Tokyo").collect();
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(ids.to_vec())) as ArrayRef,
            Arc::new(StringArray::from(names)) as ArrayRef,
            Arc::new(StringArray::from(cities)) as ArrayRef,
        ],
    )
    .unwrap();
    let props = WriterProperties::builder()
        .set_compression(compression)
        .build();
    let mut writer = ArrowWriter::try_new(fs::File::create(path).unwrap(), schema, Some(props))
        .unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

#[test]
fn version_flag() {
    for flag in ["-v", "--version"] {
        let output = run_cli(&[flag]);
        assert_success(&output);
        assert!(stdout(&output).starts_with("parquet-tools "));
    }
}

#[test]
fn head_prints_requested_rows() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("people.parquet");
    write_people(&file, &[1, 2, 3, 4, 5], Compression::SNAPPY);

    let output = run_cli(&[
        "head",
        path_str(&file),
        "-n",
        "2",
    ]);
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("person1"));
    assert!(text.contains("person2"));
    assert!(!text.contains("person3"));
}

#[test]
fn head_writes_csv() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("people.parquet");
    let csv = dir.path().join("head.csv");
    write_people(&file, &[1, 2, 3], Compression::SNAPPY);

    let output = run_cli(&[
        "head",
        path_str(&file),
        "-o",
        path_str(&csv),
    ]);
    assert_success(&output);
    assert!(stdout(&output).contains("Saved:"));
    let text = fs::read_to_string(&csv).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "id,name,city");
    assert_eq!(lines.len(), 4);
}

#[test]
fn head_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["head", path_str(&dir.path().join("absent.parquet"))]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("File not found"));
}

#[test]
fn info_text() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("people.parquet");
    let ids: Vec<i64> = (0..1000).collect();
    write_people(&file, &ids, Compression::GZIP(GzipLevel::default()));

    let output = run_cli(&["info", path_str(&file)]);
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("=== File Info ==="));
    assert!(text.contains("Rows: 1,000"));
    assert!(text.contains("Columns: 3"));
    assert!(text.contains("Row Groups: 1"));
    assert!(text.contains("Compression: GZIP"));
    assert!(text.contains("=== Schema ==="));
    assert!(text.contains("  id: int64"));
    assert!(text.contains("  name: string"));
}

#[test]
fn info_yaml() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("people.parquet");
    write_people(&file, &[1, 2, 3, 4, 5], Compression::SNAPPY);

    let output = run_cli(&["info", path_str(&file), "--yaml"]);
    assert_success(&output);
    let doc: serde_yaml::Value = serde_yaml::from_str(&stdout(&output)).unwrap();
    assert_eq!(doc["file"]["rows"].as_u64(), Some(5));
    assert_eq!(doc["file"]["columns"].as_u64(), Some(3));
    assert_eq!(doc["file"]["compression"].as_str(), Some("SNAPPY"));
    assert_eq!(doc["schema"]["id"].as_str(), Some("int64"));
    assert_eq!(doc["schema"]["name"].as_str(), Some("string"));
}

#[test]
fn merge_directory_with_default_output() {
    let root = TempDir::new().unwrap();
    let input_dir = root.path().join("daily");
    fs::create_dir(&input_dir).unwrap();
    write_people(&input_dir.join("b.parquet"), &[3, 4], Compression::SNAPPY);
    write_people(&input_dir.join("a.parquet"), &[1, 2], Compression::SNAPPY);

    let output = run_cli(&[
        "merge",
        path_str(&input_dir),
        "-c",
        "zstd",
    ]);
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Files found: 2"));
    assert!(text.contains("Merged: 4 rows, 3 columns (compression: zstd)"));

    let merged = root.path().join("daily_merged.parquet");
    assert!(merged.exists());
    let info = run_cli(&["info", path_str(&merged)]);
    assert!(stdout(&info).contains("Compression: ZSTD"));

    let head = run_cli(&["head", path_str(&merged)]);
    let text = stdout(&head);
    let first = text.find("person1").unwrap();
    let last = text.find("person4").unwrap();
    assert!(first < last);
}

#[test]
fn merge_empty_directory_fails() {
    let root = TempDir::new().unwrap();
    let input_dir = root.path().join("empty");
    fs::create_dir(&input_dir).unwrap();

    let output = run_cli(&["merge", path_str(&input_dir)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No .parquet files found"));
    assert!(!root.path().join("empty_merged.parquet").exists());
}

#[test]
fn merge_rejects_unknown_codec() {
    let root = TempDir::new().unwrap();
    let output = run_cli(&[
        "merge",
        path_str(&root.path()),
        "-c",
        "lzo",
    ]);
    assert!(!output.status.success());
}

#[test]
fn csv2parquet_with_schema() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("people.csv");
    let schema = dir.path().join("schema.yaml");
    fs::write(&csv, "id,name,age\n1,Alice,30\n2,,\n").unwrap();
    fs::write(
        &schema,
        "fields:\n  - name: id\n    type: int64\n  - name: age\n    type: int64\n",
    )
    .unwrap();

    let output = run_cli(&[
        "csv2parquet",
        path_str(&csv),
        "--schema",
        path_str(&schema),
    ]);
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Schema loaded: 2 fields"));
    assert!(text.contains("(compression: snappy)"));

    let parquet = dir.path().join("people.parquet");
    let info = stdout(&run_cli(&["info", path_str(&parquet)]));
    assert!(info.contains("Rows: 2"));
    assert!(info.contains("  id: int64"));
    assert!(info.contains("  age: int64"));
    assert!(info.contains("  name: string"));
}

#[test]
fn csv2parquet_warns_on_extension_and_honours_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("people.txt");
    let out = dir.path().join("out.parquet");
    fs::write(&input, "a,b\n1,2\n").unwrap();

    let output = run_cli(&[
        "csv2parquet",
        path_str(&input),
        "-o",
        path_str(&out),
        "-c",
        "none",
    ]);
    assert_success(&output);
    assert!(stderr(&output).contains("Warning: Input file does not have .csv extension"));
    assert!(out.exists());
}

#[test]
fn csv2parquet_missing_schema_file() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("people.csv");
    fs::write(&csv, "a\n1\n").unwrap();

    let output = run_cli(&[
        "csv2parquet",
        path_str(&csv),
        "--schema",
        path_str(&dir.path().join("nonexistent.yaml")),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Schema file not found"));
    assert!(!dir.path().join("people.parquet").exists());
}

#[test]
fn csv2parquet_cast_failure_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("people.csv");
    let schema = dir.path().join("schema.json");
    fs::write(&csv, "id\n1\nx\n").unwrap();
    fs::write(&schema, r#"{"fields": [{"name": "id", "type": "int64"}]}"#).unwrap();

    let output = run_cli(&[
        "csv2parquet",
        path_str(&csv),
        "--schema",
        path_str(&schema),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot cast column 'id' row 1"));
    assert!(!dir.path().join("people.parquet").exists());
}
