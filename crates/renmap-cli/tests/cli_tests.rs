//! End-to-end driver tests: table file in, mapping file out.

use std::fs;

use renmap_cli::args::CliArgs;
use renmap_cli::driver;

#[test]
fn renders_table_file_to_output_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("table.json");
    let output = dir.path().join("mapping.json");

    fs::write(
        &input,
        r#"{
            "classes": [{
                "original": "com/example/Foo",
                "renamed": "a/a",
                "fields": [{"original": "counter", "renamed": "b"}],
                "methods": [{"original": "doWork", "renamed": "c"}, {"original": "doWork"}]
            }]
        }"#,
    )
    .expect("write input table");

    let args = CliArgs {
        input: Some(input),
        output: Some(output.clone()),
    };
    driver::run(&args).expect("driver succeeds");

    let rendered = fs::read_to_string(&output).expect("read rendered mapping");
    let expected = concat!(
        "{\n",
        "  \"com.example.Foo\": {\n",
        "    \"name\": \"a.a\",\n",
        "    \"members\": {\n",
        "      \"counter\": \"b\",\n",
        "      \"doWork\": \"c\"\n",
        "    }\n",
        "  }\n",
        "}\n",
    );
    assert_eq!(rendered, expected);
}

#[test]
fn empty_table_renders_an_empty_document() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("table.json");
    let output = dir.path().join("mapping.json");

    fs::write(&input, r#"{"classes": []}"#).expect("write input table");

    let args = CliArgs {
        input: Some(input),
        output: Some(output.clone()),
    };
    driver::run(&args).expect("driver succeeds");

    assert_eq!(
        fs::read_to_string(&output).expect("read rendered mapping"),
        "{\n}\n"
    );
}

#[test]
fn malformed_table_reports_the_offending_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("table.json");
    fs::write(&input, "not a table").expect("write input table");

    let args = CliArgs {
        input: Some(input.clone()),
        output: None,
    };
    let err = driver::run(&args).expect_err("malformed input must fail");
    assert!(
        format!("{}", err).contains("table.json"),
        "error: {:#}",
        err
    );
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("does-not-exist.json");

    let args = CliArgs {
        input: Some(input),
        output: None,
    };
    let err = driver::run(&args).expect_err("missing input must fail");
    assert!(
        format!("{}", err).contains("failed to open"),
        "error: {:#}",
        err
    );
}
