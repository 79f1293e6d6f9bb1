//! Integration tests for the results parser through the public library API

use parse_results::results::{parse_line, ResultsLoader};
use rstest::rstest;
use std::io::Write;

#[rstest]
#[case("name:widget", Some(("name", "widget")))]
#[case("size:", Some(("size", "")))]
#[case(":widget", Some(("", "widget")))]
#[case("a : b", Some(("a ", " b")))]
#[case("  name:widget  ", Some(("name", "widget")))]
#[case("bad line no colon", None)]
#[case("weird:a:b", None)]
#[case("", None)]
#[case("   \t ", None)]
fn line_edge_cases(#[case] line: &str, #[case] expected: Option<(&str, &str)>) {
    assert_eq!(parse_line(line), expected);
}

#[test]
fn sample_results_file_end_to_end() {
    let source = "name:widget\ncount:5\nbad line no colon\nweird:a:b\nsize:\n";
    let params = ResultsLoader::from_string(source).params();

    let pairs: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(pairs, vec![("name", "widget"), ("count", "5"), ("size", "")]);
}

#[test]
fn partially_malformed_input_keeps_what_parsed() {
    let params = ResultsLoader::from_string("good:yes\n::\nbroken\n").params();
    assert_eq!(params.len(), 1);
    assert_eq!(params["good"], "yes");
}

#[test]
fn loader_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(file, "a:1\nb:2\n").expect("write temp file");

    let params = ResultsLoader::from_path(file.path())
        .expect("load results file")
        .params();
    assert_eq!(params["a"], "1");
    assert_eq!(params["b"], "2");
}

#[test]
fn reporting_surfaces_malformed_lines() {
    let source = "name:widget\nbad line no colon\nweird:a:b\n";
    let mut skipped = Vec::new();
    let params = ResultsLoader::from_string(source)
        .params_reporting(|line| skipped.push(line.to_string()));

    assert_eq!(params.len(), 1);
    assert_eq!(skipped, vec!["bad line no colon", "weird:a:b"]);
}
