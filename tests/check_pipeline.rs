//! Tests for the full read → check → write pipeline.
//!
//! Every test resolves against `StaticResolver` fixtures, so no network access
//! is needed.

use std::io;

use mailauth_check::config::MAX_LINE_BYTES;
use mailauth_check::dns::StaticResolver;
use mailauth_check::{run_check, CheckReport, LookupError};
use tokio::io::BufReader;

const HEADER: &str = "domain, hasMX, hasSPF, spfRecord, hasDMARC, dmarcRecord";

fn fixture_resolver() -> StaticResolver {
    StaticResolver::new()
        .with_mx("example.com", vec![(10, "mx.example.com.".to_string())])
        .with_txt(
            "example.com",
            vec!["v=spf1 include:_spf.example.com ~all".to_string()],
        )
        .with_txt("_dmarc.example.com", vec!["v=DMARC1; p=none".to_string()])
        .with_mx_error("nodns.invalid", LookupError::NxDomain)
        .with_txt_error("nodns.invalid", LookupError::NxDomain)
        .with_txt_error("_dmarc.nodns.invalid", LookupError::NxDomain)
        .with_mx("a.com", vec![(5, "mail.a.com.".to_string())])
        .with_txt("b.com", vec!["v=spf1 -all".to_string()])
}

/// Runs the pipeline over `input` and returns the report and the output text.
async fn run_on(input: &[u8], resolver: &StaticResolver) -> (CheckReport, String) {
    let mut output: Vec<u8> = Vec::new();
    let report = run_check(BufReader::new(input), &mut output, resolver)
        .await
        .expect("pipeline should succeed");
    (report, String::from_utf8(output).expect("output is UTF-8"))
}

#[tokio::test]
async fn test_example_com_scenario() {
    let (_, output) = run_on(b"example.com\n", &fixture_resolver()).await;
    assert_eq!(
        output,
        format!(
            "{HEADER}\nexample.com, true, true, v=spf1 include:_spf.example.com ~all, true, v=DMARC1; p=none\n"
        )
    );
}

#[tokio::test]
async fn test_all_lookups_fail_scenario() {
    let (_, output) = run_on(b"nodns.invalid\n", &fixture_resolver()).await;
    assert_eq!(
        output,
        format!("{HEADER}\nnodns.invalid, false, false, , false, \n")
    );
}

#[tokio::test]
async fn test_rows_follow_input_order() {
    let (report, output) = run_on(b"a.com\nb.com\n", &fixture_resolver()).await;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            HEADER,
            "a.com, true, false, , false, ",
            "b.com, false, true, v=spf1 -all, false, ",
        ]
    );
    assert_eq!(report.total_domains, 2);
    assert_eq!(report.with_mx, 1);
    assert_eq!(report.with_spf, 1);
    assert_eq!(report.with_dmarc, 0);
}

#[tokio::test]
async fn test_reversed_input_reverses_rows() {
    let (_, output) = run_on(b"b.com\na.com\n", &fixture_resolver()).await;
    let domains: Vec<&str> = output
        .lines()
        .skip(1)
        .map(|line| line.split(", ").next().unwrap_or_default())
        .collect();
    assert_eq!(domains, vec!["b.com", "a.com"]);
}

#[tokio::test]
async fn test_empty_input_writes_only_header() {
    let (report, output) = run_on(b"", &fixture_resolver()).await;
    assert_eq!(output, format!("{HEADER}\n"));
    assert_eq!(report.total_domains, 0);
}

#[tokio::test]
async fn test_header_written_once() {
    let (_, output) = run_on(b"a.com\nb.com\nexample.com\n", &fixture_resolver()).await;
    assert_eq!(output.matches(HEADER).count(), 1);
    assert!(output.starts_with(HEADER));
}

#[tokio::test]
async fn test_missing_trailing_newline() {
    let (report, output) = run_on(b"a.com", &fixture_resolver()).await;
    assert_eq!(report.total_domains, 1);
    assert_eq!(output, format!("{HEADER}\na.com, true, false, , false, \n"));
}

#[tokio::test]
async fn test_crlf_terminator_is_stripped() {
    let (_, output) = run_on(b"a.com\r\n", &fixture_resolver()).await;
    assert_eq!(output, format!("{HEADER}\na.com, true, false, , false, \n"));
}

#[tokio::test]
async fn test_lines_are_not_trimmed() {
    // The padded name is looked up as-is and matches nothing
    let (_, output) = run_on(b" a.com \n", &fixture_resolver()).await;
    assert_eq!(output, format!("{HEADER}\n a.com , false, false, , false, \n"));
}

#[tokio::test]
async fn test_blank_line_is_checked() {
    let (report, output) = run_on(b"a.com\n\nb.com\n", &fixture_resolver()).await;
    assert_eq!(report.total_domains, 3);
    assert_eq!(output.lines().nth(2), Some(", false, false, , false, "));
}

#[tokio::test]
async fn test_running_twice_is_idempotent() {
    let resolver = fixture_resolver();
    let (_, first) = run_on(b"example.com\nnodns.invalid\n", &resolver).await;
    let (_, second) = run_on(b"example.com\nnodns.invalid\n", &resolver).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_read_error_is_fatal_after_earlier_rows() {
    let resolver = fixture_resolver();
    let mut output: Vec<u8> = Vec::new();

    // The stream yields one line, then fails
    let input = tokio_test::io::Builder::new()
        .read(b"a.com\n")
        .read_error(io::Error::new(io::ErrorKind::ConnectionReset, "stream reset"))
        .build();
    let result = run_check(BufReader::new(input), &mut output, &resolver).await;

    let err = result.expect_err("a failing stream should fail the run");
    let message = format!("{err:#}");
    assert!(message.starts_with("Error reading from input"));
    assert!(message.contains("stream reset"));
    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!("{HEADER}\na.com, true, false, , false, \n")
    );
}

#[tokio::test]
async fn test_invalid_utf8_line_is_checked_and_run_continues() {
    let (report, output) = run_on(b"caf\xe9.com\nb.com\n", &fixture_resolver()).await;
    assert_eq!(report.total_domains, 2);
    assert_eq!(
        output,
        format!(
            "{HEADER}\ncaf\u{FFFD}.com, false, false, , false, \nb.com, false, true, v=spf1 -all, false, \n"
        )
    );
}

#[tokio::test]
async fn test_overlong_line_is_fatal_after_earlier_rows() {
    let resolver = fixture_resolver();
    let mut output: Vec<u8> = Vec::new();

    let mut input = b"a.com\n".to_vec();
    input.extend(std::iter::repeat(b'x').take(MAX_LINE_BYTES + 1));
    input.extend_from_slice(b"\nb.com\n");
    let result = run_check(BufReader::new(input.as_slice()), &mut output, &resolver).await;

    let err = result.expect_err("an over-long line should fail the run");
    assert!(format!("{err:#}").starts_with("Error reading from input"));
    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!("{HEADER}\na.com, true, false, , false, \n")
    );
}
