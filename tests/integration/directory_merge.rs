//! End-to-end merges of a scanned directory.

use pdfmerge::config::{CompressionLevel, Config, OverwriteMode};
use pdfmerge::merge::MergeOutcome;
use pdfmerge::walker::scan;
use rstest::rstest;
use std::fs;
use tempfile::tempdir;

use crate::common::{
    create_corrupt_pdf, create_locked_pdf, create_test_pdf, expect_merged, merge_answering,
    page_tags,
};
use pdfmerge::error::MergeError;

#[test]
fn test_scan_order_is_byte_order_regardless_of_extension_case() {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("c.pdf"), "c", 1);
    create_test_pdf(&dir.path().join("a.pdf"), "a", 1);
    create_test_pdf(&dir.path().join("B.PDF"), "B", 1);
    fs::write(dir.path().join("readme.txt"), "not a pdf").unwrap();

    let files = scan(dir.path()).unwrap();
    let names: Vec<String> = files.iter().map(|f| f.name()).collect();

    assert_eq!(names, vec!["B.PDF", "a.pdf", "c.pdf"]);
}

#[test]
fn test_merge_directory_concatenates_in_scan_order() {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("02-body.pdf"), "body", 3);
    create_test_pdf(&dir.path().join("01-intro.pdf"), "intro", 1);
    create_test_pdf(&dir.path().join("03-end.PDF"), "end", 2);

    let report = expect_merged(merge_answering(&Config::new(dir.path()), true).unwrap());

    assert_eq!(report.succeeded(), 3);
    assert_eq!(report.attempted(), 3);
    assert_eq!(report.total_pages, 6);
    assert_eq!(
        page_tags(&dir.path().join("merged_pdfs.pdf")),
        vec!["intro-1", "body-1", "body-2", "body-3", "end-1", "end-2"]
    );
}

#[test]
fn test_one_corrupt_file_is_skipped() {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("a.pdf"), "a", 2);
    create_corrupt_pdf(&dir.path().join("b.pdf"));
    create_test_pdf(&dir.path().join("c.pdf"), "c", 1);

    let report = expect_merged(merge_answering(&Config::new(dir.path()), true).unwrap());

    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.attempted(), 3);
    let failed: Vec<_> = report.failures().map(|(path, _)| path.to_path_buf()).collect();
    assert_eq!(failed, vec![dir.path().join("b.pdf")]);
    assert_eq!(
        page_tags(&report.output_path),
        vec!["a-1", "a-2", "c-1"]
    );
}

#[test]
fn test_password_protected_file_is_skipped() {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("a.pdf"), "a", 2);
    create_locked_pdf(&dir.path().join("b.pdf"), "b", "secret");

    let report = expect_merged(merge_answering(&Config::new(dir.path()), true).unwrap());

    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.attempted(), 2);
    let (path, error) = report.failures().next().unwrap();
    assert_eq!(path, dir.path().join("b.pdf"));
    assert!(matches!(error, MergeError::EncryptedPdf { .. }));
    assert_eq!(page_tags(&report.output_path), vec!["a-1", "a-2"]);
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_next_to_inputs_is_ignored() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("a.pdf"), "a", 1);
    symlink("loop", dir.path().join("loop")).unwrap();
    symlink("cycle.pdf", dir.path().join("cycle.pdf")).unwrap();

    let files = scan(dir.path()).unwrap();
    assert_eq!(files.len(), 1);

    let report = expect_merged(merge_answering(&Config::new(dir.path()), true).unwrap());
    assert_eq!(page_tags(&report.output_path), vec!["a-1"]);
}

#[rstest]
#[case("report", "report.pdf")]
#[case("report.PDF", "report.PDF")]
#[case("report.pdf", "report.pdf")]
fn test_output_name_normalization(#[case] requested: &str, #[case] written: &str) {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("a.pdf"), "a", 1);
    let config = Config::new(dir.path()).with_output_name(requested);

    let report = expect_merged(merge_answering(&config, true).unwrap());

    assert_eq!(report.output_path, dir.path().join(written));
    assert!(dir.path().join(written).is_file());
    assert!(!dir.path().join(format!("{written}.pdf")).exists());
}

#[test]
fn test_rerun_with_overwrite_is_idempotent() {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("a.pdf"), "a", 2);
    create_test_pdf(&dir.path().join("b.pdf"), "b", 1);
    let config = Config::new(dir.path());
    let output = config.output_path();

    let first = expect_merged(merge_answering(&config, true).unwrap());
    let first_tags = page_tags(&output);

    let second = expect_merged(merge_answering(&config, true).unwrap());
    let second_tags = page_tags(&output);

    assert_eq!(first.total_pages, second.total_pages);
    assert_eq!(second.attempted(), 2, "previous output must not be an input");
    assert_eq!(first_tags, second_tags);
    assert_eq!(second_tags, vec!["a-1", "a-2", "b-1"]);
}

#[test]
fn test_declined_overwrite_leaves_output_untouched() {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("a.pdf"), "a", 1);
    let output = dir.path().join("merged_pdfs.pdf");
    fs::write(&output, b"previous result").unwrap();

    let outcome = merge_answering(&Config::new(dir.path()), false).unwrap();

    match outcome {
        MergeOutcome::Cancelled { output: cancelled } => assert_eq!(cancelled, output),
        other => panic!("expected cancellation, got {other:?}"),
    }
    assert_eq!(fs::read(&output).unwrap(), b"previous result");
}

#[test]
fn test_force_overwrites_without_asking() {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("a.pdf"), "a", 1);
    fs::write(dir.path().join("merged_pdfs.pdf"), b"stale").unwrap();
    let config = Config::new(dir.path()).with_overwrite_mode(OverwriteMode::Force);

    // A prompt would answer "no"; force must not ask.
    let report = expect_merged(merge_answering(&config, false).unwrap());

    assert_eq!(page_tags(&report.output_path), vec!["a-1"]);
}

#[rstest]
#[case(CompressionLevel::None)]
#[case(CompressionLevel::Standard)]
#[case(CompressionLevel::Maximum)]
fn test_every_compression_level_produces_a_readable_pdf(#[case] level: CompressionLevel) {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("a.pdf"), "a", 2);
    create_test_pdf(&dir.path().join("b.pdf"), "b", 2);
    let mut config = Config::new(dir.path());
    config.compression = level;

    let report = expect_merged(
        pdfmerge::merge::Merger::from_config(&config)
            .with_formatter(pdfmerge::output::OutputFormatter::quiet())
            .merge_directory(&config, &mut |_: &std::path::Path| true)
            .unwrap(),
    );

    assert_eq!(page_tags(&report.output_path), vec!["a-1", "a-2", "b-1", "b-2"]);
}

#[test]
fn test_dry_run_reports_pages_and_writes_nothing() {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("a.pdf"), "a", 4);
    create_corrupt_pdf(&dir.path().join("b.pdf"));
    let mut config = Config::new(dir.path());
    config.dry_run = true;

    let outcome = merge_answering(&config, false).unwrap();

    let MergeOutcome::DryRun(report) = outcome else {
        panic!("expected a dry run");
    };
    assert_eq!(report.total_pages, 4);
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.attempted(), 2);
    assert!(report.write.is_none());
    assert!(!config.output_path().exists());
}
