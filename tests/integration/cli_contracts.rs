use std::fs;

use clap::Parser;
use no_file_left_behind::config::ReconcileConfig;
use no_file_left_behind::tooling::cli::{Cli, CliContext};
use no_file_left_behind::ReconcileError;

use crate::integration::support::{read_lines, Trees};

fn cli_for(trees: &Trees, extra: &[&str]) -> Cli {
    let mut args = vec![
        "no-file-left-behind".to_string(),
        "--archive".to_string(),
        trees.archive.to_string_lossy().to_string(),
        "--scratch".to_string(),
        trees.scratch.to_string_lossy().to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn text_summary_and_reports() {
    let trees = Trees::new();
    let a = trees.scratch_file("a.txt", b"0123456789");
    let b = trees.scratch_file("b.txt", b"abcdefghij");
    let z = trees.scratch_file("nested/z.txt", b"only in scratch");
    trees.archive_file("deep/x.bin", b"0123456789");
    trees.archive_file("other.bin", b"unrelated");

    let out = trees.out_dir();
    let cli = cli_for(&trees, &["--output", out.to_str().unwrap()]);
    let context = CliContext::from_config(ReconcileConfig::default());
    let output = context.execute(&cli).unwrap();

    assert_eq!(
        output,
        "2/3 scratch files do not appear in the archive (2 files)."
    );

    let present = read_lines(&out.join("duplicates.txt"));
    assert_eq!(present, vec![a.to_string_lossy().to_string()]);

    let mut expected_missing = vec![
        b.to_string_lossy().to_string(),
        z.to_string_lossy().to_string(),
    ];
    expected_missing.sort();
    let missing = fs::read_to_string(out.join("missing.txt")).unwrap();
    assert_eq!(missing, format!("{}\n", expected_missing.join("\n")));
}

#[test]
fn json_summary_contract_has_required_fields() {
    let trees = Trees::new();
    trees.scratch_file("a.txt", b"same");
    trees.scratch_file(".DS_Store", b"noise");
    trees.archive_file("a-copy.txt", b"same");

    let cli = cli_for(&trees, &["--format", "json"]);
    let context = CliContext::from_config(ReconcileConfig::default());
    let output = context.execute(&cli).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("missing").and_then(|v| v.as_u64()), Some(0));
    assert_eq!(parsed.get("matched").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(parsed.get("scratch").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(parsed.get("archive").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(parsed.get("ignored").and_then(|v| v.as_u64()), Some(1));
}

#[test]
fn no_output_flag_writes_nothing() {
    let trees = Trees::new();
    trees.scratch_file("a.txt", b"a");

    let cli = cli_for(&trees, &[]);
    let context = CliContext::from_config(ReconcileConfig::default());
    let output = context.execute(&cli).unwrap();

    assert_eq!(
        output,
        "1/1 scratch files do not appear in the archive (0 files)."
    );
    assert!(!trees.out_dir().exists());
}

#[test]
fn missing_scratch_root_is_an_error() {
    let trees = Trees::new();
    let cli = Cli::try_parse_from([
        "no-file-left-behind",
        "--archive",
        trees.archive.to_str().unwrap(),
        "--scratch",
        trees.temp.path().join("gone").to_str().unwrap(),
    ])
    .unwrap();

    let context = CliContext::from_config(ReconcileConfig::default());
    let err = context.execute(&cli).unwrap_err();
    assert!(matches!(err, ReconcileError::RootNotFound { .. }));
    assert!(err.to_string().starts_with("scratch root not found"));
}

#[test]
fn single_file_roots_are_supported() {
    let trees = Trees::new();
    let scratch_file = trees.scratch_file("photo.jpg", b"pixels");
    let archive_file = trees.archive_file("backup.jpg", b"pixels");

    let cli = Cli::try_parse_from([
        "no-file-left-behind",
        "--archive",
        archive_file.to_str().unwrap(),
        "--scratch",
        scratch_file.to_str().unwrap(),
    ])
    .unwrap();

    let context = CliContext::from_config(ReconcileConfig::default());
    let output = context.execute(&cli).unwrap();
    assert_eq!(
        output,
        "0/1 scratch files do not appear in the archive (1 files)."
    );
}

#[test]
fn config_file_controls_ignored_suffixes() {
    let trees = Trees::new();
    trees.scratch_file("keep.txt", b"keep");
    trees.scratch_file("Thumbs.db", b"thumbs");
    trees.scratch_file(".DS_Store", b"now counted");
    trees.archive_file("keep.txt", b"keep");

    let config_path = trees.temp.path().join("nflb.toml");
    fs::write(&config_path, "[ignore]\nsuffixes = [\"Thumbs.db\"]\n").unwrap();

    let cli = cli_for(&trees, &["--config", config_path.to_str().unwrap()]);
    let context = CliContext::new(&cli).unwrap();
    assert_eq!(context.config().ignore.suffixes, vec!["Thumbs.db"]);

    let output = context.execute(&cli).unwrap();
    assert_eq!(
        output,
        "1/2 scratch files do not appear in the archive (1 files)."
    );
}

#[test]
fn unwritable_output_is_an_error() {
    let trees = Trees::new();
    trees.scratch_file("a.txt", b"a");
    let blocker = trees.temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let cli = cli_for(&trees, &["--output", blocker.to_str().unwrap()]);
    let context = CliContext::from_config(ReconcileConfig::default());
    let err = context.execute(&cli).unwrap_err();
    assert!(matches!(err, ReconcileError::Report { .. }));
}

#[test]
fn summary_survives_report_failure() {
    let trees = Trees::new();
    trees.scratch_file("a.txt", b"a");
    trees.scratch_file("b.txt", b"b");
    trees.archive_file("a.txt", b"a");
    let blocker = trees.temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let cli = cli_for(&trees, &["--output", blocker.to_str().unwrap()]);
    let context = CliContext::from_config(ReconcileConfig::default());
    let output = context.run(&cli).unwrap();

    assert_eq!(
        output.summary,
        "1/2 scratch files do not appear in the archive (1 files)."
    );
    match output.reports {
        Some(Err(ReconcileError::Report { path, .. })) => assert_eq!(path, blocker),
        other => panic!("expected a report error, got {:?}", other),
    }
}

#[test]
fn run_without_output_has_no_reports() {
    let trees = Trees::new();
    trees.scratch_file("a.txt", b"a");

    let cli = cli_for(&trees, &[]);
    let context = CliContext::from_config(ReconcileConfig::default());
    let output = context.run(&cli).unwrap();
    assert!(output.reports.is_none());
    assert_eq!(
        output.summary,
        "1/1 scratch files do not appear in the archive (0 files)."
    );
}
