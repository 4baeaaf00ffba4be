//! End-to-end tests for the vclip CLI.
//!
//! Error-path scenarios run without any ffmpeg present because all local
//! validation happens before the binary is resolved. The success scenario
//! substitutes a stub ffmpeg via FFMPEG_PATH.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_malformed_interval_fails_before_anything_else() {
    let mut cmd = cargo_bin_cmd!("vclip");
    cmd.arg("testvid.mp4").arg("-i").arg("10-20");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("malformed interval '10-20'"));
}

#[test]
fn test_non_numeric_interval_component() {
    let mut cmd = cargo_bin_cmd!("vclip");
    cmd.arg("testvid.mp4").arg("-i").arg("0:ab-0:54");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("is not a number"));
}

#[test]
fn test_end_before_start_is_invalid_range() {
    let mut cmd = cargo_bin_cmd!("vclip");
    cmd.arg("testvid.mp4").arg("-i").arg("0:54-0:44");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));
}

#[test]
fn test_missing_input_file() {
    let mut cmd = cargo_bin_cmd!("vclip");
    cmd.arg("/nonexistent/testvid.mp4").arg("-i").arg("0:44-0:54");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn test_input_without_intervals() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("testvid.mp4");
    std::fs::write(&input, b"video").unwrap();

    let mut cmd = cargo_bin_cmd!("vclip");
    cmd.arg(&input);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no intervals specified"));
}

#[test]
fn test_missing_interval_file() {
    let mut cmd = cargo_bin_cmd!("vclip");
    cmd.arg("testvid.mp4")
        .arg("-f")
        .arg("/nonexistent/cuts.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read interval file"));
}

#[test]
fn test_intervals_without_input_file_fail() {
    let mut cmd = cargo_bin_cmd!("vclip");
    cmd.arg("-i").arg("0:44-0:54");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no input video specified"));
}

#[test]
fn test_no_arguments_prints_help() {
    let mut cmd = cargo_bin_cmd!("vclip");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_config_path_subcommand() {
    let mut cmd = cargo_bin_cmd!("vclip");
    cmd.arg("config").arg("path");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[cfg(unix)]
mod with_stub_ffmpeg {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// Install a stub ffmpeg that writes its last argument (the output
    /// path) and exits 0.
    fn write_stub(dir: &Path) -> std::path::PathBuf {
        let stub = dir.join("ffmpeg");
        std::fs::write(&stub, "#!/bin/sh\nfor last; do :; done\necho clip > \"$last\"\n").unwrap();
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();
        stub
    }

    #[test]
    fn test_clip_and_merge_happy_path() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path());
        let input = dir.path().join("testvid.mp4");
        std::fs::write(&input, b"video").unwrap();
        let out_dir = dir.path().join("out");

        let mut cmd = cargo_bin_cmd!("vclip");
        cmd.env("FFMPEG_PATH", &stub)
            .arg(&input)
            .arg("-i")
            .arg("0:44-0:54")
            .arg("5:40-5:45")
            .arg("6:20-6:30")
            .arg("-o")
            .arg(&out_dir);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains(
                "Intervals to clip [00:00:44-00:00:54, 00:05:40-00:05:45, 00:06:20-00:06:30]",
            ))
            .stdout(predicate::str::contains("Processing subclip 1 out of 3"))
            .stdout(predicate::str::contains("Processing subclip 3 out of 3"))
            .stdout(predicate::str::contains("Merging subclips"))
            .stdout(predicate::str::contains("Result saved to"));

        assert!(out_dir.join("testvid_clip.mp4").exists());
    }

    #[test]
    fn test_failing_tool_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("ffmpeg");
        std::fs::write(&stub, "#!/bin/sh\necho boom >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

        let input = dir.path().join("testvid.mp4");
        std::fs::write(&input, b"video").unwrap();

        let mut cmd = cargo_bin_cmd!("vclip");
        cmd.env("FFMPEG_PATH", &stub)
            .arg(&input)
            .arg("-i")
            .arg("0:44-0:54")
            .arg("-o")
            .arg(dir.path());

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("extraction failed for interval 1"))
            .stderr(predicate::str::contains("boom"));
    }
}
