// crates/voxrle-cli/tests/cli_estimates.rs

use std::collections::BTreeMap;
use std::path::Path;
use std::process::{Command, Output};

fn voxrle() -> Command {
    Command::new(env!("CARGO_BIN_EXE_voxrle"))
}

fn run_ok(cmd: &mut Command) -> String {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn run_err(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        !out.status.success(),
        "command unexpectedly succeeded:\n{}",
        String::from_utf8_lossy(&out.stdout)
    );
    out
}

fn synth(path: &Path, dims: &str, pattern: &str) {
    run_ok(voxrle().args([
        "synth",
        "--out",
        path.to_str().unwrap(),
        "--dims",
        dims,
        "--pattern",
        pattern,
        "--mean-run",
        "150",
    ]));
}

/// (mode, workers, n) -> bits, from CSV output.
fn csv_bits(stdout: &str) -> BTreeMap<(String, usize, u32), u64> {
    let mut out = BTreeMap::new();
    for line in stdout.lines().skip(1) {
        let f: Vec<&str> = line.split(',').collect();
        assert_eq!(f.len(), 9, "bad csv line: {line}");
        out.insert(
            (f[0].to_string(), f[1].parse().unwrap(), f[2].parse().unwrap()),
            f[4].parse().unwrap(),
        );
    }
    out
}

#[test]
fn threads_and_ranks_agree_with_sequential() {
    let dir = tempfile::tempdir().unwrap();
    let vol = dir.path().join("runs.raw");
    synth(&vol, "40x30x17", "runs");
    let v = vol.to_str().unwrap();

    let common = ["--in", v, "--dims", "40x30x17", "--n-min", "2", "--n-max", "12"];

    let threads = csv_bits(&run_ok(
        voxrle()
            .arg("threads")
            .args(common)
            .args(["--workers", "1,3,8,16", "--csv", "--policy", "balanced"]),
    ));
    let ranks = csv_bits(&run_ok(
        voxrle()
            .arg("dist")
            .args(common)
            .args(["--workers", "2,5", "--csv"]),
    ));
    assert_eq!(threads.len(), 4 * 11);
    assert_eq!(ranks.len(), 2 * 11);

    let seq = run_ok(voxrle().arg("seq").args(common));

    for n in 2..=12u32 {
        let expect = threads[&("threaded".to_string(), 1, n)];
        for w in [3usize, 8, 16] {
            assert_eq!(threads[&("threaded".to_string(), w, n)], expect, "threads w={w} n={n}");
        }
        for w in [2usize, 5] {
            assert_eq!(ranks[&("distributed".to_string(), w, n)], expect, "ranks w={w} n={n}");
        }
        assert!(
            seq.contains(&format!(" {expect} |")),
            "sequential table lacks {expect} bits for n={n}:\n{seq}"
        );
    }
}

#[test]
fn alternating_volume_costs_one_packet_per_voxel() {
    let dir = tempfile::tempdir().unwrap();
    let vol = dir.path().join("alt.raw");
    synth(&vol, "1001", "alternating");

    let stdout = run_ok(voxrle().args([
        "threads",
        "--in",
        vol.to_str().unwrap(),
        "--dims",
        "1001",
        "--workers",
        "4",
        "--csv",
    ]));
    for ((_, _, n), bits) in csv_bits(&stdout) {
        assert_eq!(bits, 1001 * (n as u64 + 1), "n={n}");
    }
}

#[test]
fn stats_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let vol = dir.path().join("solid.raw");
    synth(&vol, "8x8x8", "solid");

    let stdout = run_ok(voxrle().args([
        "stats",
        "--in",
        vol.to_str().unwrap(),
        "--dims",
        "8x8x8",
    ]));
    assert!(stdout.contains("total_voxels    = 512"), "{stdout}");
    assert!(stdout.contains("= 512 (100.00%)"), "{stdout}");
    assert!(stdout.contains("runs            = 1"), "{stdout}");
    assert!(stdout.contains("zstd_bytes"), "{stdout}");
}

#[test]
fn short_volume_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let vol = dir.path().join("short.raw");
    std::fs::write(&vol, vec![0u8; 100]).unwrap();

    let out = run_err(voxrle().args([
        "seq",
        "--in",
        vol.to_str().unwrap(),
        "--dims",
        "10x10x2",
    ]));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("data unavailable"), "{stderr}");
    assert!(stderr.contains("expected 200 bytes, got 100"), "{stderr}");
}

#[test]
fn bad_configuration_is_rejected_before_work() {
    let dir = tempfile::tempdir().unwrap();
    let vol = dir.path().join("v.raw");
    synth(&vol, "64", "noise");
    let v = vol.to_str().unwrap();

    let cases: [&[&str]; 4] = [
        &["threads", "--in", v, "--dims", "64", "--threshold", "256"],
        &["threads", "--in", v, "--dims", "64", "--n-min", "9", "--n-max", "3"],
        &["threads", "--in", v, "--dims", "64", "--workers", "4,0"],
        &["dist", "--in", v, "--dims", "64", "--n-max", "64"],
    ];
    for args in cases {
        let out = run_err(voxrle().args(args));
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("invalid configuration"), "args={args:?}\n{stderr}");
    }
}
