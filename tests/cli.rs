extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn writes_a_png() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("noise.png");
    Command::cargo_bin("noisegen")
        .unwrap()
        .args(&["--output", out.to_str().unwrap(), "--size", "64x48"])
        .args(&["--algorithm", "turbulence", "--colormode", "dual"])
        .assert()
        .success();
    let meta = std::fs::metadata(&out).unwrap();
    assert!(meta.len() > 0);
}

#[test]
fn rejects_a_malformed_size() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("noise.png");
    Command::cargo_bin("noisegen")
        .unwrap()
        .args(&["--output", out.to_str().unwrap(), "--size", "64by48"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
    assert!(!out.exists());
}

#[test]
fn negative_octaves_are_reported() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("noise.png");
    Command::cargo_bin("noisegen")
        .unwrap()
        .args(&["--output", out.to_str().unwrap(), "--size", "8x8", "--octaves", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("octave count must not be negative"));
    assert!(!out.exists());
}

#[test]
fn rejects_an_unknown_algorithm() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("noise.png");
    Command::cargo_bin("noisegen")
        .unwrap()
        .args(&["--output", out.to_str().unwrap(), "--algorithm", "ridged"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Algorithm must be fbm or turbulence"));
    assert!(!out.exists());
}
