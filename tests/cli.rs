use std::path::PathBuf;
use std::process::{Command, Output};

fn lossmap(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lossmap"))
        .args(args)
        .output()
        .unwrap()
}

/// Write `content` to a log file private to this test.
fn drop_log(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "lossmap-{}-{}.txt",
        std::process::id(),
        name
    ));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn report() {
    let path = drop_log("report", "1 0 1 2 5 3\n1 0 1 2 6 3\n1 0 1 2 20 1\n");
    let out = lossmap(&["-w", "4", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Total records: 3\n"), "{stdout}");
    assert!(stdout.contains("  Window 1: start=4, length=4, bitmap=0011\n"));
    assert!(stdout.contains("  Window 2: start=19, length=4, bitmap=0111\n"));
}

#[test]
fn no_records() {
    let path = drop_log("empty", "not a drop line\n\n");
    let name = path.to_str().unwrap().to_owned();
    let out = lossmap(&[&name]);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        format!("No valid records in {}\n", name)
    );
}

#[test]
fn usage() {
    assert_eq!(lossmap(&[]).status.code(), Some(1));
    assert_eq!(lossmap(&["a", "b"]).status.code(), Some(1));
    assert_eq!(lossmap(&["--bogus", "a"]).status.code(), Some(1));
    assert_eq!(lossmap(&["-w", "x", "a"]).status.code(), Some(1));
}

#[test]
fn help() {
    let out = lossmap(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8(out.stdout).unwrap().contains("--width"));
}

#[test]
fn missing_file() {
    let out = lossmap(&["/nonexistent/switch_drop_output.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stderr)
        .unwrap()
        .contains("/nonexistent/switch_drop_output.txt"));
}

#[test]
fn invalid_width() {
    let path = drop_log("width", "1 0 1 2 5 3\n");
    let name = path.to_str().unwrap().to_owned();
    let zero = lossmap(&["-w", "0", &name]);
    let wide = lossmap(&["--width", "257", &name]);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(zero.status.code(), Some(1));
    assert!(String::from_utf8(zero.stderr)
        .unwrap()
        .contains("Bitmap width 0 outside 1..=256"));
    assert_eq!(wide.status.code(), Some(1));
}
