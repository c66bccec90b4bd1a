use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const PHONES: &str = "name,brand,price,rating
iphone 15 pro,apple,999,4.9
galaxy s23 ultra,samsung,1199,4.8
redmi note 12,xiaomi,199,4.6
poco x5 pro,xiaomi,299,4.4
";

fn csv_file(content: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{}", content).unwrap();
    tmp
}

fn sieve(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csv-sieve"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn test_aggregation_exits_zero() {
    let tmp = csv_file(PHONES);
    let path = tmp.path().to_str().unwrap();
    let out = sieve(&[path, "-f", "brand=eq=xiaomi", "-a", "price=avg"]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    assert!(stdout(&out).contains("249.00"));
}

#[test]
fn test_empty_file_exits_zero() {
    let tmp = csv_file("name,price\n");
    let out = sieve(&[tmp.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out).trim(), "CSV file is empty");
}

#[test]
fn test_no_matches_exits_zero() {
    let tmp = csv_file(PHONES);
    let out = sieve(&[tmp.path().to_str().unwrap(), "--filter", "brand=eq=nonexistent"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out).trim(), "No rows match the filter");
}

#[test]
fn test_errors_exit_one_with_message_on_stderr() {
    let tmp = csv_file(PHONES);
    let path = tmp.path().to_str().unwrap();

    let out = sieve(&[path, "--aggregate", "name=avg"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(
        stderr(&out).contains("Error: column 'name' has no numeric values to aggregate"),
        "{}",
        stderr(&out)
    );

    let out = sieve(&["nonexistent_file.csv"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Error: file nonexistent_file.csv not found"));
}
