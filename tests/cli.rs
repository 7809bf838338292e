//! CLI smoke tests (SPEC_FULL.md §8, scenarios 11/12): drive the two
//! `[[bin]]` filters as real subprocesses over stdin/stdout.

use std::io::Write;
use std::process::{Command, Stdio};

fn bin_path(name: &str) -> &'static str {
    match name {
        "msgpack2json" => env!("CARGO_BIN_EXE_msgpack2json"),
        "json2msgpack" => env!("CARGO_BIN_EXE_json2msgpack"),
        other => panic!("unknown binary {other}"),
    }
}

fn run_bin(name: &str, input: &[u8]) -> Vec<u8> {
    let mut child = Command::new(bin_path(name))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn CLI binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input)
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to wait on child");
    assert!(output.status.success());
    output.stdout
}

#[test]
fn scenario_11_msgpack2json_nil() {
    let stdout = run_bin("msgpack2json", &[0xC0]);
    assert_eq!(stdout, b"null\n");
}

#[test]
fn scenario_12_json2msgpack_object() {
    let stdout = run_bin("json2msgpack", br#"{"a":1,"b":[true,null]}"#);
    assert_eq!(
        stdout,
        vec![0x82, 0xA1, b'a', 0x01, 0xA1, b'b', 0x92, 0xC3, 0xC0]
    );
}

#[test]
fn msgpack2json_handles_garbage_input_without_error_exit() {
    let stdout = run_bin("msgpack2json", &[0xC1, 0xFF, 0xFF]);
    assert_eq!(stdout, b"null\n");
}

#[test]
fn json2msgpack_handles_garbage_input_without_error_exit() {
    let stdout = run_bin("json2msgpack", b"{not valid json");
    assert_eq!(stdout, vec![0xC0]);
}
