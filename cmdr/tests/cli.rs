/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! End to end runs of the exercise binaries, feeding `stdin` and checking `stdout`.
//!
//! If tests in this module fail, make sure the binaries have been built, by running
//! `cargo build && cargo test` rather than just `cargo test`.

use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn run(bin: &str, args: &[&str], stdin: &str) -> String {
    let output = Command::cargo_bin(bin)
        .unwrap()
        .args(args)
        .write_stdin(stdin)
        .ok()
        .unwrap();
    String::from_utf8(output.stdout).unwrap()
}

const PATTERNS_PROMPTS: &str = concat!(
    "\n\n=======================================\n",
    "   Bem vindo à ferramenta mais inútil\n",
    "   e elegante de toda a matéria...",
    "\n=======================================\n",
    "Escolha a opção:\n\n(1) Triângulo\n(2) Losango\n\n",
    "Insira a quantidade de linhas: ",
);

#[test]
fn patterns_triangle() {
    let stdout = run("patterns", &[], "1\n4\n");
    assert_eq!(
        stdout,
        format!("{PATTERNS_PROMPTS}\n      %\n    %%%\n  %%%%%\n%%%%%%%\n")
    );
}

#[test]
fn patterns_diamond_with_filler() {
    let stdout = run("patterns", &["--filler", "#"], "2\n5\n");
    assert_eq!(
        stdout,
        format!(
            "{PATTERNS_PROMPTS}\n      #\n    #####\n  #########\n    #####\n      #\n"
        )
    );
}

#[test]
fn patterns_invalid_option() {
    let stdout = run("patterns", &[], "3\n5\n");
    assert_eq!(stdout, format!("{PATTERNS_PROMPTS}Opção inválida."));
}

#[test]
fn parity_counts_and_averages() {
    let stdout = run("parity", &[], "2 3 4 5 6 7 8 9 10 1\n");
    assert!(stdout.starts_with("Insira o número: "));
    assert!(stdout.ends_with("5 valoeres pares.A média dos ímpares é 2.50"));
}

#[test]
fn stream_stops_at_sentinel() {
    let stdout = run("stream", &[], "4\n3\n0\n12\n");
    assert_eq!(stdout, "16\n1.73\n");
}

#[test]
fn stream_stops_at_end_of_input() {
    let stdout = run("stream", &[], "8");
    assert_eq!(stdout, "64\n");
}

#[test]
fn mode_is_silent_without_report() {
    let stdout = run("mode", &[], "4 5 7 7 3");
    assert_eq!(
        stdout,
        format!(
            "Insira a quantidade de repetições:{}",
            "Insira o número: ".repeat(4)
        )
    );
}

#[test]
fn mode_report() {
    let stdout = run("mode", &["--report"], "4 5 7 7 3");
    assert!(stdout.ends_with("\nmaior número: 7, ocorrências: 2\n"));
}

#[test]
fn enable_logging_writes_log_file_only() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::cargo_bin("stream")
        .unwrap()
        .current_dir(dir.path())
        .arg("--enable-logging")
        .write_stdin("4\n3\n0\n")
        .ok()
        .unwrap();

    assert_eq!(String::from_utf8(output.stdout).unwrap(), "16\n1.73\n");
    assert!(output.stderr.is_empty());

    let log = std::fs::read_to_string(dir.path().join("log.txt")).unwrap();
    assert!(log.contains("Start logging..."));
    assert!(log.contains("Sentinel"));
}

#[test]
fn no_log_file_without_flag() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("stream")
        .unwrap()
        .current_dir(dir.path())
        .write_stdin("0\n")
        .assert()
        .success();

    assert!(!dir.path().join("log.txt").exists());
}

#[test]
fn unknown_flag_fails() {
    Command::cargo_bin("stream")
        .unwrap()
        .arg("--nope")
        .assert()
        .failure();
}
