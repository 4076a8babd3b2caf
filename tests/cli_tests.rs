use httpmock::prelude::*;
use std::process::{Command, Output};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_lexlist-fetch");
// 沒有服務在監聽的位址，確保測試不會連到真正的網站
const UNREACHABLE_URL: &str = "http://127.0.0.1:9/lexlist_ch/result.jsp";

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch binary")
}

#[test]
fn test_invalid_start_exits_with_one() {
    let output = run(&["--start", "0", "--base-url", UNREACHABLE_URL]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid configuration"), "stderr: {}", stderr);
}

#[test]
fn test_dry_run_exits_with_zero() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("words_data");

    let output = run(&[
        "--dry-run",
        "--end",
        "3",
        "--output-dir",
        out.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0001..=0003"), "stdout: {}", stdout);
    // dry run 不建立輸出目錄
    assert!(!out.exists());
}

#[test]
fn test_unwritable_output_dir_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("words_data");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let output = run(&[
        "--base-url",
        UNREACHABLE_URL,
        "--end",
        "1",
        "--delay-ms",
        "0",
        "--output-dir",
        blocker.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not save results"), "stderr: {}", stderr);
}

#[test]
fn test_completed_run_exits_with_zero() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("words_data");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/result.jsp").query_param("id", "0001");
        then.status(200).body("<span>shuǐ</span>水\n");
    });
    server.mock(|when, then| {
        when.method(GET).path("/result.jsp").query_param("id", "0002");
        then.status(500);
    });

    let output = run(&[
        "--base-url",
        &server.url("/result.jsp"),
        "--end",
        "2",
        "--delay-ms",
        "0",
        "--output-dir",
        out.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let summary = std::fs::read_to_string(out.join("summary.json")).unwrap();
    assert!(summary.contains("\"success_rate\": \"50.00%\""));
}

#[cfg(unix)]
#[test]
fn test_interrupt_exits_with_one() {
    use std::process::Stdio;
    use std::time::Duration;

    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("words_data");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/result.jsp");
        then.status(200)
            .body("<span>a</span>慢\n")
            .delay(Duration::from_secs(10));
    });

    let child = Command::new(BIN)
        .args([
            "--base-url",
            &server.url("/result.jsp"),
            "--end",
            "5",
            "--timeout-secs",
            "30",
            "--output-dir",
            out.to_str().unwrap(),
        ])
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to launch binary");

    // 等第一個請求送出後再送 SIGINT
    std::thread::sleep(Duration::from_secs(1));
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("failed to send SIGINT");
    assert!(status.success());

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fetching interrupted by user."), "stdout: {}", stdout);
    // 沒有 checkpoint 時中斷不會寫出任何結果
    assert!(!out.join("all_words.json").exists());
}
