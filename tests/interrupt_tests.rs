//! Ctrl-C against the real binary.

#![cfg(unix)]

use std::io::Read;
use std::process::{Child, ChildStdout, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Spawn the binary with piped stdio and no styling.
fn spawn_tasklist() -> Child {
    Command::new(env!("CARGO_BIN_EXE_tasklist"))
        .args(["--no-color", "--no-clear"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn tasklist")
}

/// Read stdout until `needle` shows up, returning everything read so far.
fn read_until(stdout: &mut ChildStdout, needle: &str) -> String {
    let mut seen = Vec::new();
    let mut buf = [0u8; 1024];
    while !String::from_utf8_lossy(&seen).contains(needle) {
        let n = stdout.read(&mut buf).expect("Failed to read stdout");
        assert!(n > 0, "stdout closed before {needle:?} appeared");
        seen.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&seen).into_owned()
}

fn send_sigint(child: &Child) {
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("Failed to run kill");
    assert!(status.success());
}

#[test]
fn sigint_at_menu_prompt_exits_cleanly() {
    let mut child = spawn_tasklist();
    let mut stdout = child.stdout.take().unwrap();
    // Keep stdin open so the session can only end through the signal.
    let _stdin = child.stdin.take().unwrap();

    read_until(&mut stdout, "Enter your choice");
    send_sigint(&child);

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().expect("Failed to poll child") {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("tasklist did not exit after SIGINT");
        }
        thread::sleep(Duration::from_millis(20));
    };

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).expect("Failed to read stdout");

    assert!(status.success(), "exit status: {status:?}");
    assert!(rest.contains("Program terminated by user"), "output: {rest}");
}
