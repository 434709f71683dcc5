/// Process-level tests: run the built `zbench` binary and check its exit
/// status and stdout.
use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output};
use std::thread;

use zbench_codecs::default_registry;

/// Generate `len` deterministic bytes using a simple LCG.
fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (rng >> 56) as u8
        })
        .collect()
}

/// Serve `body` to exactly one request and return the URL to fetch it from.
fn serve_once(body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();
    });
    format!("http://{addr}/payload")
}

/// A URL on a port nothing listens on.
fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

fn zbench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zbench"))
        .args(args)
        .output()
        .expect("spawning zbench")
}

/// Table lines that carry a ratio cell, i.e. data rows.
fn report_rows(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|l| l.contains('│') && l.contains('%'))
        .collect()
}

#[test]
fn test_plain_run_exits_zero_with_one_row_per_codec() {
    let url = serve_once(pseudo_random_bytes(10_000, 0xFACE));
    let out = zbench(&["--plain", "--count", "5", "--url", &url]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(
        out.status.success(),
        "status={:?} stderr={}",
        out.status,
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(stdout.contains("Compress+Decompress"));

    let rows = report_rows(&stdout);
    let registry = default_registry();
    assert_eq!(rows.len(), registry.len(), "stdout:\n{stdout}");
    for (row, config) in rows.iter().zip(&registry) {
        assert!(
            row.contains(&format!("│ {} ", config.name())),
            "expected {config} in row {row}"
        );
    }
}

#[test]
fn test_fetch_failure_exits_nonzero_without_rows() {
    let out = zbench(&["--plain", "--count", "5", "--url", &unreachable_url()]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert!(!out.status.success());
    assert!(!stdout.contains("│ gzip"), "stdout:\n{stdout}");
    assert!(report_rows(&stdout).is_empty());
    assert!(stderr.contains("fetching payload"), "stderr:\n{stderr}");
}

#[test]
fn test_zero_count_is_rejected() {
    let out = zbench(&["--plain", "--count", "0", "--url", &unreachable_url()]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--count"));
}
