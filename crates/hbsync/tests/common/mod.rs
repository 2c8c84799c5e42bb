//! Shared helpers for CLI integration tests.
//!
//! Every invocation runs with its own HOME, working directory and storage file
//! so tests never touch the user's real state.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread;

pub struct Sandbox {
    dir: tempfile::TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn store_file(&self) -> PathBuf {
        self.dir.path().join("store").join("storage.json")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_hbsync"))
            .current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("HBSYNC_STORE_FILE", self.store_file())
            .env_remove("RUST_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("HTTPS_PROXY")
            .env_remove("https_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy")
            .args(args)
            .output()
            .expect("Failed to execute hbsync")
    }

    /// Run and assert success, returning stdout.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "hbsync {:?} failed with exit code {:?}. stderr: {}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

/// Minimal HTTP server answering GETs from a fixed route table.
///
/// Unknown paths get a 404. Each connection serves one request and closes.
pub fn serve(routes: Vec<(String, u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Failed to read stub address");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let routes = routes.clone();
            thread::spawn(move || {
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    return;
                }
                loop {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) => break,
                        Ok(_) if line == "\r\n" || line == "\n" => break,
                        Ok(_) => continue,
                        Err(_) => return,
                    }
                }

                let path = request_line.split_whitespace().nth(1).unwrap_or("/");
                let (status, body) = routes
                    .iter()
                    .find(|(route, _, _)| route == path)
                    .map(|(_, status, body)| (*status, body.clone()))
                    .unwrap_or((404, "not found".to_string()));

                let response = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            });
        }
    });

    format!("http://{}", addr)
}

pub fn target_path(process_id: &str) -> String {
    format!("/{}~process@1.0/slot/current", process_id)
}

pub fn current_path(process_id: &str) -> String {
    format!("/{}~process@1.0/compute/at-slot", process_id)
}
