//! Test doubles for slot polling.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::errors::FetchError;
use super::source::SlotSource;

/// Canned [`SlotSource`]. Unknown URLs answer `Status { status: 404 }`.
#[derive(Default)]
pub(crate) struct FakeSource {
    responses: HashMap<String, Result<Value, FetchError>>,
    panic_on: HashSet<String>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl FakeSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, url: &str, response: Result<Value, FetchError>) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub(crate) fn panic_on(mut self, url: &str) -> Self {
        self.panic_on.insert(url.to_string());
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl SlotSource for FakeSource {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(url.to_string());

        if self.panic_on.contains(url) {
            panic!("fake source told to panic for {url}");
        }

        self.responses
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::Status { status: 404 }))
    }
}

/// Minimal HTTP/1.1 server answering fixed `(path, status, body)` routes.
pub(crate) struct StubServer {
    base_url: String,
}

impl StubServer {
    pub(crate) async fn start(routes: Vec<(&str, u16, &str)>) -> Self {
        let routes: HashMap<String, (u16, String)> = routes
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), (status, body.to_string())))
            .collect();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }

                    let request = String::from_utf8_lossy(&buf);
                    let path = request
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();

                    let (status, body) = routes
                        .get(&path)
                        .cloned()
                        .unwrap_or((404, "not found".to_string()));
                    let response = format!(
                        "HTTP/1.1 {status} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
