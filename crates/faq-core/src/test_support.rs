//! Test Support
//!
//! Local one-shot HTTP server for exercising the reqwest clients.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use reqwest::Url;

/// Server that answers exactly one request with a canned response
pub struct OneShotServer {
    pub url: Url,
    request: JoinHandle<String>,
}

impl OneShotServer {
    /// `status` is the full status line tail, e.g. `"500 Internal Server Error"`
    pub fn respond(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let request = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let head = read_request(&mut stream);
            stream.write_all(response.as_bytes()).unwrap();
            head
        });

        Self {
            url: Url::parse(&format!("http://{}", addr)).unwrap(),
            request,
        }
    }

    /// Request line of the call the server received, e.g. `"DELETE /api/faqs/7 HTTP/1.1"`
    pub fn request_line(self) -> String {
        let head = self.request.join().unwrap();
        head.lines().next().unwrap_or_default().to_string()
    }
}

/// Address nothing listens on
pub fn refused_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}", addr)).unwrap()
}

/// Reads headers and body; returns the header block
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            return String::from_utf8_lossy(&buf).into_owned();
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).into_owned();
            let body_len = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                return head;
            }
        }
    }
}
