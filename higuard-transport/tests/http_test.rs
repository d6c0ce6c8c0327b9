//! Live classification tests against a one-shot loopback HTTP server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use higuard_transport::{Credentials, Dispatch, ErrorRequest, HttpTransport, Transport};

/// Accept one connection, capture the raw request, answer with `status_line`.
fn one_shot_server(status_line: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];

        // Read headers, then the Content-Length body.
        let header_end = loop {
            let n = stream.read(&mut buf).unwrap();
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let headers = String::from_utf8_lossy(&raw[..header_end]).to_lowercase();
        let content_length: usize = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .map(|v| v.trim().parse().unwrap())
            .unwrap_or(0);
        while raw.len() < header_end + content_length {
            let n = stream.read(&mut buf).unwrap();
            raw.extend_from_slice(&buf[..n]);
        }

        let response =
            format!("HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&raw).into_owned()
    });

    (base_url, handle)
}

fn request() -> ErrorRequest {
    ErrorRequest {
        message: "Foo".to_string(),
        ..ErrorRequest::default()
    }
}

#[test]
fn success_status_classifies_as_success() {
    let (base_url, server) = one_shot_server("200 OK");
    let transport =
        HttpTransport::new(base_url, Credentials::new("abc", "s3cret")).unwrap();

    let dispatch = transport.post_error(&request());
    assert_eq!(dispatch, Dispatch::success());

    let raw = server.join().unwrap();
    assert!(raw.starts_with("POST /errors?client_id=abc HTTP/1.1"));
    let lower = raw.to_lowercase();
    assert!(lower.contains("authorization: s3cret"));
    assert!(lower.contains("content-type: application/json"));
    assert!(raw.contains(r#""message":"Foo""#));
}

#[test]
fn server_error_classifies_as_error_without_panicking() {
    let (base_url, server) = one_shot_server("500 Internal Server Error");
    let transport =
        HttpTransport::new(base_url, Credentials::new("abc", "s3cret")).unwrap();

    let dispatch = transport.post_error(&request());
    assert_eq!(dispatch, Dispatch::error());
    server.join().unwrap();
}

#[test]
fn network_failure_classifies_as_error_not_a_fault() {
    // Bind and immediately drop a listener so the port refuses connections.
    let base_url = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let transport =
        HttpTransport::new(base_url, Credentials::new("abc", "s3cret")).unwrap();

    let dispatch = transport.post_error(&request());
    assert_eq!(dispatch, Dispatch::error());
}

#[test]
fn empty_base_url_is_rejected_at_construction() {
    let err = HttpTransport::new("  ", Credentials::new("abc", "s3cret")).unwrap_err();
    assert!(err.to_string().contains("base URL"));
}

#[test]
fn trailing_slash_in_base_url_is_normalized() {
    let transport =
        HttpTransport::new("http://localhost:9/", Credentials::new("a", "b")).unwrap();
    assert_eq!(transport.errors_url(), "http://localhost:9/errors");
}
