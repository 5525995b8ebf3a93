// tests/http_transport.rs
//
// HttpTransport against a one-shot local listener: wire shape of the POST and
// handling of a non-2xx JSON reply.
//
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;

use mention_check::check::{CheckInput, Outcome};
use mention_check::core::net::{HttpTransport, Transport};

/// Reads one request (headers + content-length body) and returns it as text.
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "client closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let len: usize = head
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .map(|v| v.trim().parse().unwrap())
        .unwrap_or(0);

    while buf.len() < header_end + len {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8(buf).unwrap()
}

/// Serves a single canned reply; the captured request comes back on the channel.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let reply = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(reply.as_bytes()).unwrap();
        stream.flush().unwrap();
        let _ = tx.send(request);
    });

    (format!("http://{addr}/api/check"), rx)
}

fn input() -> CheckInput {
    CheckInput { prompt: "p".into(), brand: "b".into() }
}

#[test]
fn posts_json_and_keeps_error_status_body() {
    let (endpoint, rx) = serve_once(
        "429 Too Many Requests",
        r#"{"error":"quota","message":"slow down"}"#,
    );

    let transport = HttpTransport::new().unwrap();
    let outcome = transport.send(&endpoint, &input());

    let request = rx.recv().unwrap();
    assert!(request.starts_with("POST /api/check HTTP/1.1\r\n"), "{request}");
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"), "{request}");
    let body = request.split("\r\n\r\n").nth(1).unwrap();
    assert_eq!(body, r#"{"prompt":"p","brand":"b"}"#);

    match outcome {
        Outcome::Completed { status, reason, body } => {
            assert_eq!(status, 429);
            assert_eq!(reason, "Too Many Requests");
            assert_eq!(body.error().as_deref(), Some("quota"));
            assert_eq!(body.message().as_deref(), Some("slow down"));
        }
        other => panic!("expected a completed response, got {other:?}"),
    }
}

#[test]
fn refused_connection_is_a_failed_outcome() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let transport = HttpTransport::new().unwrap();
    let outcome = transport.send(&format!("http://127.0.0.1:{port}/api/check"), &input());

    match outcome {
        Outcome::Failed { message } => assert!(!message.is_empty()),
        other => panic!("expected a failed outcome, got {other:?}"),
    }
}
