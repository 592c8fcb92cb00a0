// Stub HTTP backend for client and worker tests

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Answers one connection per canned `(status, body)` pair, in order, and
/// yields the request lines it saw. Returns the API base URL to point a client at.
pub async fn serve(responses: Vec<(&'static str, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let mut request_lines = Vec::new();

        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            request_lines.push(read_request_line(&mut socket).await);
            respond(&mut socket, status, body).await;
        }

        request_lines
    });

    (format!("http://{}/api", addr), handle)
}

/// Like `serve`, but requests whose line contains `stall_on` are held open and
/// never answered. The server keeps running until the test ends.
pub async fn serve_stalling(stall_on: &'static str, responses: Vec<(&'static str, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        let mut responses = responses.into_iter();

        loop {
            let (mut socket, _) = listener.accept().await.unwrap();
            let line = read_request_line(&mut socket).await;
            if line.contains(stall_on) {
                held.push(socket);
                continue;
            }
            match responses.next() {
                Some((status, body)) => respond(&mut socket, status, body).await,
                None => held.push(socket),
            }
        }
    });

    format!("http://{}/api", addr)
}

async fn read_request_line(socket: &mut TcpStream) -> String {
    let mut buf = vec![0u8; 8192];
    let mut read = 0;
    loop {
        let n = socket.read(&mut buf[read..]).await.unwrap();
        read += n;
        if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    let request = String::from_utf8_lossy(&buf[..read]).to_string();
    request.lines().next().unwrap_or_default().to_string()
}

async fn respond(socket: &mut TcpStream, status: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    let _ = socket.shutdown().await;
}
