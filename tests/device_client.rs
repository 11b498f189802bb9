use station_manager::core::ListEndpoints;
use station_manager::operations::{ClientError, DeviceClient, NetMessage};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot};

// Integration tests for DeviceClient against a hand-rolled mock device

fn stations_endpoints() -> ListEndpoints {
    ListEndpoints {
        load_path: "/get_webradio.cgi".to_string(),
        save_path: "/post_webradio.cgi".to_string(),
    }
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Read one HTTP request off the stream, returning head and body
async fn read_request(stream: &mut TcpStream) -> (String, String) {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut buf).await.expect("read failed");
        assert!(n > 0, "connection closed before headers finished");
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = find_subsequence(&data, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&data[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let line = line.to_ascii_lowercase();
            line.strip_prefix("content-length:")
                .map(|value| value.trim().parse::<usize>().expect("bad content-length"))
        })
        .unwrap_or(0);

    while data.len() < header_end + content_length {
        let n = stream.read(&mut buf).await.expect("read failed");
        assert!(n > 0, "connection closed before body finished");
        data.extend_from_slice(&buf[..n]);
    }

    let body =
        String::from_utf8_lossy(&data[header_end..header_end + content_length]).to_string();
    (head, body)
}

/// Serve exactly one request with a canned response; the request's
/// head and body land on `request_tx`
async fn serve_once(
    listener: TcpListener,
    status_line: &'static str,
    response_body: &'static str,
    request_tx: oneshot::Sender<(String, String)>,
) {
    let (mut stream, _) = listener.accept().await.expect("accept failed");
    let request = read_request(&mut stream).await;
    let _ = request_tx.send(request);

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        response_body.len(),
        response_body
    );
    stream
        .write_all(response.as_bytes())
        .await
        .expect("write failed");
}

async fn mock_device(
    status_line: &'static str,
    response_body: &'static str,
) -> (String, oneshot::Receiver<(String, String)>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock device");
    let addr = listener.local_addr().expect("no local addr");
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(serve_once(listener, status_line, response_body, request_tx));

    (format!("http://{addr}"), request_rx)
}

#[tokio::test]
async fn test_load_fetches_the_crlf_list() {
    let (base_url, request_rx) = mock_device("200 OK", "http://a/x\r\nhttp://b/y").await;

    let client = DeviceClient::new(&base_url, stations_endpoints()).unwrap();
    let body = client.load().await.expect("load failed");
    assert_eq!(body, "http://a/x\r\nhttp://b/y");

    let (head, _) = request_rx.await.expect("no request seen");
    assert!(head.starts_with("GET /get_webradio.cgi HTTP/1.1"));
}

#[tokio::test]
async fn test_save_posts_the_exact_payload() {
    let (base_url, request_rx) = mock_device("200 OK", "Ok").await;

    let client = DeviceClient::new(&base_url, stations_endpoints()).unwrap();
    let status = client
        .save("http://a/x\r\nhttp://b/y".to_string())
        .await
        .expect("save failed");
    assert_eq!(status, "Ok");

    let (head, body) = request_rx.await.expect("no request seen");
    assert!(head.starts_with("POST /post_webradio.cgi HTTP/1.1"));
    assert!(head.to_ascii_lowercase().contains("content-type: text/plain"));
    assert_eq!(body, "http://a/x\r\nhttp://b/y");
}

#[tokio::test]
async fn test_load_error_status_is_reported() {
    let (base_url, _request_rx) = mock_device("500 Internal Server Error", "flash write failed").await;

    let client = DeviceClient::new(&base_url, stations_endpoints()).unwrap();
    let result = client.load().await;
    match result {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "flash write failed");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_spawned_save_posts_completion_message() {
    let (base_url, _request_rx) = mock_device("200 OK", "Ok").await;

    let client = DeviceClient::new(&base_url, stations_endpoints()).unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    client.spawn_save("http://a/x".to_string(), tx);

    match rx.recv().await {
        Some(NetMessage::Saved(text)) => assert_eq!(text, "Ok"),
        other => panic!("expected save completion, got {other:?}"),
    }
}
