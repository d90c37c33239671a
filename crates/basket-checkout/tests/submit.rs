//! End-to-end submission tests against a fake transport and a local HTTP
//! listener.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use basket_cache::MemoryBackend;
use basket_cart::prelude::*;
use basket_checkout::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Transport that records what it was asked to send and replies from a script.
struct RecordingTransport {
    sent: Mutex<Vec<OrderRequest>>,
    reply: Box<dyn Fn() -> Result<OrderAck, TransportError> + Send + Sync>,
}

impl RecordingTransport {
    fn replying(reply: impl Fn() -> Result<OrderAck, TransportError> + Send + Sync + 'static) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reply: Box::new(reply),
        }
    }

    fn accepting() -> Self {
        Self::replying(|| {
            Ok(OrderAck {
                ok: true,
                message: Some("Order received!".to_string()),
            })
        })
    }

    fn sent(&self) -> Vec<OrderRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderTransport for RecordingTransport {
    async fn send(&self, order: &OrderRequest) -> Result<OrderAck, TransportError> {
        self.sent.lock().unwrap().push(order.clone());
        (self.reply)()
    }
}

fn filled_store() -> CartStore<MemoryBackend> {
    let store = CartStore::new(MemoryBackend::new());
    let widget = NewItem::new("a", "Widget", 9.99).unwrap();
    store.add(widget.clone()).unwrap();
    store.add(widget).unwrap();
    store
}

fn ana() -> Customer {
    Customer::new("Ana", "ana@example.com", Some("555-0100"))
}

#[tokio::test]
async fn test_success_clears_cart() {
    let store = filled_store();
    let submitter = OrderSubmitter::new(RecordingTransport::accepting());

    let done = submitter.submit(&store, ana()).await.unwrap();

    assert!(done.cart_cleared);
    assert_eq!(done.server_message.as_deref(), Some("Order received!"));
    assert_eq!(done.user_message(), SUCCESS_MESSAGE);
    assert!(store.load().is_empty());
    assert_eq!(store.total(), 0.0);

    let sent = submitter.transport().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].total, 19.98);
    assert_eq!(sent[0].items.get("a").unwrap().qty, 2);
    assert_eq!(sent[0].customer.phone, "555-0100");
}

#[tokio::test]
async fn test_empty_name_sends_nothing() {
    let store = filled_store();
    let before = store.load();
    let submitter = OrderSubmitter::new(RecordingTransport::accepting());

    let err = submitter
        .submit(&store, Customer::new("  ", "ana@example.com", None))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Validation { ref missing } if missing == &vec!["name"]));
    assert_eq!(err.user_message(), VALIDATION_MESSAGE);
    assert!(submitter.transport().sent().is_empty());
    assert_eq!(store.load(), before);
}

#[tokio::test]
async fn test_empty_cart_sends_nothing() {
    let store = CartStore::new(MemoryBackend::new());
    let submitter = OrderSubmitter::new(RecordingTransport::accepting());

    let err = submitter.submit(&store, ana()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Validation { ref missing } if missing == &vec!["items"]));
    assert!(submitter.transport().sent().is_empty());
}

#[tokio::test]
async fn test_overflowing_total_sends_nothing() {
    let store = CartStore::new(MemoryBackend::new());
    let huge = NewItem::new("big", "Huge", 1e308).unwrap();
    store.add(huge.clone()).unwrap();
    store.add(huge).unwrap();
    let before = store.load();
    assert!(store.total().is_infinite());

    let submitter = OrderSubmitter::new(RecordingTransport::accepting());
    let err = submitter.submit(&store, ana()).await.unwrap_err();

    assert!(matches!(err, SubmitError::InvalidTotal { total } if total.is_infinite()));
    assert_eq!(err.user_message(), TOTAL_MESSAGE);
    assert!(submitter.transport().sent().is_empty());
    assert_eq!(store.load(), before);
}

#[tokio::test]
async fn test_rejection_keeps_cart() {
    let store = filled_store();
    let before = store.load();
    let submitter = OrderSubmitter::new(RecordingTransport::replying(|| {
        Ok(OrderAck {
            ok: false,
            message: Some("Incomplete data.".to_string()),
        })
    }));

    let err = submitter.submit(&store, ana()).await.unwrap_err();

    assert_eq!(err.user_message(), "Incomplete data.");
    assert_eq!(store.load(), before);
}

#[tokio::test]
async fn test_transport_failure_keeps_cart() {
    let store = filled_store();
    let before = store.load();
    let submitter = OrderSubmitter::new(RecordingTransport::replying(|| {
        Err(TransportError::Connection("refused".to_string()))
    }));

    let err = submitter.submit(&store, ana()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)));
    assert_eq!(err.user_message(), CONNECTION_MESSAGE);
    assert_eq!(store.load(), before);

    // Retrying after a failure sends the same cart again.
    assert_eq!(submitter.transport().sent().len(), 1);
    let _ = submitter.submit(&store, ana()).await;
    assert_eq!(submitter.transport().sent().len(), 2);
}

/// Serve one HTTP request with `status` and `body`, handing back the raw
/// request body the client sent.
async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    (format!("http://{addr}/checkout"), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return String::from_utf8_lossy(&buf[header_end + 4..]).into_owned();
            }
        }
    }
    String::new()
}

#[tokio::test]
async fn test_http_transport_posts_json() {
    let (endpoint, server) = serve_once("200 OK", r#"{"ok": true, "message": "Order received!"}"#).await;
    let store = filled_store();
    let transport = HttpTransport::new(&SubmitConfig::new(endpoint)).unwrap();
    let submitter = OrderSubmitter::new(transport);

    let done = submitter.submit(&store, ana()).await.unwrap();
    assert_eq!(done.server_message.as_deref(), Some("Order received!"));
    assert!(store.load().is_empty());

    let body: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
    assert_eq!(body["customer"]["name"], "Ana");
    assert_eq!(body["items"][0]["id"], "a");
    assert_eq!(body["items"][0]["qty"], 2);
    assert_eq!(body["total"], 19.98);
}

#[tokio::test]
async fn test_http_transport_reads_body_of_client_error() {
    let (endpoint, server) =
        serve_once("400 Bad Request", r#"{"ok": false, "message": "Incomplete data."}"#).await;
    let store = filled_store();
    let submitter = OrderSubmitter::new(HttpTransport::new(&SubmitConfig::new(endpoint)).unwrap());

    let err = submitter.submit(&store, ana()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Rejected { .. }));
    assert_eq!(err.user_message(), "Incomplete data.");
    assert_eq!(store.load().len(), 1);
    server.await.unwrap();
}

#[tokio::test]
async fn test_http_transport_unreadable_reply() {
    let (endpoint, server) = serve_once("500 Internal Server Error", "<html>oops</html>").await;
    let transport = HttpTransport::new(&SubmitConfig::new(endpoint)).unwrap();

    let order = OrderRequest::new(ana(), filled_store().load());
    let err = transport.send(&order).await.unwrap_err();
    assert!(matches!(err, TransportError::InvalidResponse { status: 500, .. }));
    server.await.unwrap();
}

#[tokio::test]
async fn test_http_transport_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = filled_store();
    let transport = HttpTransport::new(&SubmitConfig::new(format!("http://{addr}/checkout"))).unwrap();
    let submitter = OrderSubmitter::new(transport);

    let err = submitter.submit(&store, ana()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
    assert_eq!(store.load().len(), 1);
}

#[tokio::test]
async fn test_http_transport_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let held = Arc::new(Mutex::new(Vec::new()));
    let held_by_server = Arc::clone(&held);
    let server = tokio::spawn(async move {
        // Accept and keep the socket open without ever replying.
        let (socket, _) = listener.accept().await.unwrap();
        held_by_server.lock().unwrap().push(socket);
    });

    let config = SubmitConfig::new(format!("http://{addr}/checkout"))
        .with_timeout(Some(Duration::from_millis(200)));
    let transport = HttpTransport::new(&config).unwrap();

    let order = OrderRequest::new(ana(), filled_store().load());
    let err = transport.send(&order).await.unwrap_err();
    assert!(matches!(err, TransportError::Timeout(_)), "{err:?}");
    server.await.unwrap();
}
