// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::host::iterm::proto::{
    KeystrokeNotification, ListSessionsRequest, ListSessionsResponse, StatusResponse,
};
use prost::Message as _;
use tokio::net::UnixListener;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};

fn options() -> ConnectOptions {
    ConnectOptions {
        cookie: "cookie-123".into(),
        key: Some("key-456".into()),
        connect_timeout: Duration::from_secs(2),
        rpc_timeout: Duration::from_millis(200),
    }
}

fn keystroke(session: &str, chars: &str) -> ServerOriginatedMessage {
    ServerOriginatedMessage {
        id: None,
        error: None,
        submessage: Some(server_originated_message::Submessage::Notification(
            Notification {
                keystroke_notification: Some(KeystrokeNotification {
                    characters: Some(chars.into()),
                    session: Some(session.into()),
                }),
                ..Notification::default()
            },
        )),
    }
}

fn keystrokes_for(session: &'static str) -> EventFilter {
    Box::new(move |n: &Notification| {
        let k = n.keystroke_notification.as_ref()?;
        (k.session.as_deref() == Some(session)).then(|| HostEvent::Keystroke {
            characters: k.characters.clone().unwrap_or_default(),
        })
    })
}

// -- handshake ---------------------------------------------------------------

#[test]
fn request_carries_auth_headers() {
    let request = build_request(&options()).unwrap();
    let headers = request.headers();
    assert_eq!(headers["origin"], "ws://localhost/");
    assert_eq!(headers["sec-websocket-protocol"], "api.iterm2.com");
    assert_eq!(headers["x-iterm2-cookie"], "cookie-123");
    assert_eq!(headers["x-iterm2-key"], "key-456");
    assert_eq!(headers["x-iterm2-advisory-name"], "it2");
}

#[test]
fn request_without_key_omits_header() {
    let mut opts = options();
    opts.key = None;
    let request = build_request(&opts).unwrap();
    assert!(request.headers().get("x-iterm2-key").is_none());
}

#[test]
fn cookie_with_newline_is_rejected() {
    let mut opts = options();
    opts.cookie = "bad\ncookie".into();
    assert!(matches!(build_request(&opts), Err(HostError::Handshake(_))));
}

// -- routing -----------------------------------------------------------------

#[tokio::test]
async fn router_delivers_reply_to_matching_waiter() {
    let mut router = Router::default();
    let (tx, rx) = oneshot::channel();
    router.pending.insert(7, tx);

    router.dispatch(ServerOriginatedMessage {
        id: Some(7),
        error: None,
        submessage: Some(server_originated_message::Submessage::SendTextResponse(
            StatusResponse { status: Some(0) },
        )),
    });

    assert_eq!(rx.await.unwrap().id, Some(7));
    assert!(router.pending.is_empty());
}

#[tokio::test]
async fn router_fans_out_and_prunes_dropped_subscribers() {
    let mut router = Router::default();
    let (tx_a, mut rx_a) = mpsc::unbounded_channel();
    let (tx_b, rx_b) = mpsc::unbounded_channel();
    router.subscribers.push(Subscriber {
        filter: keystrokes_for("s1"),
        tx: tx_a,
    });
    router.subscribers.push(Subscriber {
        filter: keystrokes_for("s1"),
        tx: tx_b,
    });
    drop(rx_b);

    router.dispatch(keystroke("s1", "a"));
    router.dispatch(keystroke("s2", "b"));

    assert_eq!(
        rx_a.recv().await,
        Some(HostEvent::Keystroke {
            characters: "a".into()
        })
    );
    assert!(rx_a.try_recv().is_err());
    assert_eq!(router.subscribers.len(), 1);
}

#[tokio::test]
async fn router_close_fails_waiters() {
    let mut router = Router::default();
    let (tx, rx) = oneshot::channel();
    router.pending.insert(1, tx);
    router.close();
    assert!(rx.await.is_err());
    assert!(router.closed);
}

// -- end to end over a socket ------------------------------------------------

/// Serve one connection: answer the first request with an empty session
/// list, push a keystroke, then hang up.
async fn serve_once(listener: UnixListener) {
    let (stream, _) = listener.accept().await.unwrap();
    let answer = |req: &Request, mut resp: Response| -> Result<Response, ErrorResponse> {
        assert_eq!(req.headers()["x-iterm2-cookie"], "cookie-123");
        resp.headers_mut()
            .insert("sec-websocket-protocol", HeaderValue::from_static(SUBPROTOCOL));
        Ok(resp)
    };
    let mut ws = tokio_tungstenite::accept_hdr_async(stream, answer)
        .await
        .unwrap();

    let Some(Ok(Message::Binary(data))) = ws.next().await else {
        panic!("expected a binary request");
    };
    let request = ClientOriginatedMessage::decode(data).unwrap();
    assert!(matches!(
        request.submessage,
        Some(client_originated_message::Submessage::ListSessionsRequest(_))
    ));

    let reply = ServerOriginatedMessage {
        id: request.id,
        error: None,
        submessage: Some(server_originated_message::Submessage::ListSessionsResponse(
            ListSessionsResponse::default(),
        )),
    };
    ws.send(Message::Binary(reply.encode_to_vec().into()))
        .await
        .unwrap();
    ws.send(Message::Binary(keystroke("s1", "q").encode_to_vec().into()))
        .await
        .unwrap();
    ws.close(None).await.unwrap();
}

#[tokio::test]
async fn call_and_notification_over_unix_socket() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("socket");
    let listener = UnixListener::bind(&path).unwrap();
    let server = tokio::spawn(serve_once(listener));

    let conn = Connection::open(&path, &options()).await.unwrap();
    let mut events = conn.add_subscriber(keystrokes_for("s1")).unwrap();

    let reply = conn
        .call(
            "list_sessions",
            client_originated_message::Submessage::ListSessionsRequest(ListSessionsRequest {}),
        )
        .await
        .unwrap();
    assert!(matches!(
        reply,
        server_originated_message::Submessage::ListSessionsResponse(_)
    ));

    assert_eq!(
        events.recv().await,
        Some(HostEvent::Keystroke {
            characters: "q".into()
        })
    );
    // Server hung up: the stream ends and later calls fail.
    assert_eq!(events.recv().await, None);
    server.await.unwrap();
    let err = conn
        .call(
            "list_sessions",
            client_originated_message::Submessage::ListSessionsRequest(ListSessionsRequest {}),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HostError::Closed));
}

#[tokio::test]
async fn missing_socket_is_not_connected() {
    let dir = tempfile::tempdir().unwrap();
    let err = Connection::open(&dir.path().join("absent"), &options())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, HostError::NotConnected(_)));
}

#[tokio::test]
async fn silent_server_fails_handshake() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("socket");
    let listener = UnixListener::bind(&path).unwrap();
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        std::future::pending::<()>().await;
        drop(stream);
    });

    let mut opts = options();
    opts.connect_timeout = Duration::from_millis(100);
    let err = Connection::open(&path, &opts).await.err().unwrap();
    assert!(matches!(err, HostError::Handshake(_)), "{err:?}");
    assert!(err.to_string().contains("within 100ms"), "{err}");
    server.abort();
}
