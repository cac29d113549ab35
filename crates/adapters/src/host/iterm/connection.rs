// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! WebSocket transport to iTerm2's API socket.
//!
//! One writer task drains an outgoing queue into the socket; one reader task
//! decodes server messages and routes them: replies go to the request that
//! carries the same id, notifications fan out to every matching subscriber.

use super::proto::{
    client_originated_message, server_originated_message, ClientOriginatedMessage, Notification,
    ServerOriginatedMessage,
};
use crate::host::HostError;
use futures_util::{SinkExt, StreamExt};
use it2_core::HostEvent;
use parking_lot::Mutex;
use prost::Message as _;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UnixStream;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;

const ORIGIN: &str = "ws://localhost/";
const SUBPROTOCOL: &str = "api.iterm2.com";
const ADVISORY_NAME: &str = "it2";

/// Credentials and limits for one connection.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub cookie: String,
    pub key: Option<String>,
    pub connect_timeout: Duration,
    pub rpc_timeout: Duration,
}

/// Decides which notifications a subscriber receives and what they become.
pub type EventFilter = Box<dyn Fn(&Notification) -> Option<HostEvent> + Send + Sync>;

struct Subscriber {
    filter: EventFilter,
    tx: mpsc::UnboundedSender<HostEvent>,
}

#[derive(Default)]
struct Router {
    pending: HashMap<i64, oneshot::Sender<ServerOriginatedMessage>>,
    subscribers: Vec<Subscriber>,
    closed: bool,
}

impl Router {
    fn dispatch(&mut self, message: ServerOriginatedMessage) {
        if let Some(server_originated_message::Submessage::Notification(notification)) =
            &message.submessage
        {
            self.subscribers.retain(|sub| match (sub.filter)(notification) {
                Some(event) => sub.tx.send(event).is_ok(),
                None => !sub.tx.is_closed(),
            });
            return;
        }
        let Some(id) = message.id else {
            tracing::debug!("dropping server message without id");
            return;
        };
        match self.pending.remove(&id) {
            Some(waiter) => {
                let _ = waiter.send(message);
            }
            None => tracing::debug!(id, "no waiter for response"),
        }
    }

    /// Fail every waiter and end every stream.
    fn close(&mut self) {
        self.closed = true;
        self.pending.clear();
        self.subscribers.clear();
    }
}

/// An open, authenticated API connection.
pub struct Connection {
    outgoing: mpsc::UnboundedSender<Message>,
    router: Arc<Mutex<Router>>,
    next_id: AtomicI64,
    rpc_timeout: Duration,
    reader: JoinHandle<()>,
    writer: JoinHandle<()>,
}

impl Connection {
    /// Connect to the Unix socket at `path` and upgrade to the API protocol.
    pub async fn open(path: &Path, options: &ConnectOptions) -> Result<Self, HostError> {
        let handshake = async {
            let stream = UnixStream::connect(path).await.map_err(|e| {
                HostError::NotConnected(format!("cannot reach {}: {e}", path.display()))
            })?;
            let request = build_request(options)?;
            tokio_tungstenite::client_async(request, stream)
                .await
                .map_err(|e| HostError::Handshake(e.to_string()))
        };
        let (ws, _response) = tokio::time::timeout(options.connect_timeout, handshake)
            .await
            .map_err(|_| {
                HostError::Handshake(format!(
                    "no answer from {} within {}ms",
                    path.display(),
                    options.connect_timeout.as_millis()
                ))
            })??;
        tracing::debug!(path = %path.display(), "connected");

        let (mut sink, mut stream) = ws.split();
        let (outgoing, mut queue) = mpsc::unbounded_channel::<Message>();
        let router = Arc::new(Mutex::new(Router::default()));

        let writer = tokio::spawn(async move {
            while let Some(message) = queue.recv().await {
                if let Err(e) = sink.send(message).await {
                    tracing::warn!(error = %e, "write failed");
                    break;
                }
            }
            let _ = sink.close().await;
        });

        let reader_router = Arc::clone(&router);
        let reader = tokio::spawn(async move {
            while let Some(frame) = stream.next().await {
                match frame {
                    Ok(Message::Binary(data)) => match ServerOriginatedMessage::decode(data) {
                        Ok(message) => reader_router.lock().dispatch(message),
                        Err(e) => tracing::warn!(error = %e, "undecodable server message"),
                    },
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, "read failed");
                        break;
                    }
                }
            }
            tracing::debug!("connection closed");
            reader_router.lock().close();
        });

        Ok(Self {
            outgoing,
            router,
            next_id: AtomicI64::new(0),
            rpc_timeout: options.rpc_timeout,
            reader,
            writer,
        })
    }

    /// Send one request and wait for the reply with the same id.
    pub async fn call(
        &self,
        op: &'static str,
        submessage: client_originated_message::Submessage,
    ) -> Result<server_originated_message::Submessage, HostError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = oneshot::channel();
        {
            let mut router = self.router.lock();
            if router.closed {
                return Err(HostError::Closed);
            }
            router.pending.insert(id, tx);
        }

        let request = ClientOriginatedMessage {
            id: Some(id),
            submessage: Some(submessage),
        };
        tracing::trace!(op, id, "request");
        self.outgoing
            .send(Message::Binary(request.encode_to_vec().into()))
            .map_err(|_| HostError::Closed)?;

        let reply = match tokio::time::timeout(self.rpc_timeout, rx).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(_)) => return Err(HostError::Closed),
            Err(_) => {
                self.router.lock().pending.remove(&id);
                return Err(HostError::Timeout(op));
            }
        };
        if let Some(error) = reply.error {
            return Err(HostError::Rpc { op, status: error });
        }
        reply
            .submessage
            .ok_or_else(|| HostError::Protocol(format!("{op}: empty response")))
    }

    /// Register a notification filter. Events arrive on the returned channel
    /// until the connection closes or the receiver is dropped.
    pub fn add_subscriber(
        &self,
        filter: EventFilter,
    ) -> Result<mpsc::UnboundedReceiver<HostEvent>, HostError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut router = self.router.lock();
        if router.closed {
            return Err(HostError::Closed);
        }
        router.subscribers.push(Subscriber { filter, tx });
        Ok(rx)
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.reader.abort();
        self.writer.abort();
    }
}

fn build_request(
    options: &ConnectOptions,
) -> Result<tokio_tungstenite::tungstenite::handshake::client::Request, HostError> {
    let header = |value: &str| {
        HeaderValue::from_str(value)
            .map_err(|e| HostError::Handshake(format!("invalid header value: {e}")))
    };
    let mut request = ORIGIN
        .into_client_request()
        .map_err(|e| HostError::Handshake(e.to_string()))?;
    let headers = request.headers_mut();
    headers.insert("origin", HeaderValue::from_static(ORIGIN));
    headers.insert("sec-websocket-protocol", HeaderValue::from_static(SUBPROTOCOL));
    headers.insert(
        "x-iterm2-library-version",
        header(&format!("rust {}", env!("CARGO_PKG_VERSION")))?,
    );
    headers.insert("x-iterm2-advisory-name", HeaderValue::from_static(ADVISORY_NAME));
    headers.insert("x-iterm2-disable-auth-ui", HeaderValue::from_static("true"));
    headers.insert("x-iterm2-cookie", header(&options.cookie)?);
    if let Some(key) = &options.key {
        headers.insert("x-iterm2-key", header(key)?);
    }
    Ok(request)
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod tests;
