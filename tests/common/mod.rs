#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    routing::post,
};
use tokio::{net::TcpListener, sync::mpsc};

pub const LINK: &str = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc123";

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: &'static str,
    requests: mpsc::UnboundedSender<CapturedRequest>,
}

async fn top_tracks(
    State(canned): State<Canned>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    let _ = canned.requests.send(CapturedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });

    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
}

/// A backend that answers every request with the same canned response.
pub struct StubBackend {
    pub base_url: String,
    requests: mpsc::UnboundedReceiver<CapturedRequest>,
}

impl StubBackend {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, requests) = mpsc::unbounded_channel();

        let app = Router::new()
            .route("/get_top_5_from_playlist", post(top_tracks))
            .with_state(Canned {
                status: StatusCode::from_u16(status).unwrap(),
                body,
                requests: tx,
            });

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub async fn next_request(&mut self) -> CapturedRequest {
        self.requests.recv().await.expect("backend received a request")
    }
}

/// An address nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
