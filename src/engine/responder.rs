use crate::domain::TrafficPayload;
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub const LISTEN_PORT: u16 = 8888;

/// Fixed-payload HTTP listener. Serves until the process exits; there is no
/// shutdown path.
pub struct Responder {
    listener: TcpListener,
}

impl Responder {
    pub async fn bind(addr: SocketAddr) -> Result<Self, String> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|err| format!("Failed to bind {addr}: {err}"))?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, String> {
        self.listener
            .local_addr()
            .map_err(|err| format!("Failed to read listener address: {err}"))
    }

    pub async fn serve(self) -> Result<(), String> {
        // Every GET path gets the same payload; other methods fall through to
        // the method router's default 405.
        let app = Router::new().fallback_service(get(traffic_payload));
        axum::serve(self.listener, app)
            .await
            .map_err(|err| format!("Responder stopped serving: {err}"))
    }
}

async fn traffic_payload() -> Json<TrafficPayload> {
    Json(TrafficPayload::new())
}
