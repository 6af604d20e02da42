mod domain;
mod engine;

use std::net::{Ipv4Addr, SocketAddr};

use engine::driver::{self, ITERATIONS, PAUSE, TARGET_URL, WARMUP};
use engine::responder::{Responder, LISTEN_PORT};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Fire-and-forget: the task is never joined or signalled to stop, the
    // process exits once the driver loop is done. A bind or serve failure
    // ends the task and the driver just sees connection errors.
    tokio::spawn(async {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT));
        match Responder::bind(addr).await {
            Ok(responder) => {
                tracing::info!(port = LISTEN_PORT, "responder listening");
                if let Err(err) = responder.serve().await {
                    tracing::error!("{err}");
                }
            }
            Err(err) => tracing::error!("{err}"),
        }
    });

    // Warm-up sleep stands in for a readiness handshake; if the responder is
    // not up in time the early iterations fail and are logged like any other.
    tokio::time::sleep(WARMUP).await;

    let client = match driver::build_client() {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("{err}");
            return;
        }
    };

    let samples = driver::run(&client, TARGET_URL, ITERATIONS, PAUSE).await;

    let success = samples.iter().filter(|sample| sample.is_success()).count();
    tracing::info!(
        success,
        failed = samples.len() - success,
        "probe run finished"
    );
}
