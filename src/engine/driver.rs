use crate::domain::ProbeSample;
use reqwest::Client;
use std::time::Duration;

pub const TARGET_URL: &str = "http://localhost:8888/test";
pub const ITERATIONS: u32 = 10;
pub const WARMUP: Duration = Duration::from_secs(2);
pub const PAUSE: Duration = Duration::from_secs(1);

pub fn build_client() -> Result<Client, String> {
    Client::builder()
        .build()
        .map_err(|err| format!("Failed to build HTTP client: {err}"))
}

/// Runs the fixed probe loop: one GET per iteration, one console line per
/// iteration, failures logged and skipped over. Every iteration runs exactly
/// once; there is no retry and no early exit.
pub async fn run(
    client: &Client,
    target_url: &str,
    iterations: u32,
    pause: Duration,
) -> Vec<ProbeSample> {
    let mut samples = Vec::with_capacity(iterations as usize);

    for iteration in 1..=iterations {
        let sample = probe_once(client, target_url, iteration).await;
        println!("{}", sample.console_line());
        samples.push(sample);

        if iteration < iterations {
            tokio::time::sleep(pause).await;
        }
    }

    samples
}

async fn probe_once(client: &Client, url: &str, iteration: u32) -> ProbeSample {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => return ProbeSample::failure(iteration, format!("Request failed: {err}")),
    };

    let status = response.status().as_u16();
    match response.bytes().await {
        Ok(bytes) => ProbeSample::success(iteration, status, bytes.len() as u64),
        Err(err) => {
            ProbeSample::failure(iteration, format!("Failed to read response: {err}"))
        }
    }
}
