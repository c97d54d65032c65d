use std::env;
use std::time::Duration;

use reqwest::Client;

use crate::errors::PredictError;
use crate::models::{PatientSnapshot, Prediction};

pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5000/predict";
const DEFAULT_TIMEOUT_MS: u64 = 4000;

#[derive(Clone)]
pub struct Predictor {
    client: Client,
    url: String,
}

impl Predictor {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            url,
        }
    }

    pub fn from_env() -> Self {
        let url =
            env::var("PREDICT_URL").unwrap_or_else(|_| DEFAULT_PREDICT_URL.to_string());
        let timeout_ms = env::var("PREDICT_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        Self::new(url, Duration::from_millis(timeout_ms))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn predict(&self, snapshot: &PatientSnapshot) -> Result<Prediction, PredictError> {
        let response = self
            .client
            .post(&self.url)
            .json(snapshot)
            .send()
            .await
            .map_err(PredictError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status));
        }

        response.json().await.map_err(PredictError::Decode)
    }
}
