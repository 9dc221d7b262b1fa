use crate::errors::{CarbonitoError, CarbonitoResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// The question-answering endpoint of the Carbonito service.
pub const CARBONITO_API_URL: &str = "https://carbonito-api.fly.dev/query";

/// Fallback detail when a non-2xx response carries no usable body.
const DEFAULT_API_ERROR: &str = "Erro na resposta da API";

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    answer: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
}

/// One POST per user turn against a fixed endpoint. No retries, no timeout,
/// no authentication; a request runs until it settles.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Sends `question` as `{"question": ...}` and returns the `answer`
    /// field of a 2xx response. Non-2xx responses surface the service's
    /// `detail` message when present.
    pub async fn ask(&self, question: &str) -> CarbonitoResult<String> {
        let started = Instant::now();
        log::info!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { question })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| DEFAULT_API_ERROR.to_string());

            log::warn!("api error {}: {}", status, detail);
            return Err(CarbonitoError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| CarbonitoError::Payload(e.to_string()))?;

        log::info!("answer received in {}ms", started.elapsed().as_millis());
        Ok(body.answer)
    }
}
