use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header::CONTENT_TYPE};
use serde::Deserialize;

use crate::error::RequestError;
use crate::input::{DecisionRequest, SyntheticInput};

const DEFAULT_USER_AGENT: &str = concat!("policyload/", env!("CARGO_PKG_VERSION"));

/// Decoded body of a policy decision.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DecisionResponse {
    /// The decision itself; the harness only measures, it never inspects it.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub metrics: BTreeMap<String, u64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<BTreeMap<String, u64>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Serialize `input` as the `{"input": {...}}` request body.
///
/// # Errors
///
/// Returns an error when the input cannot be encoded as JSON.
pub fn encode_request(input: &SyntheticInput) -> Result<Vec<u8>, RequestError> {
    serde_json::to_vec(&DecisionRequest { input }).map_err(|err| RequestError::Encode { source: err })
}

#[async_trait]
pub trait DecisionClient: Send + Sync {
    /// Post an already encoded request body and decode the decision.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be sent, when the status is
    /// not 200, or when the body is not a decision document.
    async fn evaluate(&self, body: Vec<u8>) -> Result<DecisionResponse, RequestError>;
}

/// `reqwest`-backed client posting to a fixed decision endpoint.
#[derive(Debug, Clone)]
pub struct HttpDecisionClient {
    client: Client,
    endpoint: Url,
}

impl HttpDecisionClient {
    /// Build a client for `endpoint`.
    ///
    /// `timeout` bounds the whole request; `None` keeps reqwest's default of
    /// no timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, RequestError> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| RequestError::BuildClient { source: err })?;
        Ok(Self { client, endpoint })
    }

    fn transport_error(&self, source: reqwest::Error) -> RequestError {
        RequestError::Transport {
            url: self.endpoint.to_string(),
            source,
        }
    }
}

#[async_trait]
impl DecisionClient for HttpDecisionClient {
    async fn evaluate(&self, body: Vec<u8>) -> Result<DecisionResponse, RequestError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RequestError::Status {
                url: self.endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;
        serde_json::from_slice(&bytes).map_err(|err| RequestError::Decode {
            url: self.endpoint.to_string(),
            source: err,
        })
    }
}
