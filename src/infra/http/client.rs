use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::InvalidUrl(format!("{path}: {err}")))
    }

    /// GET a JSON document; any non-2xx status is an error.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        let resp = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        decode_body(status, &text, BodyPolicy::Strict)
    }

    /// POST `body` as JSON and decode the reply, even an error status that still carries JSON.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let payload = serde_json::to_string(body)?;
        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        decode_body(status, &text, BodyPolicy::Lenient)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPolicy {
    Strict,
    Lenient,
}

pub fn decode_body<T: DeserializeOwned>(
    status: u16,
    text: &str,
    policy: BodyPolicy,
) -> Result<T, ClientError> {
    let ok = (200..300).contains(&status);
    if !ok && policy == BodyPolicy::Strict {
        return Err(ClientError::Http { status });
    }
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(ClientError::Http { status }),
        Err(err) => Err(err.into()),
    }
}
