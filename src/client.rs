//! The Blockmove API client: request signing, transport, endpoint methods.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::{trim_endpoint, ClientConfig};
use crate::error::{Error, Result};
use crate::sign;
use crate::types::{ApiResponse, Destination, HistoryParams, Priority};

/// Client for the Blockmove wallet API.
///
/// Holds credentials and endpoint configuration and issues signed JSON
/// requests. Every call is a stateless request/response round-trip; nothing
/// is retried or pipelined, and redirects are followed by the transport.
/// The fields are not synchronized: configure the
/// client before sharing it across tasks, and do not mutate credentials or
/// the endpoint while requests are in flight.
///
/// Credentials are never logged.
pub struct ApiClient {
    api_key: String,
    api_secret: String,
    endpoint: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client with the production endpoint and default transport.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key, api_secret))
    }

    /// Build a client from explicit configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build().map_err(|e| Error::Transport {
            url: config.endpoint.clone(),
            status: None,
            body: None,
            message: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            api_key: config.api_key,
            api_secret: config.api_secret,
            endpoint: trim_endpoint(&config.endpoint),
            http,
        })
    }

    /// Replace the API public key. Returns `&mut Self` for chaining.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> &mut Self {
        self.api_key = api_key.into();
        self
    }

    /// Replace the API secret key. Returns `&mut Self` for chaining.
    pub fn set_api_secret(&mut self, api_secret: impl Into<String>) -> &mut Self {
        self.api_secret = api_secret.into();
        self
    }

    /// Replace the endpoint. Leading and trailing `/` are stripped, so a
    /// configured `https://x/` still produces requests to `https://x/method`.
    pub fn set_endpoint(&mut self, endpoint: impl AsRef<str>) -> &mut Self {
        self.endpoint = trim_endpoint(endpoint.as_ref());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sign `params` and POST them to `{endpoint}/{method}`.
    ///
    /// `_api_key` is inserted before signing and `_api_sign` after, so the
    /// signature never covers itself. The signed bytes and the transmitted
    /// body share the same key order; see [`crate::sign`] for the canonical
    /// JSON contract. Returns the decoded envelope without inspecting
    /// `code`; the endpoint methods do that.
    pub async fn request(&self, method: &str, mut params: Map<String, Value>) -> Result<ApiResponse> {
        if self.api_key.is_empty() || self.api_secret.is_empty() {
            return Err(Error::Config(
                "API key or API secret key are not set".to_string(),
            ));
        }

        let url = format!("{}/{}", self.endpoint, method);

        params.insert("_api_key".into(), Value::String(self.api_key.clone()));
        let canonical = serde_json::to_string(&params).map_err(|e| Error::Transport {
            url: url.clone(),
            status: None,
            body: None,
            message: format!("request serialization: {e}"),
        })?;

        let signature = sign::sign_canonical_json(&canonical, &self.api_secret);
        params.insert("_api_sign".into(), Value::String(signature));
        let body = serde_json::to_string(&params).map_err(|e| Error::Transport {
            url: url.clone(),
            status: None,
            body: None,
            message: format!("request serialization: {e}"),
        })?;

        debug!(method, url = %url, "dispatching signed request");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Transport {
                url: url.clone(),
                status: e.status().map(|s| s.as_u16()),
                body: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| Error::Transport {
            url: url.clone(),
            status: Some(status.as_u16()),
            body: None,
            message: e.to_string(),
        })?;

        if status != StatusCode::OK {
            return Err(Error::Transport {
                url,
                status: Some(status.as_u16()),
                body: Some(text),
                message: format!("unexpected HTTP status {status}"),
            });
        }

        let envelope: ApiResponse = serde_json::from_str(&text).map_err(|e| Error::Transport {
            url,
            status: Some(status.as_u16()),
            body: Some(text.clone()),
            message: format!("malformed response body: {e}"),
        })?;

        debug!(method, code = envelope.code, "response decoded");
        Ok(envelope)
    }

    /// Ping the service. Returns the literal `"OK"` on success.
    pub async fn status(&self) -> Result<&'static str> {
        let response = self.request("status", Map::new()).await?;
        Self::expect_data(response)?;
        Ok("OK")
    }

    /// Generate a deposit address in a wallet. `webhook` is an optional URL
    /// the service notifies on address balance changes.
    pub async fn generate_address(&self, wallet_id: &str, webhook: Option<&str>) -> Result<Value> {
        let mut params = Map::new();
        params.insert("wallet_id".into(), Value::String(wallet_id.into()));
        params.insert("webhook".into(), opt_str(webhook));
        let response = self.request("generateaddress", params).await?;
        Self::expect_data(response)
    }

    /// Look up a transaction by its hash.
    pub async fn get_tx(&self, wallet_id: &str, tx_id: &str) -> Result<Value> {
        let mut params = Map::new();
        params.insert("wallet_id".into(), Value::String(wallet_id.into()));
        params.insert("tx_id".into(), Value::String(tx_id.into()));
        let response = self.request("tx", params).await?;
        Self::expect_data(response)
    }

    /// Wallet balance info.
    pub async fn get_wallet_balance(&self, wallet_id: &str) -> Result<Value> {
        let mut params = Map::new();
        params.insert("wallet_id".into(), Value::String(wallet_id.into()));
        let response = self.request("walletbalance", params).await?;
        Self::expect_data(response)
    }

    /// Address info. `message` is the secondary tag/memo some ledgers use;
    /// `token` narrows the lookup to a token symbol.
    pub async fn get_address_info(
        &self,
        address: &str,
        message: Option<&str>,
        token: Option<&str>,
    ) -> Result<Value> {
        let mut params = Map::new();
        params.insert("address".into(), Value::String(address.into()));
        params.insert("message".into(), opt_str(message));
        params.insert("token".into(), opt_str(token));
        let response = self.request("addressinfo", params).await?;
        Self::expect_data(response)
    }

    /// Wallet history, optionally windowed by `params`.
    pub async fn get_wallet_history(
        &self,
        wallet_id: &str,
        params: Option<HistoryParams>,
        token: Option<&str>,
    ) -> Result<Value> {
        let mut body = Map::new();
        body.insert("wallet_id".into(), Value::String(wallet_id.into()));
        body.insert("token".into(), opt_str(token));
        body.insert("params".into(), params.unwrap_or_default().to_value());
        let response = self.request("wallethistory", body).await?;
        Self::expect_data(response)
    }

    /// Address history, optionally windowed by `params`.
    pub async fn get_address_history(
        &self,
        address: &str,
        params: Option<HistoryParams>,
        token: Option<&str>,
    ) -> Result<Value> {
        let mut body = Map::new();
        body.insert("address".into(), Value::String(address.into()));
        body.insert("token".into(), opt_str(token));
        body.insert("params".into(), params.unwrap_or_default().to_value());
        let response = self.request("addresshistory", body).await?;
        Self::expect_data(response)
    }

    /// Send a payment from a wallet.
    ///
    /// The wallet password is reduced to its SHA-512 hex digest before it
    /// is placed in the request, so the plaintext never goes on the wire.
    /// That is a one-way password digest, not encryption; see
    /// [`sign::password_digest`].
    pub async fn send(
        &self,
        wallet_id: &str,
        wallet_password: &str,
        destination: Destination,
        amount: f64,
        priority: Option<Priority>,
        token: Option<&str>,
    ) -> Result<Value> {
        let mut params = Map::new();
        params.insert("wallet_id".into(), Value::String(wallet_id.into()));
        params.insert(
            "password".into(),
            Value::String(sign::password_digest(wallet_password)),
        );
        params.insert("destination".into(), destination.to_value());
        params.insert("amount".into(), Value::from(amount));
        params.insert(
            "priority".into(),
            priority
                .map(|p| Value::String(p.as_str().into()))
                .unwrap_or(Value::Null),
        );
        params.insert("token".into(), opt_str(token));
        let response = self.request("send", params).await?;
        Self::expect_data(response)
    }

    fn expect_data(response: ApiResponse) -> Result<Value> {
        if response.code != 200 {
            return Err(Error::Api {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }
        Ok(response.data.unwrap_or(Value::Null))
    }
}

fn opt_str(value: Option<&str>) -> Value {
    value
        .map(|v| Value::String(v.to_string()))
        .unwrap_or(Value::Null)
}
