//! Client for the Blockmove cryptocurrency-wallet HTTP API.
//!
//! Builds signed JSON requests, posts them over HTTPS, and maps responses
//! and failures into typed results. This crate is not a wallet and not a
//! node; it only authenticates calls to the hosted wallet service.
//!
//! # Request pipeline
//!
//! ```text
//! params (insertion-ordered map)
//!   │  insert `_api_key`
//!   ├─ canonical JSON ──► HMAC-SHA256(secret) ──► `_api_sign`
//!   │  insert `_api_sign` (serializes last)
//!   └─ POST {endpoint}/{method}   Content-Type: application/json
//!          │
//!          ├─ HTTP status != 200 ───► Error::Transport
//!          ├─ body `code` != 200 ───► Error::Api
//!          └─ body `code` == 200 ───► data
//! ```
//!
//! # Endpoints
//!
//! | Method | Wire name |
//! |--------|-----------|
//! | [`ApiClient::status`] | `status` |
//! | [`ApiClient::generate_address`] | `generateaddress` |
//! | [`ApiClient::get_tx`] | `tx` |
//! | [`ApiClient::get_wallet_balance`] | `walletbalance` |
//! | [`ApiClient::get_address_info`] | `addressinfo` |
//! | [`ApiClient::get_wallet_history`] | `wallethistory` |
//! | [`ApiClient::get_address_history`] | `addresshistory` |
//! | [`ApiClient::send`] | `send` |
//!
//! # Usage
//!
//! ```ignore
//! use blockmove_api::{ApiClient, ClientConfig, Destination, Priority};
//! use std::time::Duration;
//!
//! let client = ApiClient::from_config(
//!     ClientConfig::new("api-key", "api-secret").with_timeout(Duration::from_secs(10)),
//! )?;
//!
//! let address = client.generate_address("wallet-1", None).await?;
//! let tx = client
//!     .send(
//!         "wallet-1",
//!         "wallet password",
//!         Destination::address("rAddress"),
//!         0.25,
//!         Some(Priority::Medium),
//!         None,
//!     )
//!     .await?;
//! ```
//!
//! Failures come in three kinds, all surfaced immediately to the caller:
//! [`Error::Config`] (missing credentials, raised before any I/O),
//! [`Error::Transport`] (HTTP or connection failures), and [`Error::Api`]
//! (the service reported `code != 200`). There is no retry and no fallback.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod sign;
pub mod types;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use types::{ApiResponse, Destination, HistoryParams, Priority};
