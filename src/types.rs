//! Wire types shared by the endpoint methods.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Response envelope returned by every Blockmove endpoint.
///
/// `code == 200` is success; anything else is an application error and
/// `message` says why.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Requested transaction confirmation speed tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Where a payment goes: a bare address, or an address plus the secondary
/// identifier some ledgers require (Ripple destination tag, Stellar memo,
/// Monero payment ID, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Plain address string.
    Address(String),
    /// Address with a tag/memo routing funds to a sub-account.
    Tagged { address: String, message: String },
}

impl Destination {
    pub fn address(address: impl Into<String>) -> Self {
        Destination::Address(address.into())
    }

    pub fn with_message(address: impl Into<String>, message: impl Into<String>) -> Self {
        Destination::Tagged { address: address.into(), message: message.into() }
    }

    /// Wire form: a JSON string, or an `{address, message}` object.
    pub fn to_value(&self) -> Value {
        match self {
            Destination::Address(address) => Value::String(address.clone()),
            Destination::Tagged { address, message } => {
                let mut map = Map::new();
                map.insert("address".into(), Value::String(address.clone()));
                map.insert("message".into(), Value::String(message.clone()));
                Value::Object(map)
            }
        }
    }
}

impl From<&str> for Destination {
    fn from(address: &str) -> Self {
        Destination::Address(address.to_string())
    }
}

impl From<String> for Destination {
    fn from(address: String) -> Self {
        Destination::Address(address)
    }
}

/// Pagination window for the history endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl HistoryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Wire form: an object with only the fields that were set.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(limit) = self.limit {
            map.insert("limit".into(), limit.into());
        }
        if let Some(offset) = self.offset {
            map.insert("offset".into(), offset.into());
        }
        Value::Object(map)
    }
}
