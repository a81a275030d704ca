//! Query string parameters shared by listing endpoints.

use serde::{de::Error, Deserialize, Deserializer};

use crate::server::model::{
    module::{DEFAULT_MODULE_LIMIT, MAX_MODULE_LIMIT},
    notification::{
        DEFAULT_NOTIFICATION_LIMIT, DEFAULT_PENDING_LIMIT, MAX_NOTIFICATION_LIMIT,
        MAX_PENDING_LIMIT,
    },
};

/// `GET /modules` query string.
#[derive(Debug, Default, Deserialize)]
pub struct ModuleListQuery {
    pub university: Option<String>,
    pub search: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl ModuleListQuery {
    pub fn limit(&self) -> u64 {
        clamp_limit(self.limit, DEFAULT_MODULE_LIMIT, MAX_MODULE_LIMIT)
    }
}

/// `GET /notifications` query string.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationListQuery {
    #[serde(rename = "unreadOnly", default, deserialize_with = "deserialize_flag")]
    pub unread_only: bool,
    #[serde(rename = "type")]
    pub notification_type: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl NotificationListQuery {
    pub fn limit(&self) -> u64 {
        clamp_limit(self.limit, DEFAULT_NOTIFICATION_LIMIT, MAX_NOTIFICATION_LIMIT)
    }
}

/// `GET /notifications/pending` query string.
#[derive(Debug, Default, Deserialize)]
pub struct PendingQuery {
    pub limit: Option<u64>,
}

impl PendingQuery {
    pub fn limit(&self) -> u64 {
        clamp_limit(self.limit, DEFAULT_PENDING_LIMIT, MAX_PENDING_LIMIT)
    }
}

/// Applies the default when absent and bounds the result to `1..=max`.
fn clamp_limit(limit: Option<u64>, default: u64, max: u64) -> u64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Parses a query flag given as `true`/`false` or `1`/`0`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match String::deserialize(deserializer)?.as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(D::Error::custom(format!(
            "expected one of `true`, `false`, `1` or `0`, got `{}`",
            other
        ))),
    }
}

/// Treats empty query values such as `?search=` as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
