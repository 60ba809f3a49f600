//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! レジストリ構築時の設定エラーと、操作呼び出し時の通信・ステータス・
//! デコードエラーを1つの列挙型で表す。

use crate::endpoint::Verb;
use thiserror::Error;

/// nasne client error type
#[derive(Debug, Error)]
pub enum NasneError {
    /// Malformed registry (duplicate name, unsupported verb, empty path)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No operation registered under the given name
    #[error("Operation not found: {0}")]
    NotFound(String),

    /// Network-level failure (DNS, connection refused, timeout)
    #[error("Failed to reach {url}: {reason}")]
    Transport {
        /// Requested URL
        url: String,
        /// Transport error description
        reason: String,
    },

    /// Device answered with a status other than 200
    #[error("Failed to call {verb} api {url}, status code: {status}")]
    Request {
        /// HTTP verb of the failed call
        verb: Verb,
        /// Requested URL
        url: String,
        /// HTTP status code returned by the device
        status: u16,
    },

    /// Device answered 200 but the body is not valid JSON
    #[error("Invalid JSON from {url}: {reason}")]
    Decode {
        /// Requested URL
        url: String,
        /// Parser error description
        reason: String,
    },
}

impl NasneError {
    /// HTTP status code carried by a `Request` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// URL of the failed call, when the error came from a request.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Transport { url, .. } | Self::Request { url, .. } | Self::Decode { url, .. } => {
                Some(url)
            }
            Self::Configuration(_) | Self::NotFound(_) => None,
        }
    }

    /// Whether the failure happened before any HTTP response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Result type alias
pub type NasneResult<T> = Result<T, NasneError>;
