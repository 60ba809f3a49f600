//! 設定管理
//!
//! ClientConfig と環境変数ヘルパー。
//! 旧名の環境変数にフォールバックした場合は非推奨警告をログに出す。

use serde::{Deserialize, Serialize};

/// 既定の接続先（nasne 出荷時の典型的なアドレス）
pub const DEFAULT_HOST: &str = "192.168.11.2";

/// クライアント設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// nasne のホスト名またはIPアドレス (デフォルト: "192.168.11.2")
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
        }
    }
}

impl ClientConfig {
    /// 指定ホストの設定を作成
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// 環境変数から読み込む
    ///
    /// `NASNE_HOST`（旧: `NASNE_IP`）が未設定なら既定値を使う。
    pub fn from_env() -> Self {
        Self {
            host: get_env_with_fallback_or("NASNE_HOST", "NASNE_IP", DEFAULT_HOST),
        }
    }
}

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}
