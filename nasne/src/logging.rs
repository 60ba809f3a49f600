//! ロギング初期化ユーティリティ
//!
//! ライブラリ本体は `tracing` のイベントを出すだけで、subscriber は設定しない。
//! バイナリ側が起動時に一度だけ `init` を呼ぶ。

use anyhow::{anyhow, Context};
use nasne_common::config::get_env_with_fallback_or;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// 既定のログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// ロギング設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` の指定（例: `info`, `nasne=debug`）
    pub level: String,
    /// ANSIカラーを使うか
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            ansi: std::io::stderr().is_terminal(),
        }
    }
}

impl LogConfig {
    /// `NASNE_LOG_LEVEL`（旧: `LOG_LEVEL`）から読み込む
    pub fn from_env() -> Self {
        Self {
            level: get_env_with_fallback_or("NASNE_LOG_LEVEL", "LOG_LEVEL", DEFAULT_LOG_LEVEL),
            ..Self::default()
        }
    }
}

/// ログレベル指定から `EnvFilter` を作る
pub fn build_filter(level: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("invalid log level: {level:?}"))
}

/// グローバル subscriber を設定する
///
/// 出力形式は `時刻 レベル ファイル:行 メッセージ`。stderr へ出す。
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let filter = build_filter(&config.level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
