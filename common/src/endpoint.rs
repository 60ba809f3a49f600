//! エンドポイント型定義
//!
//! nasne API の1呼び出しを表す (verb, port, path) の組と URL 組み立て

use crate::error::NasneError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// HTTPメソッド（nasne APIはGET/POSTのみ）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    /// GET
    Get,
    /// POST（リクエストボディなし）
    Post,
}

impl Verb {
    /// Verbを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl FromStr for Verb {
    type Err = NasneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            other => Err(NasneError::Configuration(format!(
                "unsupported HTTP verb: {other:?} (only GET and POST are permitted)"
            ))),
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// エンドポイント記述子
///
/// レジストリ構築時に一度だけ作られ、以後変更されない。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// HTTPメソッド
    pub verb: Verb,
    /// ポート番号（64210: status/config, 64220: recording/schedule）
    pub port: u16,
    /// パス（先頭スラッシュの有無は問わない）
    pub path: String,
}

impl EndpointDescriptor {
    /// 新しい記述子を作成
    pub fn new(verb: Verb, port: u16, path: impl Into<String>) -> Self {
        Self {
            verb,
            port,
            path: path.into(),
        }
    }

    /// 指定ホストに対する完全なURLを返す
    pub fn url(&self, host: &str) -> String {
        build_url(host, self.port, &self.path)
    }
}

/// パスを先頭スラッシュ1つに正規化する
///
/// `status/areaInfoGet` と `/status/areaInfoGet` はどちらも
/// `/status/areaInfoGet` になる。
pub fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// `http://{host}:{port}{path}` を組み立てる
pub fn build_url(host: &str, port: u16, path: &str) -> String {
    format!("http://{}:{}{}", host, port, normalize_path(path))
}

/// 操作名として使える識別子か（`[A-Za-z_][A-Za-z0-9_]*`）
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
