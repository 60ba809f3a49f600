//! HTTPトランスポート
//!
//! クライアントが依存する唯一の外部境界。既定実装は `reqwest::blocking`。
//! テストでは任意の `Transport` 実装に差し替えられる。

use nasne_common::{NasneError, NasneResult, Verb};

/// トランスポートが返す生のレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTPステータスコード
    pub status: u16,
    /// レスポンスボディ
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// 新しいレスポンスを作成
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// 1回のリクエストを同期的に実行する
///
/// ボディは送らない。ネットワークレベルの失敗は `NasneError::Transport` で返す。
pub trait Transport: Send + Sync {
    /// `verb` で `url` を呼び出す
    fn execute(&self, verb: Verb, url: &str) -> NasneResult<TransportResponse>;
}

/// `reqwest::blocking` によるトランスポート
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// 既定設定のHTTPクライアントで作成（タイムアウトはreqwestの既定値）
    pub fn new() -> NasneResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| NasneError::Configuration(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// 既存のHTTPクライアントを使う
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, verb: Verb, url: &str) -> NasneResult<TransportResponse> {
        let request = match verb {
            Verb::Get => self.client.get(url),
            Verb::Post => self.client.post(url),
        };
        let transport_error = |e: reqwest::Error| NasneError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = request.send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(transport_error)?;

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
