//! nasne クライアント
//!
//! レジストリの各エントリを、引数なしで呼び出せる `Operation` に変換して保持する。
//! 操作の集合は構築時に決まり、以後追加・削除されない。

use crate::transport::{ReqwestTransport, Transport};
use nasne_common::{ClientConfig, EndpointDescriptor, NasneError, NasneResult, Registry, Verb};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// レジストリの1エントリから導出された呼び出し可能な操作
#[derive(Clone)]
pub struct Operation {
    name: String,
    descriptor: EndpointDescriptor,
    url: String,
    transport: Arc<dyn Transport>,
}

impl Operation {
    /// 操作名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// HTTPメソッド
    pub fn verb(&self) -> Verb {
        self.descriptor.verb
    }

    /// ポート番号
    pub fn port(&self) -> u16 {
        self.descriptor.port
    }

    /// レジストリ上のパス（正規化前）
    pub fn path(&self) -> &str {
        &self.descriptor.path
    }

    /// 呼び出し先の完全なURL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// 1回だけリクエストを送り、JSONとして解釈したボディを返す
    pub fn call(&self) -> NasneResult<Value> {
        execute(self.transport.as_ref(), self.descriptor.verb, &self.url)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("verb", &self.descriptor.verb)
            .field("url", &self.url)
            .finish()
    }
}

/// nasne API クライアント
#[derive(Clone)]
pub struct Client {
    host: String,
    registry: Registry,
    transport: Arc<dyn Transport>,
    operations: HashMap<String, Operation>,
}

impl Client {
    /// 組み込みカタログと既定トランスポートでクライアントを作成
    pub fn new(host: impl Into<String>) -> NasneResult<Self> {
        Self::with_registry(host, Registry::builtin()?)
    }

    /// 設定からクライアントを作成
    pub fn from_config(config: &ClientConfig) -> NasneResult<Self> {
        Self::new(config.host.clone())
    }

    /// 任意のレジストリと既定トランスポートでクライアントを作成
    pub fn with_registry(host: impl Into<String>, registry: Registry) -> NasneResult<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(host, registry, Arc::new(transport)))
    }

    /// レジストリとトランスポートを指定してクライアントを作成
    pub fn with_transport(
        host: impl Into<String>,
        registry: Registry,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let host = host.into();
        let operations = registry
            .iter()
            .map(|(name, descriptor)| {
                let operation = Operation {
                    name: name.to_string(),
                    descriptor: descriptor.clone(),
                    url: descriptor.url(&host),
                    transport: Arc::clone(&transport),
                };
                (name.to_string(), operation)
            })
            .collect();

        Self {
            host,
            registry,
            transport,
            operations,
        }
    }

    /// 接続先ホスト
    pub fn host(&self) -> &str {
        &self.host
    }

    /// 操作の導出元レジストリ
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// 名前から操作を取得
    pub fn operation(&self, name: &str) -> NasneResult<&Operation> {
        self.operations
            .get(name)
            .ok_or_else(|| NasneError::NotFound(name.to_string()))
    }

    /// 名前で操作を呼び出す
    pub fn invoke(&self, name: &str) -> NasneResult<Value> {
        self.operation(name)?.call()
    }

    /// 利用可能な操作名（レジストリ順）
    pub fn operation_names(&self) -> Vec<&str> {
        self.registry.names().collect()
    }

    /// 全操作（レジストリ順）
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.registry
            .names()
            .filter_map(move |name| self.operations.get(name))
    }

    /// レジストリ外の記述子をこのホストに対して実行する
    pub fn call(&self, descriptor: &EndpointDescriptor) -> NasneResult<Value> {
        execute(
            self.transport.as_ref(),
            descriptor.verb,
            &descriptor.url(&self.host),
        )
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("host", &self.host)
            .field("operations", &self.operations.len())
            .finish()
    }
}

/// 1回のリクエスト/レスポンスを処理する
///
/// 200以外は `Request`、200でJSONでなければ `Decode`。
fn execute(transport: &dyn Transport, verb: Verb, url: &str) -> NasneResult<Value> {
    debug!(%verb, url, "call");
    let response = transport.execute(verb, url)?;
    debug!(%verb, url, status = response.status, "response");

    if response.status != 200 {
        return Err(NasneError::Request {
            verb,
            url: url.to_string(),
            status: response.status,
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| NasneError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
