//! nasne client
//!
//! nasne のローカルHTTP APIクライアント。カタログの各エンドポイントを
//! 引数なしの操作として公開する。
//!
//! ```no_run
//! use nasne::Client;
//!
//! let client = Client::new("192.168.11.2")?;
//! let info = client.get_box_name()?;
//! let same = client.invoke("get_box_name")?;
//! assert_eq!(info, same);
//! # Ok::<(), nasne::NasneError>(())
//! ```

#![warn(missing_docs)]

/// クライアントと操作
pub mod client;

/// HTTPトランスポート
pub mod transport;

/// カタログから生成した型付きメソッド
pub mod operations;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

pub use client::{Client, Operation};
pub use nasne_common::{
    build_url, ClientConfig, EndpointDescriptor, NasneError, NasneResult, Registry,
    RegistryBuilder, Verb,
};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
