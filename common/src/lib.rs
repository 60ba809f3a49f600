//! nasne client 共通型定義
//!
//! エンドポイント記述子・レジストリ・組み込みカタログ・エラー型・設定。
//! ネットワークには依存しない。

#![warn(missing_docs)]

/// 組み込みエンドポイントカタログ
pub mod catalog;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// エンドポイント型定義
pub mod endpoint;

/// エラー型定義
pub mod error;

/// エンドポイントレジストリ
pub mod registry;

pub use config::ClientConfig;
pub use endpoint::{build_url, EndpointDescriptor, Verb};
pub use error::{NasneError, NasneResult};
pub use registry::{Registry, RegistryBuilder};
