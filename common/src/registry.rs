//! エンドポイントレジストリ
//!
//! 操作名 → エンドポイント記述子の不変マップ。構築時に検証し、以後は読み取り専用。
//! `Arc`で共有されるため、複数クライアント間で安価にcloneできる。

use crate::catalog::CATALOG;
use crate::endpoint::{is_identifier, EndpointDescriptor, Verb};
use crate::error::{NasneError, NasneResult};
use std::collections::HashMap;
use std::sync::Arc;

/// エンドポイントレジストリ
#[derive(Debug, Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

#[derive(Debug)]
struct RegistryInner {
    /// 登録順のエントリ
    entries: Vec<(String, EndpointDescriptor)>,
    /// 操作名 → `entries`のインデックス
    index: HashMap<String, usize>,
}

impl Registry {
    /// 空のビルダーを作成
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// 組み込みカタログからレジストリを構築
    pub fn builtin() -> NasneResult<Self> {
        CATALOG
            .iter()
            .fold(Self::builder(), |builder, (name, verb, port, path)| {
                builder.entry_text(*name, *verb, *port, *path)
            })
            .build()
    }

    /// `(name, descriptor)` の列からレジストリを構築
    ///
    /// 名前の重複・空パス・識別子として不正な名前は `Configuration` エラー。
    pub fn from_entries<I, S>(entries: I) -> NasneResult<Self>
    where
        I: IntoIterator<Item = (S, EndpointDescriptor)>,
        S: Into<String>,
    {
        entries
            .into_iter()
            .fold(Self::builder(), |builder, (name, descriptor)| {
                builder.entry(name, descriptor.verb, descriptor.port, descriptor.path)
            })
            .build()
    }

    /// 名前から記述子を取得
    pub fn get(&self, name: &str) -> NasneResult<&EndpointDescriptor> {
        self.inner
            .index
            .get(name)
            .map(|&i| &self.inner.entries[i].1)
            .ok_or_else(|| NasneError::NotFound(name.to_string()))
    }

    /// 名前が登録済みか
    pub fn contains(&self, name: &str) -> bool {
        self.inner.index.contains_key(name)
    }

    /// 登録数
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// 空か
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// 登録順の操作名
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.entries.iter().map(|(name, _)| name.as_str())
    }

    /// 登録順の `(name, descriptor)`
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EndpointDescriptor)> {
        self.inner
            .entries
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = (&'a str, &'a EndpointDescriptor);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// レジストリビルダー
///
/// エントリを1件ずつ受け取り、`build()` でまとめて検証する。
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    pending: Vec<PendingEntry>,
}

#[derive(Debug)]
struct PendingEntry {
    name: String,
    verb: String,
    port: u16,
    path: String,
}

impl RegistryBuilder {
    /// 型付きverbでエントリを追加
    pub fn entry(
        self,
        name: impl Into<String>,
        verb: Verb,
        port: u16,
        path: impl Into<String>,
    ) -> Self {
        self.entry_text(name, verb.as_str(), port, path)
    }

    /// 文字列verbでエントリを追加（`build()`時にGET/POST以外は拒否）
    pub fn entry_text(
        mut self,
        name: impl Into<String>,
        verb: impl Into<String>,
        port: u16,
        path: impl Into<String>,
    ) -> Self {
        self.pending.push(PendingEntry {
            name: name.into(),
            verb: verb.into(),
            port,
            path: path.into(),
        });
        self
    }

    /// 検証してレジストリを構築
    pub fn build(self) -> NasneResult<Registry> {
        let mut entries = Vec::with_capacity(self.pending.len());
        let mut index = HashMap::with_capacity(self.pending.len());

        for entry in self.pending {
            if !is_identifier(&entry.name) {
                return Err(NasneError::Configuration(format!(
                    "invalid endpoint name: {:?}",
                    entry.name
                )));
            }
            let verb: Verb = entry.verb.parse().map_err(|_| {
                NasneError::Configuration(format!(
                    "unsupported HTTP verb {:?} for endpoint {}",
                    entry.verb, entry.name
                ))
            })?;
            if entry.path.trim().is_empty() {
                return Err(NasneError::Configuration(format!(
                    "empty path for endpoint {}",
                    entry.name
                )));
            }
            if index.contains_key(&entry.name) {
                return Err(NasneError::Configuration(format!(
                    "duplicate endpoint name: {}",
                    entry.name
                )));
            }

            index.insert(entry.name.clone(), entries.len());
            entries.push((
                entry.name,
                EndpointDescriptor::new(verb, entry.port, entry.path),
            ));
        }

        Ok(Registry {
            inner: Arc::new(RegistryInner { entries, index }),
        })
    }
}
