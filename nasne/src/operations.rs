//! 組み込みカタログの型付きメソッド
//!
//! `client.get_area_info()` のように呼べるメソッドをカタログ表から生成する。
//! 中身は `Client::invoke` と同じ経路を通るので、カスタムレジストリに
//! 該当エントリがなければ `NotFound` になる。

use crate::client::Client;
use nasne_common::NasneResult;
use serde_json::Value;

macro_rules! define_typed_operations {
    ($($name:ident => $verb:ident $port:literal $path:literal;)+) => {
        impl Client {
            $(
                #[doc = concat!("`", stringify!($verb), " :", stringify!($port), $path, "`")]
                pub fn $name(&self) -> NasneResult<Value> {
                    self.invoke(stringify!($name))
                }
            )+
        }
    };
}

nasne_common::with_catalog!(define_typed_operations);
