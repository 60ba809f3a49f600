//! Property-based tests using proptest

use nasne::{build_url, Client, Registry, Transport, TransportResponse, Verb};
use nasne::{NasneError, NasneResult};
use proptest::prelude::*;
use std::sync::Arc;

struct OkTransport;

impl Transport for OkTransport {
    fn execute(&self, _verb: Verb, _url: &str) -> NasneResult<TransportResponse> {
        Ok(TransportResponse::new(200, "{}"))
    }
}

fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,12}"
}

proptest! {
    /// 先頭スラッシュの有無にかかわらず host:port とパスの間はスラッシュ1つ
    #[test]
    fn url_has_single_separator(
        host in "[a-z0-9.]{1,20}",
        port in 1u16..=u16::MAX,
        segments in prop::collection::vec(segment(), 1..4),
        leading in 0usize..3,
    ) {
        let bare = segments.join("/");
        let path = format!("{}{}", "/".repeat(leading), bare);
        let url = build_url(&host, port, &path);

        prop_assert_eq!(url, format!("http://{}:{}/{}", host, port, bare));
    }

    /// 同じパスならスラッシュ付き・なしで同じURL
    #[test]
    fn leading_slash_does_not_change_url(
        port in 1u16..=u16::MAX,
        segments in prop::collection::vec(segment(), 1..4),
    ) {
        let bare = segments.join("/");
        let with_slash = format!("/{}", bare);
        prop_assert_eq!(
            build_url("192.168.11.2", port, &bare),
            build_url("192.168.11.2", port, &with_slash)
        );
    }

    /// N件のレジストリからN個の操作ができる
    #[test]
    fn one_operation_per_entry(count in 0usize..30) {
        let registry = (0..count)
            .fold(Registry::builder(), |builder, i| {
                let verb = if i % 2 == 0 { Verb::Get } else { Verb::Post };
                builder.entry(format!("op_{i}"), verb, 64210, format!("status/op{i}"))
            })
            .build()
            .unwrap();
        let client = Client::with_transport("nasne.local", registry, Arc::new(OkTransport));

        prop_assert_eq!(client.operation_names().len(), count);
        for (i, operation) in client.operations().enumerate() {
            prop_assert_eq!(operation.name(), format!("op_{i}"));
            prop_assert_eq!(
                operation.url(),
                format!("http://nasne.local:64210/status/op{i}")
            );
            prop_assert!(operation.call().is_ok());
        }
    }

    /// 重複名を含むレジストリは必ず構築時に拒否される
    #[test]
    fn duplicate_names_are_rejected(name in "[a-z_][a-z0-9_]{0,15}", copies in 2usize..5) {
        let result = (0..copies)
            .fold(Registry::builder(), |builder, i| {
                builder.entry(name.clone(), Verb::Get, 64210, format!("/status/{i}"))
            })
            .build();
        prop_assert!(matches!(result, Err(NasneError::Configuration(_))));
    }
}
