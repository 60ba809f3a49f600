//! survey: 全操作の呼び出しと結果の集計
//!
//! 1つの操作が失敗しても次へ進む。終了コードは個々の失敗に影響されない。

use super::Cli;
use crate::client::Client;
use serde::Serialize;
use tracing::{error, info};

/// 呼び出しに失敗した操作
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SurveyFailure {
    /// 操作名
    pub name: String,
    /// エラー内容
    pub error: String,
}

/// 全操作の呼び出し結果
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SurveyReport {
    /// 接続先ホスト
    pub host: String,
    /// 成功した操作名（呼び出し順）
    pub succeeded: Vec<String>,
    /// 失敗した操作
    pub failed: Vec<SurveyFailure>,
}

impl SurveyReport {
    /// 成功した操作名を名前順で返す
    pub fn sorted_successes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.succeeded.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// 成功一覧（1行1件、4スペースのインデント）
    pub fn success_summary(&self) -> String {
        self.sorted_successes()
            .iter()
            .map(|name| format!("    {name}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 操作を順に呼び出して結果を集める
///
/// `only` が空ならレジストリの全操作を、そうでなければ指定された名前だけを呼ぶ。
/// 未知の名前は失敗として記録する。
pub fn run(client: &Client, only: &[String]) -> SurveyReport {
    let names: Vec<String> = if only.is_empty() {
        client
            .operation_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    } else {
        only.to_vec()
    };

    let mut report = SurveyReport {
        host: client.host().to_string(),
        ..Default::default()
    };

    for name in names {
        match client.invoke(&name) {
            Ok(value) => {
                info!("{}: {}", name, value);
                report.succeeded.push(name);
            }
            Err(e) => {
                error!("Failed to call {}: {}", name, e);
                report.failed.push(SurveyFailure {
                    name,
                    error: e.to_string(),
                });
            }
        }
    }

    report
}

/// 操作一覧（`name<TAB>VERB<TAB>url`）
pub fn listing(client: &Client) -> String {
    client
        .operations()
        .map(|op| format!("{}\t{}\t{}", op.name(), op.verb(), op.url()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Execute the survey command
pub fn execute(args: &Cli) -> Result<(), anyhow::Error> {
    let config = args.client_config();
    let client = Client::from_config(&config)?;

    if args.list {
        println!("{}", listing(&client));
        return Ok(());
    }

    info!("Calling {} operations on {}", client.operation_names().len(), client.host());
    let report = run(&client, &args.only);
    info!("success methods are: \n{}", report.success_summary());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::stub::StubTransport;
    use crate::transport::{Transport, TransportResponse};
    use nasne_common::{NasneError, NasneResult, Registry, Verb};
    use std::sync::Arc;

    /// 名前に応じて成功/失敗を返すトランスポート
    struct PathTransport;

    impl Transport for PathTransport {
        fn execute(&self, _verb: Verb, url: &str) -> NasneResult<TransportResponse> {
            if url.ends_with("/status/boxNameGet") {
                Ok(TransportResponse::new(200, r#"{"name":"nasne"}"#))
            } else if url.ends_with("/status/HDDListGet") {
                Ok(TransportResponse::new(200, "[]"))
            } else if url.ends_with("/status/areaInfoGet") {
                Ok(TransportResponse::new(500, ""))
            } else {
                Err(NasneError::Transport {
                    url: url.to_string(),
                    reason: "connection refused".to_string(),
                })
            }
        }
    }

    fn registry() -> Registry {
        Registry::builder()
            .entry("get_hdd_list", Verb::Get, 64210, "/status/HDDListGet")
            .entry("get_area_info", Verb::Get, 64210, "/status/areaInfoGet")
            .entry("get_box_name", Verb::Get, 64210, "/status/boxNameGet")
            .entry("get_epg", Verb::Post, 64210, "/chEpg/EPGGet")
            .build()
            .unwrap()
    }

    #[test]
    fn test_run_continues_after_failures() {
        let client = Client::with_transport("192.168.11.2", registry(), Arc::new(PathTransport));
        let report = run(&client, &[]);

        assert_eq!(report.host, "192.168.11.2");
        assert_eq!(report.succeeded, vec!["get_hdd_list", "get_box_name"]);
        let failed: Vec<&str> = report.failed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(failed, vec!["get_area_info", "get_epg"]);
        assert!(report.failed[0].error.contains("status code: 500"));
        assert!(report.failed[1].error.contains("connection refused"));
    }

    #[test]
    fn test_success_summary_is_sorted_and_indented() {
        let client = Client::with_transport("192.168.11.2", registry(), Arc::new(PathTransport));
        let report = run(&client, &[]);

        assert_eq!(report.sorted_successes(), vec!["get_box_name", "get_hdd_list"]);
        assert_eq!(report.success_summary(), "    get_box_name\n    get_hdd_list");
    }

    #[test]
    fn test_run_only_selected_operations() {
        let stub = Arc::new(StubTransport::responding(200, "{}"));
        let client = Client::with_transport("192.168.11.2", registry(), stub.clone());

        let only = vec!["get_epg".to_string(), "get_missing".to_string()];
        let report = run(&client, &only);

        assert_eq!(report.succeeded, vec!["get_epg"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].name, "get_missing");
        assert!(report.failed[0].error.contains("Operation not found"));
        assert_eq!(stub.calls().len(), 1);
    }

    #[test]
    fn test_listing_does_not_touch_network() {
        let stub = Arc::new(StubTransport::responding(200, "{}"));
        let client = Client::with_transport("nasne.local", registry(), stub.clone());

        let text = listing(&client);
        let first = text.lines().next().unwrap();
        assert_eq!(first, "get_hdd_list\tGET\thttp://nasne.local:64210/status/HDDListGet");
        assert_eq!(text.lines().count(), 4);
        assert!(stub.calls().is_empty());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = SurveyReport {
            host: "192.168.11.2".to_string(),
            succeeded: vec!["get_box_name".to_string()],
            failed: vec![SurveyFailure {
                name: "get_epg".to_string(),
                error: "boom".to_string(),
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["succeeded"][0], "get_box_name");
        assert_eq!(json["failed"][0]["name"], "get_epg");
    }
}
