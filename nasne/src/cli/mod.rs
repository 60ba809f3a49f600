//! CLI module for nasne
//!
//! 実機に対して全操作を1回ずつ呼び出すスモークテスト。

pub mod survey;

use clap::Parser;
use nasne_common::ClientConfig;

/// nasne API smoke test - calls every known endpoint once and reports which succeeded
#[derive(Parser, Debug)]
#[command(name = "nasne")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    NASNE_HOST          nasne host when HOST is omitted (default: 192.168.11.2)
    NASNE_LOG_LEVEL     Log level (default: info)
"#)]
pub struct Cli {
    /// Host name or IP address of the nasne
    pub host: Option<String>,

    /// Call only the named operation (repeatable)
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// List operations with their URLs and exit without calling them
    #[arg(long)]
    pub list: bool,

    /// Print the survey report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// 引数のホストを優先し、なければ環境変数から設定を作る
    pub fn client_config(&self) -> ClientConfig {
        match &self.host {
            Some(host) => ClientConfig::new(host.clone()),
            None => ClientConfig::from_env(),
        }
    }
}
