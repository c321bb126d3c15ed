//! ロギング初期化ユーティリティ
//!
//! `RUST_LOG`が設定されていればそれを優先し、なければ`BACKEND_LB_LOG_LEVEL`、
//! どちらもなければ`info`でフィルタする。出力先はstderr。

use crate::config::{get_env_or, ENV_LOG_LEVEL};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

/// ログフィルタを構築
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = get_env_or(ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL);
        EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    })
}

/// グローバルなtracingサブスクライバを初期化
///
/// # Errors
///
/// サブスクライバが既に設定されている場合はエラーを返す。
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
}
