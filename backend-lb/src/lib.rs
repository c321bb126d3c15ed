//! backend-lb
//!
//! 名前付きバックエンドエンドポイントのスレッドセーフなレジストリと、
//! リクエストごとに1件を選ぶ選択ポリシー（ランダム、ラウンドロビン）
//!
//! # Example
//! ```
//! use backend_lb::balancer::RoundRobinStrategy;
//! use backend_lb::registry::EndpointRegistry;
//! use backend_lb::types::Endpoint;
//!
//! let registry = EndpointRegistry::new(RoundRobinStrategy::new());
//! registry.register(Endpoint::new("http://instance1")?)?;
//! registry.register(Endpoint::new("http://instance2")?)?;
//!
//! assert_eq!(registry.select()?.address(), "http://instance1");
//! assert_eq!(registry.select()?.address(), "http://instance2");
//! # Ok::<(), backend_lb::common::LbError>(())
//! ```

#![warn(missing_docs)]

/// 共通型定義（エラー型）
pub mod common;

/// ロードバランサー（選択ポリシー）
pub mod balancer;

/// エンドポイント登録管理
pub mod registry;

/// 型定義
pub mod types;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

pub use balancer::{RandomStrategy, RoundRobinStrategy, SelectionStrategy, StrategyKind};
pub use common::error::{LbError, LbResult};
pub use config::MAX_INSTANCES;
pub use registry::EndpointRegistry;
pub use types::Endpoint;
