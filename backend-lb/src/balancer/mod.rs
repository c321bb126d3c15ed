//! ロードバランサーモジュール
//!
//! レジストリのスナップショットから1件のエンドポイントを選ぶ選択ポリシーを提供する。
//!
//! # 選択ポリシー
//!
//! - [`RandomStrategy`]: 一様ランダム
//! - [`RoundRobinStrategy`]: 登録順の巡回
//!
//! ポリシーは読み取り専用のスナップショットのみを受け取り、レジストリを変更できない。

pub mod random;
pub mod round_robin;
pub mod types;

pub use random::RandomStrategy;
pub use round_robin::RoundRobinStrategy;
pub use types::EndpointSnapshot;

use crate::common::error::{LbError, LbResult};
use crate::types::endpoint::Endpoint;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// エンドポイント選択ポリシー
///
/// 実装は`RandomStrategy`と`RoundRobinStrategy`の2種類。
/// 追加する場合は[`StrategyKind`]にもバリアントを追加すること。
pub trait SelectionStrategy: Send + Sync + std::fmt::Debug {
    /// ポリシー種別
    fn kind(&self) -> StrategyKind;

    /// スナップショットから1件選択する
    ///
    /// スナップショットが空の場合は`LbError::EmptyRegistry`を返す。
    fn select(&self, snapshot: &EndpointSnapshot) -> LbResult<Endpoint>;
}

/// 選択ポリシー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// 一様ランダム
    #[default]
    Random,
    /// ラウンドロビン
    RoundRobin,
}

impl StrategyKind {
    /// StrategyKindを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::RoundRobin => "round-robin",
        }
    }

    /// 対応するポリシーを新しく作成
    pub fn build(self) -> Arc<dyn SelectionStrategy> {
        match self {
            Self::Random => Arc::new(RandomStrategy::new()),
            Self::RoundRobin => Arc::new(RoundRobinStrategy::new()),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = LbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "round-robin" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            other => Err(LbError::Config(format!(
                "unknown strategy '{other}' (expected 'random' or 'round-robin')"
            ))),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
