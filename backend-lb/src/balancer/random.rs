//! ランダム選択ポリシー

use super::{SelectionStrategy, StrategyKind};
use crate::balancer::types::EndpointSnapshot;
use crate::common::error::{LbError, LbResult};
use crate::types::endpoint::Endpoint;
use rand::RngExt;

/// 一様ランダムにエンドポイントを選択する
///
/// 呼び出し間で状態を持たない。乱数源はスレッドローカルRNG。
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    /// 新しいランダム選択ポリシーを作成
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for RandomStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn select(&self, snapshot: &EndpointSnapshot) -> LbResult<Endpoint> {
        if snapshot.is_empty() {
            return Err(LbError::EmptyRegistry);
        }

        let mut rng = rand::rng();
        let index = rng.random_range(0..snapshot.len());
        tracing::debug!(
            strategy = %self.kind(),
            index,
            candidates = snapshot.len(),
            "Selected endpoint"
        );

        snapshot
            .get(index)
            .cloned()
            .ok_or(LbError::EmptyRegistry)
    }
}
