//! ラウンドロビン選択ポリシー
//!
//! カーソルは位置ベースの単一カウンタで、剰余は読み出し時に取る。
//! 呼び出しの間に登録が入ると`n`が変わり、`cursor % n`が指す
//! エンドポイントもずれる。公平性が保証されるのは登録イベントの間のみ。

use super::{SelectionStrategy, StrategyKind};
use crate::balancer::types::EndpointSnapshot;
use crate::common::error::{LbError, LbResult};
use crate::types::endpoint::Endpoint;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

/// 登録順にエンドポイントを巡回するポリシー
#[derive(Debug, Default)]
pub struct RoundRobinStrategy {
    cursor: AtomicUsize,
}

impl RoundRobinStrategy {
    /// カーソル0で作成
    pub fn new() -> Self {
        Self {
            cursor: AtomicUsize::new(0),
        }
    }

    /// 現在のカーソル値（これまでの選択回数）
    pub fn cursor(&self) -> usize {
        self.cursor.load(AtomicOrdering::SeqCst)
    }
}

impl SelectionStrategy for RoundRobinStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RoundRobin
    }

    fn select(&self, snapshot: &EndpointSnapshot) -> LbResult<Endpoint> {
        if snapshot.is_empty() {
            return Err(LbError::EmptyRegistry);
        }

        // 空スナップショットではカーソルを進めない
        let cursor = self.cursor.fetch_add(1, AtomicOrdering::SeqCst);
        let index = cursor % snapshot.len();
        tracing::debug!(
            strategy = %self.kind(),
            cursor,
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
