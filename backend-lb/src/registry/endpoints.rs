//! エンドポイントレジストリ
//!
//! 登録済みエンドポイントをメモリ内で管理し、選択ポリシーに委譲して1件を返す。
//!
//! 登録時の「容量チェック→重複チェック→挿入」は書き込みロック下の
//! 単一クリティカルセクションで行う。選択は読み込みロックで
//! スナップショットの参照を複製するだけで、ポリシーの処理はロック外で走る。

use crate::balancer::{EndpointSnapshot, SelectionStrategy, StrategyKind};
use crate::common::error::{LbError, LbResult};
use crate::config::{RegistryConfig, MAX_INSTANCES};
use crate::types::endpoint::Endpoint;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

#[derive(Debug, Default)]
struct RegistryEntries {
    /// 登録順のエンドポイント（スナップショットと共有、書き込み時に複製）
    ordered: Arc<Vec<Endpoint>>,
    addresses: HashSet<String>,
}

/// エンドポイントレジストリ
///
/// アドレスの一意性と最大登録数を保証する。クローンは同じレジストリを共有する。
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    entries: Arc<RwLock<RegistryEntries>>,
    strategy: Arc<dyn SelectionStrategy>,
    capacity: usize,
}

impl EndpointRegistry {
    /// 最大登録数`MAX_INSTANCES`でレジストリを作成
    pub fn new(strategy: impl SelectionStrategy + 'static) -> Self {
        Self::with_capacity(strategy, MAX_INSTANCES)
    }

    /// 最大登録数を指定してレジストリを作成
    pub fn with_capacity(strategy: impl SelectionStrategy + 'static, capacity: usize) -> Self {
        Self::with_shared_strategy(Arc::new(strategy), capacity)
    }

    /// 共有済みのポリシーからレジストリを作成
    pub fn with_shared_strategy(strategy: Arc<dyn SelectionStrategy>, capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(RegistryEntries::default())),
            strategy,
            capacity,
        }
    }

    /// 設定からレジストリを作成
    ///
    /// # Errors
    ///
    /// 設定値が不正な場合は`LbError::Config`を返す。
    pub fn from_config(config: &RegistryConfig) -> LbResult<Self> {
        config.validate()?;
        Ok(Self::with_shared_strategy(
            config.strategy.build(),
            config.max_instances,
        ))
    }

    // クリティカルセクション内で部分更新は起こらないため、ポイズンは無視して続行する
    fn read_entries(&self) -> RwLockReadGuard<'_, RegistryEntries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, RegistryEntries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// エンドポイントを登録
    ///
    /// # Errors
    ///
    /// - 登録数が上限に達している場合は`LbError::CapacityExceeded`
    /// - 同じアドレスが登録済みの場合は`LbError::DuplicateAddress`
    pub fn register(&self, endpoint: Endpoint) -> LbResult<()> {
        let mut entries = self.write_entries();

        if entries.ordered.len() >= self.capacity {
            debug!(
                address = %endpoint,
                capacity = self.capacity,
                "Registration rejected: capacity exceeded"
            );
            return Err(LbError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if entries.addresses.contains(endpoint.address()) {
            debug!(address = %endpoint, "Registration rejected: duplicate address");
            return Err(LbError::DuplicateAddress(endpoint.into_address()));
        }

        let address = endpoint.address().to_string();
        entries.addresses.insert(address.clone());
        Arc::make_mut(&mut entries.ordered).push(endpoint);
        let registered = entries.ordered.len();
        drop(entries);

        info!(
            address = %address,
            registered,
            capacity = self.capacity,
            "Endpoint registered"
        );
        Ok(())
    }

    /// 省略可能なエンドポイントを登録
    ///
    /// `None`の場合はロックを取らずに`LbError::NullEndpoint`を返す。
    pub fn register_opt(&self, endpoint: Option<Endpoint>) -> LbResult<()> {
        match endpoint {
            Some(endpoint) => self.register(endpoint),
            None => Err(LbError::NullEndpoint),
        }
    }

    /// 選択ポリシーに従ってエンドポイントを1件選択
    ///
    /// # Errors
    ///
    /// 登録がない場合は`LbError::EmptyRegistry`を返す。
    pub fn select(&self) -> LbResult<Endpoint> {
        let snapshot = self.snapshot();
        if snapshot.is_empty() {
            return Err(LbError::EmptyRegistry);
        }
        self.strategy.select(&snapshot)
    }

    /// 現時点の登録内容のスナップショット
    pub fn snapshot(&self) -> EndpointSnapshot {
        EndpointSnapshot::from_shared(Arc::clone(&self.read_entries().ordered))
    }

    /// 登録数
    pub fn len(&self) -> usize {
        self.read_entries().ordered.len()
    }

    /// 登録がないか
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 最大登録数
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 残りの登録可能数
    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.len())
    }

    /// アドレスが登録済みか
    pub fn contains(&self, address: &str) -> bool {
        self.read_entries().addresses.contains(address)
    }

    /// 選択ポリシー種別
    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }
}
