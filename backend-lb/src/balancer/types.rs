//! バランサーモジュールの型定義
//!
//! 選択ポリシーに渡すスナップショット型を定義する。

use crate::types::endpoint::Endpoint;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// レジストリの読み取り専用スナップショット
///
/// 登録順にエンドポイントを保持する。共有された不変リストを参照するため
/// クローンは安価で、取得後の登録によって内容が変わることはない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointSnapshot {
    endpoints: Arc<Vec<Endpoint>>,
}

impl EndpointSnapshot {
    pub(crate) fn from_shared(endpoints: Arc<Vec<Endpoint>>) -> Self {
        Self { endpoints }
    }

    /// エンドポイント数
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// 指定位置のエンドポイント
    pub fn get(&self, index: usize) -> Option<&Endpoint> {
        self.endpoints.get(index)
    }

    /// 登録順のイテレータ
    pub fn iter(&self) -> std::slice::Iter<'_, Endpoint> {
        self.endpoints.iter()
    }

    /// スライスとして参照
    pub fn as_slice(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// アドレスが含まれるか
    pub fn contains(&self, address: &str) -> bool {
        self.endpoints.iter().any(|e| e.address() == address)
    }
}

impl From<Vec<Endpoint>> for EndpointSnapshot {
    fn from(endpoints: Vec<Endpoint>) -> Self {
        Self::from_shared(Arc::new(endpoints))
    }
}

impl<'a> IntoIterator for &'a EndpointSnapshot {
    type Item = &'a Endpoint;
    type IntoIter = std::slice::Iter<'a, Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for EndpointSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.endpoints.iter())
    }
}
