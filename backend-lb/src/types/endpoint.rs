//! エンドポイント型定義
//!
//! バックエンドをアドレスで識別する不変の値。
//! 等価性とハッシュはアドレスのみで決まる。

use crate::common::error::{LbError, LbResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// バックエンドエンドポイント
///
/// 生成後は変更できない。空のアドレスでは生成できない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Endpoint {
    address: String,
}

impl Endpoint {
    /// アドレスからエンドポイントを作成
    ///
    /// # Errors
    ///
    /// アドレスが空の場合は`LbError::InvalidEndpoint`を返す。
    ///
    /// # Example
    /// ```
    /// use backend_lb::types::endpoint::Endpoint;
    ///
    /// let endpoint = Endpoint::new("http://instance1").unwrap();
    /// assert_eq!(endpoint.address(), "http://instance1");
    /// assert!(Endpoint::new("").is_err());
    /// ```
    pub fn new(address: impl Into<String>) -> LbResult<Self> {
        let address = address.into();
        if address.is_empty() {
            return Err(LbError::InvalidEndpoint(
                "Address cannot be empty".to_string(),
            ));
        }
        Ok(Self { address })
    }

    /// アドレスを取得
    pub fn address(&self) -> &str {
        &self.address
    }

    /// アドレスを取り出してエンドポイントを消費する
    pub fn into_address(self) -> String {
        self.address
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.address)
    }
}

impl FromStr for Endpoint {
    type Err = LbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Endpoint {
    type Error = LbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Endpoint {
    type Error = LbError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.address
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.address
    }
}
