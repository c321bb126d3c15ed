//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! 各バリアントは`error_type()`で安定した識別子を返すため、
//! 呼び出し側は容量超過と重複登録などを区別して分岐できる。

use thiserror::Error;

/// load balancer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LbError {
    /// Endpoint address failed validation
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Endpoint argument was absent
    #[error("Endpoint cannot be null")]
    NullEndpoint,

    /// Registry already holds its maximum number of endpoints
    #[error("Maximum capacity of {capacity} endpoints reached")]
    CapacityExceeded {
        /// Capacity of the registry that rejected the endpoint
        capacity: usize,
    },

    /// Endpoint with the same address is already registered
    #[error("Endpoint with address {0} already exists")]
    DuplicateAddress(String),

    /// No endpoints registered
    #[error("No endpoints available")]
    EmptyRegistry,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LbError {
    /// Returns a stable, machine-readable error code.
    ///
    /// # Error Types
    ///
    /// - `invalid_endpoint`: empty address
    /// - `null_endpoint`: absent endpoint argument
    /// - `capacity_exceeded`: registry is full
    /// - `duplicate_address`: address already registered
    /// - `empty_registry`: select on an empty registry
    /// - `config_error`: invalid configuration value
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint(_) => "invalid_endpoint",
            Self::NullEndpoint => "null_endpoint",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::DuplicateAddress(_) => "duplicate_address",
            Self::EmptyRegistry => "empty_registry",
            Self::Config(_) => "config_error",
        }
    }

    /// 入力値の不正によるエラーか
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidEndpoint(_) | Self::NullEndpoint | Self::Config(_)
        )
    }
}

/// load balancer Result type
pub type LbResult<T> = Result<T, LbError>;
