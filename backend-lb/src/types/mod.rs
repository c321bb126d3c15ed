//! 型定義

pub mod endpoint;

pub use endpoint::Endpoint;
