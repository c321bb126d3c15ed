//! エンドポイント登録管理
//!
//! エンドポイントの登録状態をメモリ内で管理する

pub mod endpoints;

pub use endpoints::EndpointRegistry;
