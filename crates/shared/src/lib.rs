//! # 問診票サービス 共有ユーティリティ
//!
//! レスポンス形式とログ基盤など、ビジネスロジックを含まない共通部品を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換はサービス側の責務）
//! - ログ初期化など重い依存は `observability` feature の背後に置く

pub mod api_response;
pub mod error_response;
pub mod event_log;
pub mod health;
pub mod observability;

pub use api_response::AckResponse;
pub use error_response::ErrorResponse;
pub use health::HealthResponse;
