//! # ヘルスチェックハンドラ
//!
//! `/health` は Liveness Check のみ。SMTP リレーへの疎通は確認しない。

use axum::Json;
use questionnaire_shared::HealthResponse;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
