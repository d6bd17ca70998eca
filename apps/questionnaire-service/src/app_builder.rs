//! # アプリケーション構築
//!
//! ルーター定義とミドルウェアレイヤーの組み立てを担当する。
//! `main.rs` は依存の初期化とサーバー起動に集中する。

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use questionnaire_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handler::{SubmissionState, health_check, submit_questionnaire};

/// ルーターを構築する
///
/// - `POST /api/submit`: 問診票の送信
/// - `GET /health`: Liveness Check
/// - `GET /`: `static_dir/index.html`
/// - `/static/*`: `static_dir` 配下の静的ファイル（読み取り専用）
pub fn build_app(state: Arc<SubmissionState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/submit", post(submit_questionnaire))
        .with_state(state)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
