//! # 問診票送信ハンドラ
//!
//! `POST /api/submit` で問診票 JSON を受け取り、報告メールを送信する。
//!
//! JSON の構文エラーや型不一致は axum の `Json` エクストラクタが
//! ハンドラ到達前に拒否するため、その場合はメールを送らない。

use std::sync::Arc;

use axum::{Json, extract::State};
use questionnaire_domain::QuestionnaireRecord;
use questionnaire_shared::AckResponse;

use crate::{error::SubmissionError, usecase::ReportService};

/// 成功時にクライアントへ返すメッセージ
pub const SUBMITTED_MESSAGE: &str =
    "問診票を受け付けました。報告書を医療スタッフのメールボックスへ送信しました。";

/// 問診票送信ハンドラの State
pub struct SubmissionState {
    pub service: ReportService,
}

/// 問診票を受け付けて報告メールを送信する
///
/// ## エンドポイント
/// POST /api/submit
///
/// ## レスポンス
///
/// - `200 OK`: `{"ok": true, "message": ...}`
/// - `422 Unprocessable Entity`: 必須フィールド欠落・型不一致
/// - `500 Internal Server Error`: メール設定不備、またはスプレッドシート生成・送信の失敗
#[tracing::instrument(skip_all)]
pub async fn submit_questionnaire(
    State(state): State<Arc<SubmissionState>>,
    Json(record): Json<QuestionnaireRecord>,
) -> Result<Json<AckResponse>, SubmissionError> {
    let receipt = state.service.send_report(&record).await?;

    tracing::info!(
        attachment = %receipt.attachment_filename,
        "問診票を受け付けました"
    );

    Ok(Json(AckResponse::ok(SUBMITTED_MESSAGE)))
}
