//! # 問診票サービス エラー定義
//!
//! 送信処理のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 設定不備と送信失敗はどちらも 500 を返し、メッセージ本文と `type` で区別する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use questionnaire_domain::NotificationError;
use questionnaire_shared::ErrorResponse;
use thiserror::Error;

/// 問診票送信で発生するエラー
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// 報告メールの生成・送信に失敗
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

impl SubmissionError {
    /// クライアントに返すメッセージ
    pub fn client_message(&self) -> String {
        match self {
            Self::Notification(NotificationError::Configuration { variable }) => {
                format!("環境変数が設定されていません: {variable}")
            }
            Self::Notification(e) => format!("送信に失敗しました: {e}"),
        }
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let message = self.client_message();
        let body = match &self {
            Self::Notification(NotificationError::Configuration { variable }) => {
                tracing::error!(variable = %variable, "メール設定が不足しています");
                ErrorResponse::configuration_error(message)
            }
            Self::Notification(e) => {
                tracing::error!(error = %e, "問診票の送信に失敗しました");
                ErrorResponse::delivery_failed(message)
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn 設定不備のメッセージに変数名が含まれる() {
        let err = SubmissionError::from(NotificationError::missing_variable("EMAIL_PASSWORD"));

        assert_eq!(
            err.client_message(),
            "環境変数が設定されていません: EMAIL_PASSWORD"
        );
    }

    #[test]
    fn 送信失敗のメッセージに原因が含まれる() {
        let err = SubmissionError::from(NotificationError::SendFailed(
            "SMTP 送信失敗: connection refused".to_string(),
        ));

        let message = err.client_message();

        assert!(message.starts_with("送信に失敗しました"));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn いずれのエラーも500になる() {
        let config = SubmissionError::from(NotificationError::missing_variable("EMAIL_PASSWORD"));
        let send = SubmissionError::from(NotificationError::SendFailed("x".to_string()));

        assert_eq!(
            config.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            send.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
