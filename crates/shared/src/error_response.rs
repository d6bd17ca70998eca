//! # エラーレスポンス
//!
//! RFC 9457 Problem Details の `type` / `title` / `status` に、
//! フォーム UI がそのまま表示する `ok: false` と `message` を加えた形式。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービス側の責務
//! - よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://questionnaire.example.org/errors";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok:         bool,
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub message:    String,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    ///
    /// `error_type_suffix` はベース URI に付加される（例: `"configuration-error"`）。
    pub fn new(
        error_type_suffix: &str,
        title: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self {
            ok: false,
            error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
            title: title.into(),
            status,
            message: message.into(),
        }
    }

    /// 500 設定不備
    pub fn configuration_error(message: impl Into<String>) -> Self {
        Self::new("configuration-error", "Configuration Error", 500, message)
    }

    /// 500 送信失敗
    pub fn delivery_failed(message: impl Into<String>) -> Self {
        Self::new("delivery-failed", "Delivery Failed", 500, message)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_で全フィールドが正しく設定される() {
        let error = ErrorResponse::new("custom-error", "Custom Error", 418, "カスタムエラー");

        assert!(!error.ok);
        assert_eq!(
            error.error_type,
            "https://questionnaire.example.org/errors/custom-error"
        );
        assert_eq!(error.title, "Custom Error");
        assert_eq!(error.status, 418);
        assert_eq!(error.message, "カスタムエラー");
    }

    #[test]
    fn test_便利コンストラクタはいずれも500を返す() {
        assert_eq!(ErrorResponse::configuration_error("").status, 500);
        assert_eq!(ErrorResponse::delivery_failed("").status, 500);
    }

    #[test]
    fn test_jsonシリアライズでtypeフィールド名とmessageが出力される() {
        let error = ErrorResponse::configuration_error("EMAIL_PASSWORD is not set");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["ok"], false);
        assert_eq!(
            json["type"],
            "https://questionnaire.example.org/errors/configuration-error"
        );
        assert_eq!(json["status"], 500);
        assert_eq!(json["message"], "EMAIL_PASSWORD is not set");
        assert!(json.get("error_type").is_none());
    }
}
