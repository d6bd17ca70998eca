//! # 受付レスポンス
//!
//! 送信系エンドポイントの成功レスポンス `{ "ok": true, "message": "..." }` を提供する。

use serde::{Deserialize, Serialize};

/// 受付完了レスポンス
///
/// フォーム UI は `message` をそのまま画面に表示する。
///
/// ## 使用例
///
/// ```
/// use questionnaire_shared::AckResponse;
///
/// let response = AckResponse::ok("送信しました");
/// assert!(response.ok);
/// assert_eq!(response.message, "送信しました");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    pub ok:      bool,
    pub message: String,
}

impl AckResponse {
    /// 成功レスポンスを作成する
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok:      true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializeを正しいjson形状にする() {
        let response = AckResponse::ok("done");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "ok": true, "message": "done" }));
    }
}
