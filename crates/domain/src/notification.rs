//! # 通知
//!
//! 問診票報告メールに関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **1 リクエスト 1 通**: 報告メールは送信成功時にちょうど 1 通、失敗時は 0 通
//! - **例外ではなく Result**: 送信経路の失敗はすべて [`NotificationError`] で表現し、
//!   エンドポイント境界で HTTP レスポンスへ変換する
//! - **資格情報の秘匿**: [`MailCredentials`] の `Debug` はパスワードを出力しない

use std::fmt;

use thiserror::Error;

/// xlsx 添付ファイルの MIME タイプ
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 通知送信エラー
///
/// 種別（バリアント）とメッセージの組。`Configuration` のみ設定不備として区別され、
/// それ以外は送信失敗として一括で扱われる。
#[derive(Debug, Error)]
pub enum NotificationError {
    /// 必須の環境変数が未設定
    #[error("環境変数が設定されていません: {variable}")]
    Configuration {
        /// 未設定の環境変数名
        variable: String,
    },

    /// スプレッドシート生成に失敗
    #[error("スプレッドシート生成に失敗: {0}")]
    SpreadsheetFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),

    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),
}

impl NotificationError {
    /// 設定不備エラーを生成する
    pub fn missing_variable(variable: impl Into<String>) -> Self {
        Self::Configuration {
            variable: variable.into(),
        }
    }

    /// 未設定の環境変数名を返す（設定不備の場合のみ）
    pub fn missing_variable_name(&self) -> Option<&str> {
        match self {
            Self::Configuration { variable } => Some(variable),
            _ => None,
        }
    }
}

/// SMTP 認証情報
#[derive(Clone, PartialEq, Eq)]
pub struct MailCredentials {
    /// ログインユーザー（送信元アドレス）
    pub username: String,
    /// パスワード（アプリパスワード）
    pub password: String,
}

impl fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// 送信時に解決されるメール設定
///
/// 宛先と認証情報の組。送信元アドレスは認証ユーザーと同一とする。
/// 送信のたびに設定プロバイダから解決される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    /// 宛先メールアドレス（医療スタッフ用メールボックス）
    pub recipient_address: String,
    /// SMTP 認証情報
    pub credentials:       MailCredentials,
}

impl MailSettings {
    /// 送信元メールアドレス
    pub fn sender_address(&self) -> &str {
        &self.credentials.username
    }
}

/// メール添付ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAttachment {
    /// ファイル名
    pub filename:     String,
    /// MIME タイプ
    pub content_type: String,
    /// 内容（メモリ上のバイト列）
    pub content:      Vec<u8>,
}

/// メールメッセージ
///
/// 報告サービスの出力。NotificationSender に渡される。
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// 送信元メールアドレス
    pub from:        String,
    /// 送信先メールアドレス
    pub to:          String,
    /// 件名
    pub subject:     String,
    /// HTML 本文
    pub html_body:   String,
    /// プレーンテキスト本文
    pub text_body:   String,
    /// 添付ファイル
    pub attachments: Vec<EmailAttachment>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn 設定不備エラーのメッセージに変数名が含まれる() {
        let err = NotificationError::missing_variable("EMAIL_PASSWORD");

        assert_eq!(err.missing_variable_name(), Some("EMAIL_PASSWORD"));
        assert!(err.to_string().contains("EMAIL_PASSWORD"));
    }

    #[test]
    fn 送信失敗エラーは変数名を持たない() {
        let err = NotificationError::SendFailed("connection refused".to_string());

        assert_eq!(err.missing_variable_name(), None);
        assert_eq!(err.to_string(), "メール送信に失敗: connection refused");
    }

    #[test]
    fn 認証情報のdebug出力にパスワードが含まれない() {
        let credentials = MailCredentials {
            username: "staff@example.org".to_string(),
            password: "super-secret".to_string(),
        };

        let debug = format!("{credentials:?}");

        assert!(debug.contains("staff@example.org"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn メール設定のdebug出力にパスワードが含まれない() {
        let settings = MailSettings {
            recipient_address: "center@example.org".to_string(),
            credentials:       MailCredentials {
                username: "staff@example.org".to_string(),
                password: "app-password".to_string(),
            },
        };

        assert_eq!(settings.sender_address(), "staff@example.org");
        assert!(!format!("{settings:?}").contains("app-password"));
    }
}
