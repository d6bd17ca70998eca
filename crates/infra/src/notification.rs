//! # 通知送信
//!
//! 報告メールの送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **2 つの実装**: SMTP（本番・暗黙 TLS リレー）、Noop（ローカル開発用）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択
//! - **認証情報は送信時に受け取る**: 送信者は資格情報を保持しない

mod noop;
mod smtp;

use async_trait::async_trait;
pub use noop::NoopNotificationSender;
use questionnaire_domain::notification::{EmailMessage, MailCredentials, NotificationError};
pub use smtp::SmtpNotificationSender;

/// メール送信トレイト
///
/// 通知基盤の中核。メール送信の具体的な方法を抽象化する。
/// 1 回の呼び出しで 1 通を送信し、接続は呼び出しの中で開いて閉じる。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(
        &self,
        email: &EmailMessage,
        credentials: &MailCredentials,
    ) -> Result<(), NotificationError>;
}
