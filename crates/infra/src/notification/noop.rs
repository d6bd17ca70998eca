//! Noop 通知送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! SMTP リレーなしでローカル起動する場合に使用する。

use async_trait::async_trait;
use questionnaire_domain::notification::{EmailMessage, MailCredentials, NotificationError};

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(
        &self,
        email: &EmailMessage,
        _credentials: &MailCredentials,
    ) -> Result<(), NotificationError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            attachments = email.attachments.len(),
            "Noop: メール送信をスキップ"
        );
        Ok(())
    }
}
