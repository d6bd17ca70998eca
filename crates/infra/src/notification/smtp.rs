//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! 暗黙 TLS（SMTPS, 465 番ポート）でリレーに接続し、送信元アドレスで認証する。

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Attachment, Mailbox, Message, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use questionnaire_domain::notification::{EmailMessage, MailCredentials, NotificationError};

use super::NotificationSender;

/// SMTP 通知送信
///
/// 送信のたびに `lettre::AsyncSmtpTransport<Tokio1Executor>` を組み立てる。
/// プールは持たず、接続は 1 回の送信の中で確立・切断される。
pub struct SmtpNotificationSender {
    host:    String,
    port:    u16,
    timeout: Option<Duration>,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP リレーのホスト名（例: "smtp.gmail.com"）
    /// - `port`: 暗黙 TLS のポート番号（例: 465）
    /// - `timeout`: 接続タイムアウト（`None` で lettre のデフォルト）
    pub fn new(host: impl Into<String>, port: u16, timeout: Option<Duration>) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    fn build_transport(
        &self,
        credentials: &MailCredentials,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, NotificationError> {
        let builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)
            .map_err(|e| NotificationError::SendFailed(format!("SMTP リレー設定失敗: {e}")))?;

        let mut builder = builder.port(self.port).credentials(Credentials::new(
            credentials.username.clone(),
            credentials.password.clone(),
        ));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(Some(timeout));
        }

        Ok(builder.build())
    }
}

/// `EmailMessage` から MIME メッセージを組み立てる
///
/// 構造: `multipart/mixed[ multipart/alternative[text, html], 添付... ]`
pub(crate) fn build_message(email: &EmailMessage) -> Result<Message, NotificationError> {
    let from: Mailbox = email
        .from
        .parse()
        .map_err(|e| NotificationError::SendFailed(format!("送信元アドレス不正: {e}")))?;
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?;

    let mut body = MultiPart::mixed().multipart(
        MultiPart::alternative()
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_PLAIN)
                    .body(email.text_body.clone()),
            )
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .body(email.html_body.clone()),
            ),
    );

    for attachment in &email.attachments {
        let content_type = ContentType::parse(&attachment.content_type).map_err(|e| {
            NotificationError::SendFailed(format!(
                "添付ファイルの Content-Type 不正 ({}): {e}",
                attachment.content_type
            ))
        })?;
        body = body.singlepart(
            Attachment::new(attachment.filename.clone())
                .body(attachment.content.clone(), content_type),
        );
    }

    Message::builder()
        .from(from)
        .to(to)
        .subject(&email.subject)
        .multipart(body)
        .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(
        &self,
        email: &EmailMessage,
        credentials: &MailCredentials,
    ) -> Result<(), NotificationError> {
        let message = build_message(email)?;
        let transport = self.build_transport(credentials)?;

        tracing::debug!(host = %self.host, port = self.port, "SMTP リレーへ送信");

        transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use questionnaire_domain::notification::{EmailAttachment, XLSX_CONTENT_TYPE};

    use super::*;

    fn make_email() -> EmailMessage {
        EmailMessage {
            from:        "staff@example.org".to_string(),
            to:          "center@example.org".to_string(),
            subject:     "[Questionnaire] Chen — 3M".to_string(),
            html_body:   "<p>Chen</p>".to_string(),
            text_body:   "Chen".to_string(),
            attachments: vec![EmailAttachment {
                filename:     "Chen_3M_20260314.xlsx".to_string(),
                content_type: XLSX_CONTENT_TYPE.to_string(),
                content:      b"PK\x03\x04".to_vec(),
            }],
        }
    }

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SmtpNotificationSender>();
    }

    #[test]
    fn 添付ファイル付きのmultipartメッセージを組み立てる() {
        let message = build_message(&make_email()).unwrap();
        let formatted = String::from_utf8_lossy(&message.formatted()).to_string();

        assert!(formatted.contains("multipart/mixed"));
        assert!(formatted.contains("multipart/alternative"));
        assert!(formatted.contains("Content-Disposition: attachment"));
        assert!(formatted.contains("Chen_3M_20260314.xlsx"));
        assert!(formatted.contains("To: center@example.org"));
    }

    #[test]
    fn 不正な宛先アドレスは送信失敗エラーになる() {
        let mut email = make_email();
        email.to = "not an address".to_string();

        let result = build_message(&email);

        assert!(matches!(result, Err(NotificationError::SendFailed(msg)) if msg.contains("宛先")));
    }

    #[test]
    fn 不正なcontent_typeは送信失敗エラーになる() {
        let mut email = make_email();
        email.attachments[0].content_type = "not a mime type".to_string();

        let result = build_message(&email);

        assert!(matches!(result, Err(NotificationError::SendFailed(_))));
    }
}
