//! # テスト用モック
//!
//! ユースケース・ハンドラのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! questionnaire-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use questionnaire_domain::notification::{
    EmailMessage,
    MailCredentials,
    MailSettings,
    NotificationError,
};

use crate::{mail_settings::MailSettingsProvider, notification::NotificationSender};

// ===== MockNotificationSender =====

/// 送信されたメールと認証情報の記録
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub email:       EmailMessage,
    pub credentials: MailCredentials,
}

/// 送信内容を記録するモック送信者
///
/// `failing()` で生成すると、記録せずに常に送信失敗を返す。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent:          Arc<Mutex<Vec<SentEmail>>>,
    attempts:      Arc<Mutex<usize>>,
    failure_error: Option<String>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に送信失敗を返すモックを作成
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// 送信に成功したメール
    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// 成否を問わず `send_email` が呼ばれた回数
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(
        &self,
        email: &EmailMessage,
        credentials: &MailCredentials,
    ) -> Result<(), NotificationError> {
        *self.attempts.lock().unwrap() += 1;

        if let Some(message) = &self.failure_error {
            return Err(NotificationError::SendFailed(message.clone()));
        }

        self.sent.lock().unwrap().push(SentEmail {
            email:       email.clone(),
            credentials: credentials.clone(),
        });
        Ok(())
    }
}

// ===== StaticMailSettings =====

/// 固定値を返すメール設定プロバイダ
#[derive(Debug, Clone)]
pub struct StaticMailSettings {
    sender_address:    String,
    recipient_address: String,
    password:          Option<String>,
}

impl StaticMailSettings {
    pub fn new(
        sender_address: impl Into<String>,
        recipient_address: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            sender_address:    sender_address.into(),
            recipient_address: recipient_address.into(),
            password:          Some(password.into()),
        }
    }

    /// パスワード未設定のプロバイダを作成
    pub fn without_password(
        sender_address: impl Into<String>,
        recipient_address: impl Into<String>,
    ) -> Self {
        Self {
            sender_address:    sender_address.into(),
            recipient_address: recipient_address.into(),
            password:          None,
        }
    }
}

impl MailSettingsProvider for StaticMailSettings {
    fn resolve(&self) -> Result<MailSettings, NotificationError> {
        let password = self
            .password
            .clone()
            .ok_or_else(|| NotificationError::missing_variable(crate::mail_settings::EMAIL_PASSWORD))?;

        Ok(MailSettings {
            recipient_address: self.recipient_address.clone(),
            credentials:       MailCredentials {
                username: self.sender_address.clone(),
                password,
            },
        })
    }
}
