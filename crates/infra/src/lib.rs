//! # 問診票インフラ層
//!
//! 外部システム（SMTP リレー、プロセス環境変数）との接続を担当する。
//!
//! ## 設計方針
//!
//! このクレートはユースケース層が依存するインターフェース（トレイト）と、
//! その具体的な実装を提供する。外部システムの詳細をカプセル化し、
//! ユースケースをインフラの変更から保護する。
//!
//! ## 責務
//!
//! - **メール送信**: [`notification::NotificationSender`] と SMTP / Noop 実装
//! - **メール設定の解決**: [`mail_settings::MailSettingsProvider`] と環境変数実装
//! - **テスト用モック**: `test-utils` feature で [`mock`] を公開
//!
//! ## 依存関係
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ## 使用例
//!
//! ```rust,no_run
//! use questionnaire_domain::notification::{EmailMessage, NotificationError};
//! use questionnaire_infra::{
//!     mail_settings::{EnvMailSettings, MailSettingsProvider},
//!     notification::{NotificationSender, SmtpNotificationSender},
//! };
//!
//! async fn send(email: &EmailMessage) -> Result<(), NotificationError> {
//!     let settings = EnvMailSettings::new().resolve()?;
//!     let sender = SmtpNotificationSender::new("smtp.gmail.com", 465, None);
//!     sender.send_email(email, &settings.credentials).await
//! }
//! ```

pub mod mail_settings;
pub mod notification;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use mail_settings::{EnvMailSettings, MailSettingsProvider};
pub use notification::NotificationSender;
