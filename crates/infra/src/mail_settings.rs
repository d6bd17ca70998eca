//! # メール設定プロバイダ
//!
//! 送信元・宛先・パスワードを送信時に解決する。
//!
//! ## 設計方針
//!
//! - **送信時解決**: 起動時ではなく送信のたびに読み取る。パスワード未設定は
//!   送信を試みた時点で設定不備エラーになる
//! - **デフォルト使用時は警告**: 送信元・宛先が未設定の場合はプレースホルダーの
//!   アドレスで補い、`tracing::warn!` を出す。運用環境では必ず設定すること
//! - **明示的な注入**: ユースケースはグローバルな環境変数を直接読まず、
//!   `MailSettingsProvider` を受け取る
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `EMAIL_USER` | No | 送信元アドレス兼 SMTP ユーザー（デフォルト: [`DEFAULT_SENDER_ADDRESS`]） |
//! | `EMAIL_PASSWORD` | **Yes** | SMTP パスワード（デフォルトなし） |
//! | `EMAIL_RECEIVER` | No | 宛先アドレス（デフォルト: [`DEFAULT_RECIPIENT_ADDRESS`]） |

use questionnaire_domain::notification::{MailCredentials, MailSettings, NotificationError};

pub const EMAIL_USER: &str = "EMAIL_USER";
pub const EMAIL_PASSWORD: &str = "EMAIL_PASSWORD";
pub const EMAIL_RECEIVER: &str = "EMAIL_RECEIVER";

/// 送信元アドレスのデフォルト
pub const DEFAULT_SENDER_ADDRESS: &str = "hifu.staff@example.org";
/// 宛先アドレスのデフォルト
pub const DEFAULT_RECIPIENT_ADDRESS: &str = "hifu.center@example.org";

/// メール設定プロバイダ
pub trait MailSettingsProvider: Send + Sync {
    /// 現時点のメール設定を解決する
    ///
    /// パスワードが解決できない場合は [`NotificationError::Configuration`] を返す。
    fn resolve(&self) -> Result<MailSettings, NotificationError>;
}

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// 環境変数からメール設定を解決する
pub struct EnvMailSettings {
    lookup: Lookup,
}

impl EnvMailSettings {
    /// プロセス環境変数を参照するインスタンスを作成
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数を使うインスタンスを作成
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// 値を読み取る。空白のみの値は未設定として扱う
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.trim().is_empty())
    }

    /// 未設定のためデフォルトアドレスで補われる変数
    pub fn defaulted_variables(&self) -> Vec<&'static str> {
        [EMAIL_USER, EMAIL_RECEIVER]
            .into_iter()
            .filter(|key| self.get(key).is_none())
            .collect()
    }

    fn get_or_default(&self, key: &'static str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| {
            tracing::warn!(
                variable = key,
                address = default,
                "メールアドレスが未設定のためデフォルトを使用します"
            );
            default.to_string()
        })
    }
}

impl Default for EnvMailSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl MailSettingsProvider for EnvMailSettings {
    fn resolve(&self) -> Result<MailSettings, NotificationError> {
        let sender_address = self.get_or_default(EMAIL_USER, DEFAULT_SENDER_ADDRESS);
        let password = self
            .get(EMAIL_PASSWORD)
            .ok_or_else(|| NotificationError::missing_variable(EMAIL_PASSWORD))?;
        let recipient_address = self.get_or_default(EMAIL_RECEIVER, DEFAULT_RECIPIENT_ADDRESS);

        Ok(MailSettings {
            recipient_address,
            credentials: MailCredentials {
                username: sender_address,
                password,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn settings_from(pairs: &[(&str, &str)]) -> EnvMailSettings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvMailSettings::with_lookup(move |key| vars.get(key).cloned())
    }

    #[test]
    fn パスワードのみ設定時は送信元と宛先にデフォルトを使う() {
        let provider = settings_from(&[(EMAIL_PASSWORD, "app-password")]);

        let settings = provider.resolve().unwrap();

        assert_eq!(settings.sender_address(), DEFAULT_SENDER_ADDRESS);
        assert_eq!(settings.recipient_address, DEFAULT_RECIPIENT_ADDRESS);
        assert_eq!(settings.credentials.password, "app-password");
    }

    #[test]
    fn 全変数設定時はその値を使う() {
        let provider = settings_from(&[
            (EMAIL_USER, "sender@example.com"),
            (EMAIL_PASSWORD, "app-password"),
            (EMAIL_RECEIVER, "receiver@example.com"),
        ]);

        let settings = provider.resolve().unwrap();

        assert_eq!(settings.sender_address(), "sender@example.com");
        assert_eq!(settings.credentials.username, "sender@example.com");
        assert_eq!(settings.recipient_address, "receiver@example.com");
    }

    #[test]
    fn 未設定のアドレスはデフォルト補完対象として報告される() {
        let provider = settings_from(&[(EMAIL_USER, "  "), (EMAIL_PASSWORD, "app-password")]);

        assert_eq!(
            provider.defaulted_variables(),
            vec![EMAIL_USER, EMAIL_RECEIVER]
        );
    }

    #[test]
    fn アドレスが設定済みならデフォルト補完対象はない() {
        let provider = settings_from(&[
            (EMAIL_USER, "sender@example.com"),
            (EMAIL_RECEIVER, "receiver@example.com"),
        ]);

        assert!(provider.defaulted_variables().is_empty());
    }

    #[test]
    fn パスワード未設定は設定不備エラーになる() {
        let provider = settings_from(&[(EMAIL_USER, "sender@example.com")]);

        let err = provider.resolve().unwrap_err();

        assert_eq!(err.missing_variable_name(), Some(EMAIL_PASSWORD));
    }

    #[test]
    fn 空白のみのパスワードは未設定として扱う() {
        let provider = settings_from(&[(EMAIL_PASSWORD, "   ")]);

        let err = provider.resolve().unwrap_err();

        assert_eq!(err.missing_variable_name(), Some(EMAIL_PASSWORD));
    }

    #[test]
    fn 解決は呼び出しごとに行われる() {
        use std::sync::{Arc, Mutex};

        let password = Arc::new(Mutex::new(None::<String>));
        let shared = password.clone();
        let provider = EnvMailSettings::with_lookup(move |key| {
            (key == EMAIL_PASSWORD)
                .then(|| shared.lock().unwrap().clone())
                .flatten()
        });

        assert!(provider.resolve().is_err());

        *password.lock().unwrap() = Some("later".to_string());
        assert_eq!(provider.resolve().unwrap().credentials.password, "later");
    }
}
