//! # 問診票サービス 設定
//!
//! 環境変数からサーバーの設定を読み込む。
//!
//! 送信元・宛先・パスワードはここでは読まない。送信のたびに
//! [`EnvMailSettings`](questionnaire_infra::EnvMailSettings) が解決する。

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} の値が不正です: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// 問診票サービスの設定
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// フォーム UI の静的ファイルディレクトリ
    pub static_dir:   PathBuf,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationBackend {
    /// SMTP リレー経由で送信
    Smtp,
    /// 送信しない（ログ出力のみ）
    Noop,
}

impl FromStr for NotificationBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smtp" => Ok(Self::Smtp),
            "noop" => Ok(Self::Noop),
            _ => Err(()),
        }
    }
}

/// 通知機能の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `smtp`: 暗黙 TLS の SMTP リレー経由で送信（デフォルト）
/// - `noop`: 送信しない（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub backend:      NotificationBackend,
    /// SMTP リレーのホスト
    pub smtp_host:    String,
    /// SMTP リレーのポート（暗黙 TLS）
    pub smtp_port:    u16,
    /// 接続タイムアウト（未設定で lettre のデフォルト）
    pub smtp_timeout: Option<Duration>,
}

impl ServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host:         lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port:         parse_or(&lookup, "APP_PORT", 8000)?,
            static_dir:   lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            notification: NotificationConfig::from_lookup(&lookup)?,
        })
    }
}

impl NotificationConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            backend:      parse_or(lookup, "NOTIFICATION_BACKEND", NotificationBackend::Smtp)?,
            smtp_host:    lookup("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
            smtp_port:    parse_or(lookup, "SMTP_PORT", 465)?,
            smtp_timeout: lookup("SMTP_TIMEOUT_SECS")
                .map(|value| parse_value("SMTP_TIMEOUT_SECS", &value))
                .transpose()?
                .map(Duration::from_secs),
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => parse_value(name, &value),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        ServiceConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn 未設定時はデフォルト値を使う() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.notification.backend, NotificationBackend::Smtp);
        assert_eq!(config.notification.smtp_host, "smtp.gmail.com");
        assert_eq!(config.notification.smtp_port, 465);
        assert_eq!(config.notification.smtp_timeout, None);
    }

    #[test]
    fn 設定値を読み込む() {
        let config = load(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "18000"),
            ("STATIC_DIR", "/srv/form"),
            ("NOTIFICATION_BACKEND", "noop"),
            ("SMTP_HOST", "relay.example.org"),
            ("SMTP_PORT", "2465"),
            ("SMTP_TIMEOUT_SECS", "30"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 18000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/form"));
        assert_eq!(config.notification.backend, NotificationBackend::Noop);
        assert_eq!(config.notification.smtp_host, "relay.example.org");
        assert_eq!(config.notification.smtp_port, 2465);
        assert_eq!(
            config.notification.smtp_timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn 不正なポート番号はエラーになる() {
        let err = load(&[("APP_PORT", "eighty")]).unwrap_err();

        assert!(err.to_string().contains("APP_PORT"));
    }

    #[test]
    fn 未知のバックエンドはエラーになる() {
        let err = load(&[("NOTIFICATION_BACKEND", "ses")]).unwrap_err();

        assert!(err.to_string().contains("NOTIFICATION_BACKEND"));
    }
}
