//! # 問診票サービス サーバー
//!
//! 問診票フォームの配信と、送信された問診票の報告メール送信を行う。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `APP_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `APP_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `STATIC_DIR` | No | フォーム UI のディレクトリ（デフォルト: `static`） |
//! | `NOTIFICATION_BACKEND` | No | `smtp` または `noop`（デフォルト: `smtp`） |
//! | `SMTP_HOST` | No | SMTP リレー（デフォルト: `smtp.gmail.com`） |
//! | `SMTP_PORT` | No | 暗黙 TLS のポート（デフォルト: `465`） |
//! | `SMTP_TIMEOUT_SECS` | No | SMTP 接続タイムアウト（秒） |
//! | `EMAIL_USER` | No | 送信元アドレス兼ログインユーザー |
//! | `EMAIL_PASSWORD` | **送信時** | SMTP パスワード。未設定だと送信は 500 になる |
//! | `EMAIL_RECEIVER` | No | 宛先アドレス |
//!
//! `EMAIL_*` は送信のたびに読み直すため、起動時に未設定でもサーバーは起動する。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（送信せずログ出力のみ）
//! NOTIFICATION_BACKEND=noop cargo run -p questionnaire-service
//!
//! # 本番環境
//! EMAIL_PASSWORD=... cargo run -p questionnaire-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use questionnaire_domain::clock::SystemClock;
use questionnaire_infra::{
    EnvMailSettings,
    NotificationSender,
    notification::{NoopNotificationSender, SmtpNotificationSender},
};
use questionnaire_service::{
    app_builder::build_app,
    config::{NotificationBackend, ServiceConfig},
    handler::SubmissionState,
    usecase::{ReportService, report::TemplateRenderer},
};
use questionnaire_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// 問診票サービスのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("questionnaire-service");
    questionnaire_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "questionnaire-service").entered();

    let config = ServiceConfig::from_env()?;

    tracing::info!(
        "問診票サービスを起動します: {}:{}",
        config.host,
        config.port
    );

    let sender: Arc<dyn NotificationSender> = match config.notification.backend {
        NotificationBackend::Smtp => {
            tracing::info!(
                host = %config.notification.smtp_host,
                port = config.notification.smtp_port,
                "SMTP リレー経由で送信します"
            );
            Arc::new(SmtpNotificationSender::new(
                config.notification.smtp_host.clone(),
                config.notification.smtp_port,
                config.notification.smtp_timeout,
            ))
        }
        NotificationBackend::Noop => {
            tracing::warn!("NOTIFICATION_BACKEND=noop: メールは送信されません");
            Arc::new(NoopNotificationSender)
        }
    };

    let mail_settings = EnvMailSettings::new();
    for variable in mail_settings.defaulted_variables() {
        tracing::warn!(variable, "未設定のためデフォルトのメールアドレスで送信します");
    }

    let service = ReportService::new(
        sender,
        Arc::new(mail_settings),
        Arc::new(SystemClock),
        TemplateRenderer::new()?,
    );
    let state = Arc::new(SubmissionState { service });

    let app = build_app(state, &config.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("問診票サービスが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
