//! # 報告サービス
//!
//! 設定解決 → スプレッドシート生成 → メール組み立て → 送信 を 1 本の流れで実行する。
//!
//! ## 設計方針
//!
//! - **全か無か**: どのステップで失敗しても以降は実行せず、単一の
//!   [`NotificationError`] を返す。成功時のみメールがちょうど 1 通送られる
//! - **設定は最初に解決**: パスワード未設定はネットワーク接続より前に検出する
//! - **依存性注入**: `NotificationSender`、`MailSettingsProvider`、`Clock` は trait で抽象化
//! - **時刻は 1 回だけ読む**: 記入日時と添付ファイル名の日付は同じ時刻から作る

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use questionnaire_domain::{
    NotificationError,
    QuestionnaireRecord,
    clock::Clock,
    notification::{EmailAttachment, EmailMessage, XLSX_CONTENT_TYPE},
};
use questionnaire_infra::{MailSettingsProvider, NotificationSender};
use questionnaire_shared::{
    event_log::{error as log_error, event},
    log_business_event,
};

use super::{
    spreadsheet::{ReportRow, SpreadsheetRenderer},
    template_renderer::TemplateRenderer,
};

/// 送信結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportReceipt {
    /// 件名
    pub subject:             String,
    /// 添付ファイル名
    pub attachment_filename: String,
    /// 宛先
    pub recipient:           String,
}

/// 添付ファイル名を生成する（`{name}_{followup}_{YYYYMMDD}.xlsx`）
pub fn attachment_filename(record: &QuestionnaireRecord, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}.xlsx",
        record.name,
        record.followup,
        date.format("%Y%m%d")
    )
}

/// 問診票報告サービス
pub struct ReportService {
    sender:            Arc<dyn NotificationSender>,
    mail_settings:     Arc<dyn MailSettingsProvider>,
    clock:             Arc<dyn Clock>,
    spreadsheet:       SpreadsheetRenderer,
    template_renderer: TemplateRenderer,
}

impl ReportService {
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        mail_settings: Arc<dyn MailSettingsProvider>,
        clock: Arc<dyn Clock>,
        template_renderer: TemplateRenderer,
    ) -> Self {
        Self {
            sender,
            mail_settings,
            clock,
            spreadsheet: SpreadsheetRenderer::new(),
            template_renderer,
        }
    }

    /// 問診票の報告メールを送信する
    ///
    /// 成功・失敗どちらもビジネスイベントとしてログに残す。
    #[tracing::instrument(
        skip_all,
        fields(patient_id = %record.patient_id, followup = %record.followup)
    )]
    pub async fn send_report(
        &self,
        record: &QuestionnaireRecord,
    ) -> Result<ReportReceipt, NotificationError> {
        match self.deliver(record).await {
            Ok(receipt) => {
                log_business_event!(
                    event.category = event::category::QUESTIONNAIRE,
                    event.action = event::action::REPORT_SENT,
                    event.entity_type = event::entity_type::QUESTIONNAIRE_REPORT,
                    event.result = event::result::SUCCESS,
                    report.attachment = %receipt.attachment_filename,
                    report.recipient = %receipt.recipient,
                    "問診票報告メール送信成功"
                );
                Ok(receipt)
            }
            Err(e) => {
                let (category, kind) = error_context(&e);
                log_business_event!(
                    event.category = event::category::QUESTIONNAIRE,
                    event.action = event::action::REPORT_FAILED,
                    event.entity_type = event::entity_type::QUESTIONNAIRE_REPORT,
                    event.result = event::result::FAILURE,
                    error.category = category,
                    error.kind = kind,
                    error = %e,
                    "問診票報告メール送信失敗"
                );
                Err(e)
            }
        }
    }

    async fn deliver(
        &self,
        record: &QuestionnaireRecord,
    ) -> Result<ReportReceipt, NotificationError> {
        let settings = self.mail_settings.resolve()?;
        let now: NaiveDateTime = self.clock.now();

        let workbook = self
            .spreadsheet
            .render(&ReportRow::from_record(record, now))?;
        let rendered = self.template_renderer.render(record, now)?;
        let filename = attachment_filename(record, now.date());

        let email = EmailMessage {
            from:        settings.sender_address().to_string(),
            to:          settings.recipient_address.clone(),
            subject:     rendered.subject,
            html_body:   rendered.html_body,
            text_body:   rendered.text_body,
            attachments: vec![EmailAttachment {
                filename:     filename.clone(),
                content_type: XLSX_CONTENT_TYPE.to_string(),
                content:      workbook,
            }],
        };

        self.sender
            .send_email(&email, &settings.credentials)
            .await?;

        Ok(ReportReceipt {
            subject:             email.subject,
            attachment_filename: filename,
            recipient:           email.to,
        })
    }
}

/// エラーをログ用の (category, kind) に分類する
fn error_context(error: &NotificationError) -> (&'static str, &'static str) {
    match error {
        NotificationError::Configuration { .. } => (
            log_error::category::CONFIGURATION,
            log_error::kind::MISSING_VARIABLE,
        ),
        NotificationError::SpreadsheetFailed(_) => (
            log_error::category::RENDERING,
            log_error::kind::SPREADSHEET,
        ),
        NotificationError::TemplateFailed(_) => {
            (log_error::category::RENDERING, log_error::kind::TEMPLATE)
        }
        NotificationError::SendFailed(_) => (
            log_error::category::EXTERNAL_SERVICE,
            log_error::kind::SMTP,
        ),
    }
}
