//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで報告メールの件名・本文（HTML / plaintext）を生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **HTML エスケープ**: `.html` テンプレートは tera の autoescape 対象。
//!   氏名などクライアント入力の文字列はエスケープされて本文に入る
//! - **件名パターン**: `[Questionnaire] {name} — {followup}`

use chrono::NaiveDateTime;
use questionnaire_domain::{NotificationError, QuestionnaireRecord};
use tera::{Context, Tera};

use super::spreadsheet::SUBMITTED_AT_FORMAT;

const HTML_TEMPLATE: &str = "report.html";
const TEXT_TEMPLATE: &str = "report.txt";

/// レンダリング結果
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub subject:   String,
    pub html_body: String,
    pub text_body: String,
}

/// テンプレートレンダラー
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    HTML_TEMPLATE,
                    include_str!("../../../templates/report/report.html"),
                ),
                (
                    TEXT_TEMPLATE,
                    include_str!("../../../templates/report/report.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 件名を生成する
    pub fn subject(record: &QuestionnaireRecord) -> String {
        format!("[Questionnaire] {} — {}", record.name, record.followup)
    }

    /// 問診票から件名と本文を生成する
    pub fn render(
        &self,
        record: &QuestionnaireRecord,
        submitted_at: NaiveDateTime,
    ) -> Result<RenderedReport, NotificationError> {
        let mut context = Context::new();
        context.insert("name", &record.name);
        context.insert("patient_id", &record.patient_id);
        context.insert("followup", &record.followup);
        context.insert("blood_score", &record.blood_score);
        context.insert("pain_val", &record.pain_val);
        context.insert("udi_total", &record.udi_total);
        context.insert(
            "submitted_at",
            &submitted_at.format(SUBMITTED_AT_FORMAT).to_string(),
        );

        let html_body = self
            .engine
            .render(HTML_TEMPLATE, &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(TEXT_TEMPLATE, &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(RenderedReport {
            subject: Self::subject(record),
            html_body,
            text_body,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_record(name: &str) -> QuestionnaireRecord {
        serde_json::from_value(serde_json::json!({
            "patient_id": "A123",
            "name": name,
            "birth": "1980-01-01",
            "followup": "3M",
            "blood_score": 5,
            "pain_val": 2,
            "udi_total": 1,
        }))
        .unwrap()
    }

    fn make_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    #[test]
    fn newが正常に初期化される() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn 件名は氏名と追跡期間から生成される() {
        let renderer = TemplateRenderer::new().unwrap();

        let report = renderer.render(&make_record("Chen"), make_time()).unwrap();

        assert_eq!(report.subject, "[Questionnaire] Chen — 3M");
    }

    #[test]
    fn html本文に識別情報と集計スコアが含まれる() {
        let renderer = TemplateRenderer::new().unwrap();

        let report = renderer.render(&make_record("Chen"), make_time()).unwrap();

        assert!(report.html_body.contains("Chen"));
        assert!(report.html_body.contains("A123"));
        assert!(report.html_body.contains("3M"));
        assert!(report.html_body.contains("5 pts"));
        assert!(report.html_body.contains("2 pts"));
        assert!(report.html_body.contains("1 pts"));
        assert!(report.html_body.contains("2026-03-14 09:05:07"));
    }

    #[test]
    fn テキスト本文にも同じ内容が含まれる() {
        let renderer = TemplateRenderer::new().unwrap();

        let report = renderer.render(&make_record("Chen"), make_time()).unwrap();

        assert!(report.text_body.contains("Chen"));
        assert!(report.text_body.contains("A123"));
        assert!(report.text_body.contains("5 pts"));
    }

    #[test]
    fn html本文では氏名がエスケープされる() {
        let renderer = TemplateRenderer::new().unwrap();

        let report = renderer
            .render(&make_record("<script>alert(1)</script>"), make_time())
            .unwrap();

        assert!(!report.html_body.contains("<script>"));
        assert!(report.html_body.contains("&lt;script&gt;"));
    }
}
