//! # 報告書スプレッドシート
//!
//! 問診票 1 件を「ヘッダー行 + データ 1 行」の xlsx ワークブックに変換する。
//!
//! ## 設計方針
//!
//! - **行モデルと書き出しの分離**: [`ReportRow`] が列の選択と文字列連結を担い、
//!   [`SpreadsheetRenderer`] は xlsx への書き出しだけを行う
//! - **メモリ上で完結**: ワークブックはディスクに書かずバイト列で返す
//! - **転記のみ**: 集計スコアは数値セルとしてそのまま書き込む（再計算しない）。
//!   ±2^53 を超える値は f64 で丸められるため、文字列セルで書き込む

use chrono::NaiveDateTime;
use questionnaire_domain::{NotificationError, QuestionnaireRecord};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

/// 記入日時の書式
pub const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// f64 で誤差なく表せる整数の上限（2^53）
const MAX_EXACT_NUMBER: u64 = 1 << 53;

/// 列ヘッダー（出力順）
pub mod header {
    pub const PATIENT_ID: &str = "Patient No.";
    pub const NAME: &str = "Name";
    pub const BIRTH: &str = "Date of Birth";
    pub const FOLLOWUP: &str = "Follow-up Period";
    pub const SUBMITTED_AT: &str = "Submitted At";
    pub const BLOOD_SCORE: &str = "Bleeding Score (PBAC)";
    pub const PAIN_SCORE: &str = "Pain Score (VAS)";
    pub const UDI_TOTAL: &str = "Urinary Score (UDI-6)";
    pub const PADS: &str = "Pads (L/M/H)";
    pub const TAMPONS: &str = "Tampons (L/M/H)";
    pub const CLOTS: &str = "Clots (S/L)/Leakage";
    pub const UDI_ITEMS: &str = "UDI Items (Q1-Q6)";
}

/// セル値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Number(i64),
}

/// 報告書のデータ行
///
/// `(ヘッダー, 値)` の組を列順に保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    cells: Vec<(&'static str, CellValue)>,
}

impl ReportRow {
    /// 問診票と記入日時から行を組み立てる
    pub fn from_record(record: &QuestionnaireRecord, submitted_at: NaiveDateTime) -> Self {
        use CellValue::{Number, Text};

        let cells = vec![
            (header::PATIENT_ID, Text(record.patient_id.clone())),
            (header::NAME, Text(record.name.clone())),
            (header::BIRTH, Text(record.birth.clone())),
            (header::FOLLOWUP, Text(record.followup.clone())),
            (
                header::SUBMITTED_AT,
                Text(submitted_at.format(SUBMITTED_AT_FORMAT).to_string()),
            ),
            (header::BLOOD_SCORE, Number(record.blood_score)),
            (header::PAIN_SCORE, Number(record.pain_val)),
            (header::UDI_TOTAL, Number(record.udi_total)),
            (header::PADS, Text(record.pad_detail())),
            (header::TAMPONS, Text(record.tampon_detail())),
            (header::CLOTS, Text(record.clot_detail())),
            (header::UDI_ITEMS, Text(record.udi_detail())),
        ];

        Self { cells }
    }

    /// 列ヘッダー（出力順）
    pub fn headers(&self) -> Vec<&'static str> {
        self.cells.iter().map(|(header, _)| *header).collect()
    }

    /// ヘッダー名でセル値を引く
    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| *name == header)
            .map(|(_, value)| value)
    }

    pub fn cells(&self) -> &[(&'static str, CellValue)] {
        &self.cells
    }
}

/// xlsx レンダラー
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetRenderer;

impl SpreadsheetRenderer {
    pub fn new() -> Self {
        Self
    }

    /// 行を xlsx ワークブックのバイト列に書き出す
    pub fn render(&self, row: &ReportRow) -> Result<Vec<u8>, NotificationError> {
        write_workbook(row).map_err(|e| NotificationError::SpreadsheetFailed(e.to_string()))
    }
}

fn write_workbook(row: &ReportRow) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    for (col, (header, value)) in row.cells().iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
        match value {
            CellValue::Text(text) => {
                worksheet.write_string(1, col, text)?;
            }
            CellValue::Number(number) if number.unsigned_abs() <= MAX_EXACT_NUMBER => {
                worksheet.write_number(1, col, *number as f64)?;
            }
            // 数値セルでは丸められるため文字列で書く
            CellValue::Number(number) => {
                worksheet.write_string(1, col, number.to_string())?;
            }
        }
    }
    worksheet.autofit();

    workbook.save_to_buffer()
}
