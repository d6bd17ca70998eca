//! # 報告ユースケース
//!
//! 問診票 1 件を xlsx 添付付きの報告メールに変換し、医療スタッフへ送信する。
//!
//! ## モジュール構成
//!
//! - [`spreadsheet`] - 問診票 → 1 行の xlsx ワークブック
//! - [`template_renderer`] - tera テンプレートによる件名・本文生成
//! - [`service`] - 設定解決 + 生成 + 送信の統合サービス

pub mod service;
pub mod spreadsheet;
pub mod template_renderer;

pub use service::{ReportReceipt, ReportService, attachment_filename};
pub use spreadsheet::{ReportRow, SpreadsheetRenderer};
pub use template_renderer::TemplateRenderer;
