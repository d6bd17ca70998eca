//! # ユースケース層
//!
//! HTTP ハンドラから呼ばれるアプリケーションロジックを定義する。
//!
//! ## モジュール構成
//!
//! - [`report`] - 問診票から報告メールを生成して送信する

pub mod report;

pub use report::{ReportReceipt, ReportService};
