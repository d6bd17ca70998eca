//! # ビジネスイベントログとエラーコンテキストの構造化ヘルパー
//!
//! `jq` で送信履歴を追えるよう、ログフィールドの命名規約とヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`event.category`、`error.kind`）を使用。JSON 出力でフラットなキーになる。
//! 氏名などの個人情報はイベントに含めず、病歴番号と追跡期間のみを出力する。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const QUESTIONNAIRE: &str = "questionnaire";
    }

    /// イベントアクション
    pub mod action {
        pub const REPORT_SENT: &str = "questionnaire.report_sent";
        pub const REPORT_FAILED: &str = "questionnaire.report_failed";
    }

    /// エンティティ種別
    pub mod entity_type {
        pub const QUESTIONNAIRE_REPORT: &str = "questionnaire_report";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// エラーコンテキストフィールドの定数
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// プロセス設定（環境変数）
        pub const CONFIGURATION: &str = "configuration";
        /// 外部サービス呼び出し（SMTP リレー）
        pub const EXTERNAL_SERVICE: &str = "external_service";
        /// 報告書の生成（スプレッドシート、テンプレート）
        pub const RENDERING: &str = "rendering";
    }

    /// エラー種別
    pub mod kind {
        pub const MISSING_VARIABLE: &str = "missing_variable";
        pub const SPREADSHEET: &str = "spreadsheet";
        pub const TEMPLATE: &str = "template";
        pub const SMTP: &str = "smtp";
    }
}
