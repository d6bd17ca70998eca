//! # 問診票ドメイン層
//!
//! 治療後フォローアップ問診票（経血 PBAC・疼痛 VAS・頻尿 UDI-6）と、
//! その報告メールに関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **永続化なし**: 問診票はリクエストごとに生成され、送信完了後に破棄される
//! - **信頼境界**: 集計済みスコアはクライアントが計算した値をそのまま扱う
//! - **インフラ非依存**: SMTP や環境変数には一切依存しない
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//!              ↘      ↑
//!               shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`questionnaire`] - 問診票レコードと明細文字列の組み立て
//! - [`notification`] - 報告メール・添付ファイル・送信エラー
//! - [`clock`] - 現在時刻プロバイダ
//!
//! ## 使用例
//!
//! ```rust
//! use questionnaire_domain::questionnaire::QuestionnaireRecord;
//!
//! let record: QuestionnaireRecord = serde_json::from_str(
//!     r#"{"patient_id":"A123","name":"Chen","birth":"1980-01-01","followup":"3M","pl":1}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(record.pad_detail(), "1/0/0");
//! assert_eq!(record.blood_score, 0);
//! ```

pub mod clock;
pub mod notification;
pub mod questionnaire;

pub use notification::NotificationError;
pub use questionnaire::QuestionnaireRecord;
