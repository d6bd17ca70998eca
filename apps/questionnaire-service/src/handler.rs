//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、報告書の生成と送信はユースケース層に委譲

pub mod health;
pub mod submission;

pub use health::health_check;
pub use submission::{SubmissionState, submit_questionnaire};
