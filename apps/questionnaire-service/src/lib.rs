//! # 問診票サービス ライブラリ
//!
//! 患者が記入した術後問診票を受け取り、xlsx 報告書を添付した HTML メールを
//! 医療スタッフのメールボックスへ SMTP リレー経由で送信する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーターとミドルウェアの組み立て
//! - `config`: 環境変数からのサーバー設定
//! - `error`: 送信エラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `usecase`: 報告書の生成と送信

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
