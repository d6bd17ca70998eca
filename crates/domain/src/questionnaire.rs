//! # 問診票
//!
//! 治療後フォローアップで患者が回答する問診票を表現する。
//!
//! ## ドメイン用語
//!
//! | フィールド | ドメイン用語 | 説明 |
//! |---|---|---|
//! | `pl` / `pm` / `ph` | 生理用ナプキン（軽/中/重） | PBAC の吸収用品カテゴリ 1 |
//! | `tl` / `tm` / `th` | タンポン（軽/中/重） | PBAC の吸収用品カテゴリ 2 |
//! | `cs` / `cl` | 血塊（小/大） | PBAC の血塊カウント |
//! | `ac` | 漏れ | PBAC の漏れ回数 |
//! | `blood_score` | PBAC スコア | クライアント集計済み |
//! | `pain_val` | VAS スコア | 疼痛の単一スケール値 |
//! | `udi_0` 〜 `udi_5` | UDI-6 設問 Q1〜Q6 | 各設問スコア |
//! | `udi_total` | UDI-6 合計 | クライアント集計済み |
//!
//! ## 信頼境界
//!
//! 集計スコア（`blood_score` / `pain_val` / `udi_total`）はサーバー側で再計算・範囲検証しない。
//! 受け取った値をそのまま報告書に転記する。

use serde::{Deserialize, Serialize};

/// 問診票レコード
///
/// JSON のフィールド名がそのままワイヤ契約になる。
/// 識別情報 4 項目は必須、それ以外の数値は省略時 0、フラグは省略時 `false`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireRecord {
    // --- 基本情報 ---
    /// 病歴番号
    pub patient_id: String,
    /// 氏名
    pub name:       String,
    /// 生年月日（クライアント入力の文字列をそのまま保持）
    pub birth:      String,
    /// 追跡期間ラベル（例: "3M"）
    pub followup:   String,

    // --- 経血 PBAC ---
    #[serde(default)]
    pub no_blood:    bool,
    #[serde(default)]
    pub pl:          i64,
    #[serde(default)]
    pub pm:          i64,
    #[serde(default)]
    pub ph:          i64,
    #[serde(default)]
    pub tl:          i64,
    #[serde(default)]
    pub tm:          i64,
    #[serde(default)]
    pub th:          i64,
    #[serde(default)]
    pub cs:          i64,
    #[serde(default)]
    pub cl:          i64,
    #[serde(default)]
    pub ac:          i64,
    #[serde(default)]
    pub blood_score: i64,

    // --- 疼痛 VAS ---
    #[serde(default)]
    pub no_pain:  bool,
    #[serde(default)]
    pub pain_val: i64,

    // --- 頻尿 UDI-6 ---
    #[serde(default)]
    pub no_udi:    bool,
    #[serde(default)]
    pub udi_0:     i64,
    #[serde(default)]
    pub udi_1:     i64,
    #[serde(default)]
    pub udi_2:     i64,
    #[serde(default)]
    pub udi_3:     i64,
    #[serde(default)]
    pub udi_4:     i64,
    #[serde(default)]
    pub udi_5:     i64,
    #[serde(default)]
    pub udi_total: i64,
}

impl QuestionnaireRecord {
    /// 生理用ナプキン明細（`"{pl}/{pm}/{ph}"`）
    pub fn pad_detail(&self) -> String {
        format!("{}/{}/{}", self.pl, self.pm, self.ph)
    }

    /// タンポン明細（`"{tl}/{tm}/{th}"`）
    pub fn tampon_detail(&self) -> String {
        format!("{}/{}/{}", self.tl, self.tm, self.th)
    }

    /// 血塊（小/大）と漏れの明細（`"{cs}/{cl}/{ac}"`）
    pub fn clot_detail(&self) -> String {
        format!("{}/{}/{}", self.cs, self.cl, self.ac)
    }

    /// UDI-6 設問別明細（Q1〜Q6 をカンマ区切り）
    pub fn udi_detail(&self) -> String {
        self.udi_items()
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// UDI-6 の設問スコアを Q1 から順に返す
    pub fn udi_items(&self) -> [i64; 6] {
        [
            self.udi_0, self.udi_1, self.udi_2, self.udi_3, self.udi_4, self.udi_5,
        ]
    }
}
