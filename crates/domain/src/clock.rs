//! # Clock（時刻プロバイダ）
//!
//! 報告書の記入日時と添付ファイル名の日付に使う壁時計時刻を抽象化し、
//! テストで固定時刻を注入可能にする。

use chrono::{Local, NaiveDateTime};

/// 現在時刻（サーバーのローカル壁時計）を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_system_clock_は現在のローカル時刻を返す() {
        let clock = SystemClock;
        let before = Local::now().naive_local();
        let result = clock.now();
        let after = Local::now().naive_local();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn test_fixed_clock_は複数回呼んでも同じ時刻を返す() {
        let fixed_time = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let clock = FixedClock::new(fixed_time);

        assert_eq!(clock.now(), fixed_time);
        assert_eq!(clock.now(), fixed_time);
    }
}
