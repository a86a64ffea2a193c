//! 날짜/시간 유틸리티
//!
//! 집계기에서 사용하는 로컬 날짜 및 주말 경계 계산입니다.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc, Weekday};

/// UTC 시각을 주어진 오프셋의 달력 날짜로 변환
pub fn local_date(instant: DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
    instant.with_timezone(offset).date_naive()
}

/// 날짜가 속한 주말의 토요일
///
/// 일요일은 하루 전 토요일로 묶이고, 평일은 `None`입니다.
pub fn weekend_anchor(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => Some(date),
        Weekday::Sun => date.pred_opt(),
        _ => None,
    }
}

/// 짧은 월/일 라벨 (예: `Jan 6`)
pub fn week_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// 밀리초 미만을 버린 시각 (토큰 직렬화 정밀도)
pub(crate) fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(instant.timestamp_millis()).unwrap_or(instant)
}
