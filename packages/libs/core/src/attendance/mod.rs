//! 출석 집계
//!
//! 출석 레코드 시퀀스에서 연속 출석, 주말 추이, 세션 기록을 계산하는 순수 함수들입니다.
//!
//! # 모듈 구조
//!
//! - `record`: 입력 레코드 타입
//! - `streak`: 연속 출석 계산
//! - `trend`: 주말 단위 출석률 추이
//! - `history`: 세션 기록 (최신순)
//! - `summary`: 상태별 집계
//!
//! 입력 순서는 가정하지 않습니다. 각 함수는 날짜 기준으로 (안정) 정렬된 뷰에서 계산합니다.

mod history;
mod record;
mod streak;
mod summary;
mod trend;

pub use history::{session_history, SessionHistoryEntry};
pub use record::{AttendanceRecord, AttendanceStatus, LessonMeta};
pub use streak::compute_streak;
pub use summary::{lessons_completed, summarize, AttendanceSummary};
pub use trend::{group_by_weekend, WeekendTrendPoint};

/// 날짜 오름차순 뷰 (같은 날짜는 입력 순서 유지)
fn chronological(records: &[AttendanceRecord]) -> Vec<&AttendanceRecord> {
    let mut sorted: Vec<&AttendanceRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.date);
    sorted
}

/// 출석률 (0..=100, 반올림). total이 0이면 0.
pub fn attendance_rate(attended: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // round(attended / total * 100), 0.5는 올림
    ((attended * 200 + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_attendance_rate() {
        assert_eq!(attendance_rate(0, 0), 0);
        assert_eq!(attendance_rate(3, 4), 75);
        assert_eq!(attendance_rate(1, 3), 33);
        assert_eq!(attendance_rate(2, 3), 67);
        assert_eq!(attendance_rate(1, 8), 13);
        assert_eq!(attendance_rate(5, 5), 100);
    }

    #[test]
    fn test_chronological_is_stable() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let earlier = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = vec![
            AttendanceRecord::new(AttendanceStatus::Present, day),
            AttendanceRecord::new(AttendanceStatus::Absent, day),
            AttendanceRecord::new(AttendanceStatus::Late, earlier),
        ];

        let sorted = chronological(&records);
        let statuses: Vec<_> = sorted.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                AttendanceStatus::Late,
                AttendanceStatus::Present,
                AttendanceStatus::Absent
            ]
        );
    }
}
