//! 연속 출석 계산

use super::chronological;
use super::record::AttendanceRecord;

/// 가장 최근 레코드부터 거꾸로 연속 출석 수를 계산합니다.
///
/// - `PRESENT`/`LATE`: +1, 계속
/// - `EXCUSED`: 증가도 중단도 하지 않음
/// - `ABSENT`/`UNEXCUSED`: 즉시 중단
pub fn compute_streak(records: &[AttendanceRecord]) -> u32 {
    let mut streak = 0;

    for record in chronological(records).into_iter().rev() {
        if record.status.breaks_streak() {
            break;
        }
        if record.status.is_attended() {
            streak += 1;
        }
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    use crate::attendance::AttendanceStatus::{self, *};

    /// 오래된 것 → 최신 순서로 매일 하나씩
    fn records(statuses: &[AttendanceStatus]) -> Vec<AttendanceRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| AttendanceRecord::new(*status, start + Duration::days(i as i64)))
            .collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(compute_streak(&[]), 0);
    }

    #[test]
    fn test_excused_is_transparent() {
        // EXCUSED는 건너뛰고 앞의 PRESENT까지 계속 집계.
        // EXCUSED 자체는 세지 않으므로 3이 맞음 (DESIGN.md "Open questions" 3번 참고)
        assert_eq!(compute_streak(&records(&[Present, Present, Excused, Present])), 3);
        assert_eq!(compute_streak(&records(&[Absent, Present, Excused, Excused, Late])), 2);
    }

    #[test]
    fn test_absent_breaks() {
        assert_eq!(compute_streak(&records(&[Present, Absent, Present])), 1);
        assert_eq!(compute_streak(&records(&[Present, Present, Unexcused])), 0);
    }

    #[test]
    fn test_late_counts() {
        assert_eq!(compute_streak(&records(&[Late, Present, Late])), 3);
    }

    #[test]
    fn test_only_excused() {
        assert_eq!(compute_streak(&records(&[Excused, Excused])), 0);
    }

    #[test]
    fn test_input_order_independent() {
        let mut newest_first = records(&[Present, Absent, Present, Present]);
        newest_first.reverse();
        assert_eq!(compute_streak(&newest_first), 2);
    }
}
