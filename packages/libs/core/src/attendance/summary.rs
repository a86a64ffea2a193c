//! 상태별 출석 집계

use serde::{Deserialize, Serialize};

use super::attendance_rate;
use super::record::{AttendanceRecord, AttendanceStatus};

/// 출석 요약
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub unexcused: usize,
    pub excused: usize,

    /// (present + late) / total, 0..=100
    pub rate: u8,
}

/// 상태별 개수와 전체 출석률
pub fn summarize(records: &[AttendanceRecord]) -> AttendanceSummary {
    let mut summary = records
        .iter()
        .fold(AttendanceSummary::default(), |mut summary, record| {
            summary.total += 1;
            match record.status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Late => summary.late += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Unexcused => summary.unexcused += 1,
                AttendanceStatus::Excused => summary.excused += 1,
            }
            summary
        });
    summary.rate = attendance_rate(summary.present + summary.late, summary.total);
    summary
}

/// 완료된 수업 수
pub fn lessons_completed(records: &[AttendanceRecord]) -> usize {
    records.iter().filter(|record| record.lesson_completed()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::LessonMeta;
    use chrono::NaiveDate;

    fn record(status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord::new(status, NaiveDate::from_ymd_opt(2024, 1, 6).unwrap())
    }

    #[test]
    fn test_summarize() {
        let records = vec![
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Late),
            record(AttendanceStatus::Absent),
            record(AttendanceStatus::Unexcused),
            record(AttendanceStatus::Excused),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.present, 2);
        assert_eq!(summary.late, 1);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.unexcused, 1);
        assert_eq!(summary.excused, 1);
        assert_eq!(summary.rate, 50);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), AttendanceSummary::default());
    }

    #[test]
    fn test_lessons_completed() {
        let lesson = |done| LessonMeta {
            surah: "Al-Fatiha".to_string(),
            ayat_from: 1,
            ayat_to: 7,
            lesson_completed: done,
        };
        let records = vec![
            record(AttendanceStatus::Present).with_lesson(lesson(true)),
            record(AttendanceStatus::Late).with_lesson(lesson(false)),
            record(AttendanceStatus::Absent),
        ];

        assert_eq!(lessons_completed(&records), 1);
    }
}
