//! 세션 기록 (최신순)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::chronological;
use super::record::{AttendanceRecord, AttendanceStatus};

/// 세션 기록 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionHistoryEntry {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub lesson_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surah: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ayat_from: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ayat_to: Option<u32>,
}

impl From<&AttendanceRecord> for SessionHistoryEntry {
    fn from(record: &AttendanceRecord) -> Self {
        let lesson = record.lesson_meta.as_ref();
        Self {
            date: record.date,
            status: record.status,
            lesson_completed: record.lesson_completed(),
            surah: lesson.map(|l| l.surah.clone()),
            ayat_from: lesson.map(|l| l.ayat_from),
            ayat_to: lesson.map(|l| l.ayat_to),
        }
    }
}

impl SessionHistoryEntry {
    /// 아야트 범위 표시 (예: `Al-Mulk 1-10`)
    pub fn lesson_range(&self) -> Option<String> {
        let surah = self.surah.as_deref()?;
        match (self.ayat_from, self.ayat_to) {
            (Some(from), Some(to)) if from == to => Some(format!("{} {}", surah, from)),
            (Some(from), Some(to)) => Some(format!("{} {}-{}", surah, from, to)),
            _ => Some(surah.to_string()),
        }
    }
}

/// 최신순 세션 기록 (집계 없음)
pub fn session_history(records: &[AttendanceRecord]) -> Vec<SessionHistoryEntry> {
    chronological(records)
        .into_iter()
        .rev()
        .map(SessionHistoryEntry::from)
        .collect()
}
