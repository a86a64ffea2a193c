//! 출석 레코드
//!
//! 영속성 계층(협력자)이 제공하는 입력 타입입니다. 이 크레이트에서는 읽기 전용입니다.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::time::local_date;

/// 출석 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// 출석
    Present,

    /// 결석
    Absent,

    /// 무단 결석
    Unexcused,

    /// 지각 (출석으로 집계)
    Late,

    /// 사유 결석 (연속 출석 계산에서 투명)
    Excused,
}

impl AttendanceStatus {
    /// 출석으로 집계되는지 여부 (PRESENT, LATE)
    pub fn is_attended(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }

    /// 연속 출석을 끊는지 여부 (ABSENT, UNEXCUSED)
    pub fn breaks_streak(&self) -> bool {
        matches!(self, AttendanceStatus::Absent | AttendanceStatus::Unexcused)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::Absent => "ABSENT",
            AttendanceStatus::Unexcused => "UNEXCUSED",
            AttendanceStatus::Late => "LATE",
            AttendanceStatus::Excused => "EXCUSED",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// 수업 진도 메타데이터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonMeta {
    /// 수라 이름
    pub surah: String,

    pub ayat_from: u32,

    pub ayat_to: u32,

    /// 수업 완료 여부
    #[serde(default)]
    pub lesson_completed: bool,
}

/// 출석 레코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub status: AttendanceStatus,

    /// 수업 날짜 (로컬 달력 날짜)
    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_meta: Option<LessonMeta>,
}

impl AttendanceRecord {
    /// 새 레코드 생성
    pub fn new(status: AttendanceStatus, date: NaiveDate) -> Self {
        Self {
            status,
            date,
            lesson_meta: None,
        }
    }

    /// 저장된 시각에서 레코드 생성 (오프셋 기준 로컬 날짜)
    pub fn from_instant(
        status: AttendanceStatus,
        instant: DateTime<Utc>,
        offset: &FixedOffset,
    ) -> Self {
        Self::new(status, local_date(instant, offset))
    }

    /// 수업 메타데이터 설정
    pub fn with_lesson(mut self, lesson: LessonMeta) -> Self {
        self.lesson_meta = Some(lesson);
        self
    }

    /// 수업 완료 여부 (메타데이터가 없으면 false)
    pub fn lesson_completed(&self) -> bool {
        self.lesson_meta
            .as_ref()
            .map(|lesson| lesson.lesson_completed)
            .unwrap_or(false)
    }
}
