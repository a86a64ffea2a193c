//! 체크인 토큰 Claims
//!
//! QR 코드로 표시되는 체크인 토큰의 페이로드 구조입니다.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::time::truncate_to_millis;

/// 체크인 토큰 TTL (초)
pub const CHECKIN_TOKEN_TTL_SECS: i64 = 60;

/// 체크인 토큰 Claims
///
/// 정확히 세 필드만 허용됩니다. 알 수 없는 필드(`alg` 포함)가 있으면 디코딩이 실패합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CheckInClaims {
    /// 수업 세션 ID
    pub session_id: String,

    /// 발급 시각 (unix ms)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub issued_at: DateTime<Utc>,

    /// 만료 시각 (unix ms)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

impl CheckInClaims {
    /// 새 claims 생성
    pub fn new(session_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        let issued_at = truncate_to_millis(now);
        Self {
            session_id: session_id.into(),
            issued_at,
            expires_at: issued_at + Duration::seconds(CHECKIN_TOKEN_TTL_SECS),
        }
    }

    /// 만료 여부 확인
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// 남은 시간 (초), 화면 카운트다운 전용
    pub fn time_remaining(&self) -> i64 {
        self.time_remaining_at(Utc::now())
    }

    pub fn time_remaining_at(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}
