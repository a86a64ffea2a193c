//! 공통 에러 타입
//!
//! 토큰 발급/검증과 설정 로딩에서 사용되는 에러 타입을 정의합니다.
//! 집계 함수는 실패하지 않으므로 여기에 대응하는 variant가 없습니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// att-core 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// 서명 시크릿이 없거나 비어 있음 (치명적, 작업 중단)
    #[error("signing secret not configured: {name}")]
    Configuration { name: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Auth Errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// 토큰 거부 (형식 오류/만료/서명 불일치를 구분하지 않음)
    #[error("invalid token")]
    InvalidToken,

    // ─────────────────────────────────────────────────────────────────────────────
    // Serialization Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP 상태 코드로 변환
    pub fn status_code(&self) -> u16 {
        match self {
            // 401 Unauthorized
            Error::InvalidToken => 401,

            // 500 Internal Server Error
            Error::Configuration { .. } | Error::Json(_) => 500,
        }
    }

    /// 에러 코드 (클라이언트용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::Configuration { .. } => "CONFIGURATION_ERROR",
            Error::InvalidToken => "INVALID_TOKEN",
            Error::Json(_) => "JSON_ERROR",
        }
    }

    /// 설정 오류 여부 (호출자가 요청 처리 대신 중단해야 하는 경우)
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }
}
