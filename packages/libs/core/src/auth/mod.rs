//! 인증 관련 타입 및 로직
//!
//! # 개요
//!
//! 두 종류의 서명 토큰을 다룹니다:
//!
//! - **Check-in Token**: 수업 세션 출석 체크용 (QR 코드, TTL 60초)
//! - **Admin Session Token**: 관리자 페이지 접근용 쿠키 값 (TTL 24시간)
//!
//! 두 토큰 모두 HMAC-SHA256 하나로 고정되어 있으며, 서명 비교는 상수 시간으로 수행됩니다.

mod admin;
mod checkin;
mod claims;
mod mac;

pub use admin::{AdminSessionSigner, ADMIN_SESSION_COOKIE, ADMIN_SESSION_TTL_MS};
pub use checkin::{TokenIssuer, TokenVerifier};
pub use claims::{CheckInClaims, CHECKIN_TOKEN_TTL_SECS};
pub use mac::PINNED_ALGORITHM;
