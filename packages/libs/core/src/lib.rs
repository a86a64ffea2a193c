//! att-core: 출석 체크인 보안 및 집계 핵심 라이브러리
//!
//! 웹 앱(페이지, 쿠키, DB)은 협력자로 취급하며, 이 크레이트는 일반 값만 주고받습니다.
//!
//! # 모듈 구조
//!
//! - `auth`: 체크인 토큰 발급/검증, 관리자 세션 토큰
//! - `attendance`: 연속 출석, 주말 추이, 세션 기록 집계
//! - `config`: 서명 시크릿 설정
//! - `time`: 로컬 날짜 및 주말 경계 계산
//! - `error`: 공통 에러 타입

pub mod attendance;
pub mod auth;
pub mod config;
pub mod error;
pub mod time;

pub use error::{Error, Result};
