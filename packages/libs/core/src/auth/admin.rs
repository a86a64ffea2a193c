//! 관리자 세션 토큰
//!
//! 형식: `<unix ms timestamp>.<hex HMAC-SHA256(timestamp)>`
//!
//! 협력자가 쿠키 값으로 저장하며, 이 크레이트는 저장하지 않습니다.

use chrono::{DateTime, Duration, Utc};

use super::mac;
use crate::config::{Secret, SigningConfig};
use crate::error::{Error, Result};

/// 관리자 세션 쿠키 이름
pub const ADMIN_SESSION_COOKIE: &str = "admin_session";

/// 관리자 세션 TTL (ms)
pub const ADMIN_SESSION_TTL_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Malformed,
    IssuedInFuture,
    Expired,
    BadSignature,
}

impl Rejection {
    fn as_str(&self) -> &'static str {
        match self {
            Rejection::Malformed => "malformed",
            Rejection::IssuedInFuture => "issued_in_future",
            Rejection::Expired => "expired",
            Rejection::BadSignature => "bad_signature",
        }
    }
}

/// 관리자 세션 서명기
#[derive(Debug, Clone)]
pub struct AdminSessionSigner {
    secret: Secret,
}

impl AdminSessionSigner {
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    pub fn from_config(config: &SigningConfig) -> Self {
        Self::new(config.admin.clone())
    }

    /// 쿠키 Max-Age
    pub fn max_age() -> Duration {
        Duration::milliseconds(ADMIN_SESSION_TTL_MS)
    }

    /// 새 세션 토큰 생성
    pub fn generate(&self) -> Result<String> {
        self.generate_at(Utc::now())
    }

    pub fn generate_at(&self, now: DateTime<Utc>) -> Result<String> {
        let timestamp = now.timestamp_millis().to_string();
        let signature = mac::sign(&self.secret, timestamp.as_bytes())?;
        tracing::debug!(issued_at = %now, "generated admin session token");
        Ok(format!("{}.{}", timestamp, hex::encode(signature)))
    }

    /// 세션 토큰 검증 (현재 시각 기준)
    pub fn verify(&self, token: &str) -> bool {
        self.verify_at(token, Utc::now())
    }

    /// 세션 토큰 검증
    ///
    /// 형식/나이/서명 검사를 모두 통과해야 true.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> bool {
        match self.check(token, now) {
            Ok(()) => true,
            Err(rejection) => {
                tracing::debug!(reason = rejection.as_str(), "admin session rejected");
                false
            }
        }
    }

    /// `?` 흐름용 검증
    pub fn require_at(&self, token: &str, now: DateTime<Utc>) -> Result<()> {
        if self.verify_at(token, now) {
            Ok(())
        } else {
            Err(Error::InvalidToken)
        }
    }

    fn check(&self, token: &str, now: DateTime<Utc>) -> std::result::Result<(), Rejection> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 2 {
            return Err(Rejection::Malformed);
        }
        let (timestamp, signature) = (parts[0], parts[1]);

        if timestamp.is_empty() || !timestamp.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Rejection::Malformed);
        }
        let issued_ms: i64 = timestamp.parse().map_err(|_| Rejection::Malformed)?;

        let age = now.timestamp_millis() - issued_ms;
        if age < 0 {
            return Err(Rejection::IssuedInFuture);
        }
        if age > ADMIN_SESSION_TTL_MS {
            return Err(Rejection::Expired);
        }

        let expected = mac::sign(&self.secret, timestamp.as_bytes())
            .map(hex::encode)
            .map_err(|_| Rejection::BadSignature)?;
        if !mac::constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
            return Err(Rejection::BadSignature);
        }

        Ok(())
    }
}
