//! 체크인 토큰 발급 및 검증
//!
//! 토큰 형식: `<base64url(claims JSON)>.<base64url(HMAC-SHA256)>` (padding 없음)
//!
//! 서명은 첫 번째 세그먼트의 ASCII 바이트 그대로에 대해 계산됩니다.
//! 검증 실패 사유(형식/서명/알고리즘/만료)는 로그에만 남고 호출자에게는 `None` 하나로 전달됩니다.

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};

use super::claims::CheckInClaims;
use super::mac::{self, PINNED_ALGORITHM};
use crate::config::{Secret, SigningConfig};
use crate::error::{Error, Result};

/// 체크인 토큰 발급기
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    secret: Secret,
}

impl TokenIssuer {
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    pub fn from_config(config: &SigningConfig) -> Self {
        Self::new(config.checkin.clone())
    }

    /// 현재 시각 기준으로 토큰 발급
    pub fn issue(&self, session_id: &str) -> Result<String> {
        self.issue_at(session_id, Utc::now())
    }

    /// 주어진 시각 기준으로 토큰 발급
    pub fn issue_at(&self, session_id: &str, now: DateTime<Utc>) -> Result<String> {
        let claims = CheckInClaims::new(session_id, now);
        let token = self.encode(&claims)?;

        tracing::debug!(
            session_id = %claims.session_id,
            expires_at = %claims.expires_at,
            "issued check-in token"
        );
        Ok(token)
    }

    fn encode(&self, claims: &CheckInClaims) -> Result<String> {
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
        let signature = mac::sign(&self.secret, payload.as_bytes())?;
        Ok(format!(
            "{}.{}",
            payload,
            general_purpose::URL_SAFE_NO_PAD.encode(signature)
        ))
    }
}

/// 내부 거부 사유 (외부로 노출하지 않음)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Malformed,
    BadSignature,
    UnsupportedAlgorithm,
    Expired,
}

impl Rejection {
    fn as_str(&self) -> &'static str {
        match self {
            Rejection::Malformed => "malformed",
            Rejection::BadSignature => "bad_signature",
            Rejection::UnsupportedAlgorithm => "unsupported_algorithm",
            Rejection::Expired => "expired",
        }
    }
}

/// 체크인 토큰 검증기
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    secret: Secret,
}

impl TokenVerifier {
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    pub fn from_config(config: &SigningConfig) -> Self {
        Self::new(config.checkin.clone())
    }

    /// 토큰 검증 (현재 시각 기준)
    pub fn verify(&self, token: &str) -> Option<CheckInClaims> {
        self.verify_at(token, Utc::now())
    }

    /// 토큰 검증
    ///
    /// 유효하면 claims, 아니면 `None`. 실패 사유는 구분되지 않습니다.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Option<CheckInClaims> {
        match self.decode(token, now) {
            Ok(claims) => Some(claims),
            Err(rejection) => {
                tracing::debug!(reason = rejection.as_str(), "check-in token rejected");
                None
            }
        }
    }

    /// `?` 흐름용 검증 (`Error::InvalidToken`)
    pub fn require_at(&self, token: &str, now: DateTime<Utc>) -> Result<CheckInClaims> {
        self.verify_at(token, now).ok_or(Error::InvalidToken)
    }

    fn decode(&self, token: &str, now: DateTime<Utc>) -> std::result::Result<CheckInClaims, Rejection> {
        let (payload, signature) = token.split_once('.').ok_or(Rejection::Malformed)?;
        if payload.is_empty() || signature.is_empty() || signature.contains('.') {
            return Err(Rejection::Malformed);
        }

        // 서명 먼저: 인증되지 않은 페이로드는 파싱하지 않음
        let provided = general_purpose::URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| Rejection::Malformed)?;
        let expected =
            mac::sign(&self.secret, payload.as_bytes()).map_err(|_| Rejection::BadSignature)?;
        if !mac::constant_time_eq(&expected, &provided) {
            return Err(Rejection::BadSignature);
        }

        let bytes = general_purpose::URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| Rejection::Malformed)?;
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|_| Rejection::Malformed)?;
        if let Some(alg) = value.get("alg") {
            if alg.as_str() != Some(PINNED_ALGORITHM) {
                return Err(Rejection::UnsupportedAlgorithm);
            }
            // 발급 형식에는 alg 필드가 없으므로 아래 디코딩에서 거부됨
        }

        let claims: CheckInClaims =
            serde_json::from_value(value).map_err(|_| Rejection::Malformed)?;
        if claims.is_expired_at(now) {
            return Err(Rejection::Expired);
        }

        Ok(claims)
    }
}
