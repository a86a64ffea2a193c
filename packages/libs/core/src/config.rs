//! 서명 설정
//!
//! 체크인 토큰과 관리자 세션 토큰의 서명 시크릿을 관리합니다.
//! 시크릿은 생성 시점에 한 번 검증되며, 이후 검증 로직은 전역 환경을 읽지 않습니다.

use std::env;
use std::fmt;
use std::sync::Arc;

use rand::RngCore;

use crate::error::{Error, Result};

/// 체크인 토큰 시크릿 환경변수
pub const CHECKIN_SECRET_ENV: &str = "ATT_CHECKIN_SECRET";

/// 관리자 세션 시크릿 환경변수 (없으면 체크인 시크릿 사용)
pub const ADMIN_SECRET_ENV: &str = "ATT_ADMIN_SECRET";

/// 서명 시크릿
///
/// 값은 `Debug` 출력에 노출되지 않습니다.
#[derive(Clone)]
pub struct Secret {
    name: Arc<str>,
    value: Arc<[u8]>,
}

impl Secret {
    /// 설정값에서 시크릿 생성
    ///
    /// 공백뿐인 값은 `Error::Configuration`. 키 바이트는 입력 그대로 사용합니다.
    pub fn new(name: &str, value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(Error::Configuration {
                name: name.to_string(),
            });
        }

        Ok(Self {
            name: Arc::from(name),
            value: Arc::from(value.as_bytes()),
        })
    }

    /// 설정 키 이름
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn expose(&self) -> &[u8] {
        &self.value
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// 서명 설정 (체크인 + 관리자 세션)
#[derive(Debug, Clone)]
pub struct SigningConfig {
    /// 체크인 토큰 시크릿
    pub checkin: Secret,

    /// 관리자 세션 시크릿
    pub admin: Secret,
}

impl SigningConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 임의의 조회 함수로 설정 로드
    ///
    /// 관리자 시크릿이 없으면 체크인 시크릿을 함께 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let checkin_value = lookup(CHECKIN_SECRET_ENV).ok_or_else(|| Error::Configuration {
            name: CHECKIN_SECRET_ENV.to_string(),
        })?;
        let checkin = Secret::new(CHECKIN_SECRET_ENV, &checkin_value)?;

        let admin = match lookup(ADMIN_SECRET_ENV) {
            Some(value) => Secret::new(ADMIN_SECRET_ENV, &value)?,
            None => checkin.clone(),
        };

        Ok(Self { checkin, admin })
    }
}

/// 새 시크릿 생성 (32바이트 랜덤, hex 인코딩)
pub fn generate_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
