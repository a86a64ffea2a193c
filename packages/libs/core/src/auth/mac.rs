//! HMAC-SHA256 서명 및 상수 시간 비교

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::Secret;
use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// 고정 서명 알고리즘 식별자
pub const PINNED_ALGORITHM: &str = "HS256";

/// 페이로드 바이트에 대한 HMAC-SHA256 서명
pub(crate) fn sign(secret: &Secret, payload: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret.expose()).map_err(|_| Error::Configuration {
        name: secret.name().to_string(),
    })?;
    mac.update(payload);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// 상수 시간 비교
///
/// 길이가 다르면 즉시 false (길이는 공개 정보).
pub(crate) fn constant_time_eq(expected: &[u8], provided: &[u8]) -> bool {
    if expected.len() != provided.len() {
        return false;
    }
    expected.ct_eq(provided).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_known_vector() {
        // RFC 4231 test case 2
        let secret = Secret::new("TEST", "Jefe").unwrap();
        let sig = sign(&secret, b"what do ya want for nothing?").unwrap();
        assert_eq!(
            hex::encode(sig),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(!constant_time_eq(b"", b"a"));
    }
}
