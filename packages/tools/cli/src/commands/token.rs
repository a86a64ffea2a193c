//! 체크인 토큰 명령어

use att_core::auth::{TokenIssuer, TokenVerifier, CHECKIN_TOKEN_TTL_SECS};
use att_core::config::SigningConfig;

use super::print_json;
use crate::OutputFormat;

pub fn issue(format: OutputFormat, session_id: &str) -> anyhow::Result<()> {
    let session_id = require_session_id(session_id)?;
    let config = SigningConfig::from_env()?;
    let token = TokenIssuer::from_config(&config).issue(session_id)?;

    tracing::info!(session_id, "check-in token issued");

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "sessionId": session_id,
            "token": token,
            "expiresInSecs": CHECKIN_TOKEN_TTL_SECS,
        })),
        OutputFormat::Text => {
            println!("{}", token);
            eprintln!("Valid for {}s", CHECKIN_TOKEN_TTL_SECS);
            Ok(())
        }
    }
}

/// 셸 인자 검증 (빈 값/앞뒤 공백 거부)
pub(crate) fn require_session_id(raw: &str) -> anyhow::Result<&str> {
    if raw.trim().is_empty() {
        anyhow::bail!("session id must not be empty");
    }
    if raw.trim() != raw {
        anyhow::bail!("session id must not have leading or trailing whitespace");
    }
    Ok(raw)
}

pub fn verify(format: OutputFormat, token: &str) -> anyhow::Result<()> {
    let config = SigningConfig::from_env()?;
    let claims = TokenVerifier::from_config(&config)
        .verify(token)
        .ok_or_else(|| anyhow::anyhow!("invalid check-in token"))?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "sessionId": claims.session_id,
            "issuedAt": claims.issued_at,
            "expiresAt": claims.expires_at,
            "remainingSecs": claims.time_remaining(),
        })),
        OutputFormat::Text => {
            println!("Session: {}", claims.session_id);
            println!("Remaining: {}s", claims.time_remaining());
            Ok(())
        }
    }
}
