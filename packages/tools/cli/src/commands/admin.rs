//! 관리자 세션 명령어

use att_core::auth::{AdminSessionSigner, ADMIN_SESSION_COOKIE};
use att_core::config::SigningConfig;

use super::print_json;
use crate::config::CliConfig;
use crate::OutputFormat;

pub fn login(config: &mut CliConfig) -> anyhow::Result<()> {
    let signing = SigningConfig::from_env()?;
    let token = AdminSessionSigner::from_config(&signing).generate()?;

    config.admin_session = Some(token);
    config.save()?;

    tracing::info!(
        max_age_hours = AdminSessionSigner::max_age().num_hours(),
        "admin session stored"
    );
    println!("Logged in as admin");
    Ok(())
}

pub fn logout(config: &mut CliConfig) -> anyhow::Result<()> {
    if config.admin_session.take().is_none() {
        println!("No admin session stored");
        return Ok(());
    }
    config.save()?;
    println!("Logged out");
    Ok(())
}

pub fn status(format: OutputFormat, config: &CliConfig, token: Option<&str>) -> anyhow::Result<()> {
    let signing = SigningConfig::from_env()?;
    let token = match token {
        Some(token) => token.to_string(),
        None => config.get_admin_session()?,
    };

    let valid = AdminSessionSigner::from_config(&signing).verify(&token);

    let max_age = AdminSessionSigner::max_age().num_seconds();

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "valid": valid,
            "cookie": ADMIN_SESSION_COOKIE,
            "maxAgeSecs": max_age,
        }))?,
        OutputFormat::Text => {
            println!("{}", if valid { "Admin session valid" } else { "Admin session invalid" });
            println!("Cookie: {} (Max-Age={})", ADMIN_SESSION_COOKIE, max_age);
        }
    }

    if !valid {
        anyhow::bail!("admin session is not valid; run 'att admin login'");
    }
    Ok(())
}
