//! 시크릿 명령어

use att_core::config::{generate_secret, ADMIN_SECRET_ENV, CHECKIN_SECRET_ENV};

use super::print_json;
use crate::OutputFormat;

pub fn generate(format: OutputFormat) -> anyhow::Result<()> {
    let secret = generate_secret();

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "secret": secret })),
        OutputFormat::Text => {
            println!("{}", secret);
            eprintln!("Set it as {} (and optionally {})", CHECKIN_SECRET_ENV, ADMIN_SECRET_ENV);
            Ok(())
        }
    }
}
