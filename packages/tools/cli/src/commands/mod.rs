//! CLI 명령어 구현

pub mod admin;
pub mod report;
pub mod secret;
pub mod token;

use serde::Serialize;

/// JSON 출력 (pretty)
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
