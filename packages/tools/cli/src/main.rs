//! Attendance CLI (`att`)
//!
//! 체크인 토큰 발급/검증, 관리자 세션, 출석 리포트를 셸에서 다루는 운영 도구입니다.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "att")]
#[command(author, version, about = "Attendance CLI - check-in tokens, admin sessions and reports", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    // ─────────────────────────────────────────────────────────────────────────
    // Secrets
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage signing secrets
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Check-in tokens
    // ─────────────────────────────────────────────────────────────────────────
    /// Issue and verify check-in tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Admin session
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage the local admin session
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Reports
    // ─────────────────────────────────────────────────────────────────────────
    /// Compute attendance reports from a JSON file of records
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Subcommand enums
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum SecretAction {
    /// Generate a new random signing secret
    Generate,
}

#[derive(Subcommand)]
enum TokenAction {
    /// Issue a check-in token for a session
    Issue { session_id: String },
    /// Verify a check-in token
    Verify { token: String },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Generate an admin session and store it locally
    Login,
    /// Remove the stored admin session
    Logout,
    /// Verify the stored (or given) admin session
    Status {
        #[arg(long)]
        token: Option<String>,
    },
}

#[derive(Subcommand)]
enum ReportAction {
    /// Current attendance streak
    Streak {
        #[arg(long)]
        file: PathBuf,
    },
    /// Weekend attendance trend
    Trend {
        #[arg(long)]
        file: PathBuf,
    },
    /// Session history, newest first
    History {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Per-status counts and attendance rate
    Summary {
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화 (stdout은 명령 출력용)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "att=info,att_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    // 명령 실행
    match cli.command {
        Commands::Secret { action } => match action {
            SecretAction::Generate => commands::secret::generate(format),
        },

        Commands::Token { action } => match action {
            TokenAction::Issue { session_id } => commands::token::issue(format, &session_id),
            TokenAction::Verify { token } => commands::token::verify(format, &token),
        },

        Commands::Admin { action } => {
            let mut config = CliConfig::load()?;
            match action {
                AdminAction::Login => commands::admin::login(&mut config),
                AdminAction::Logout => commands::admin::logout(&mut config),
                AdminAction::Status { token } => {
                    commands::admin::status(format, &config, token.as_deref())
                }
            }
        }

        Commands::Report { action } => match action {
            ReportAction::Streak { file } => commands::report::streak(format, &file),
            ReportAction::Trend { file } => commands::report::trend(format, &file),
            ReportAction::History { file, limit } => {
                commands::report::history(format, &file, limit)
            }
            ReportAction::Summary { file } => commands::report::summary(format, &file),
        },
    }
}
