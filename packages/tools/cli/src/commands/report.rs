//! 출석 리포트 명령어
//!
//! 입력 파일: 출석 레코드 JSON 배열 (`[{"status": "PRESENT", "date": "2024-01-06"}, ...]`)

use std::path::Path;

use anyhow::Context as _;
use att_core::attendance::{
    compute_streak, group_by_weekend, lessons_completed, session_history, summarize,
    AttendanceRecord,
};

use super::print_json;
use crate::OutputFormat;

/// 레코드 파일 로드
pub(crate) fn load_records(path: &Path) -> anyhow::Result<Vec<AttendanceRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records: Vec<AttendanceRecord> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse attendance records in {}", path.display()))?;
    tracing::debug!(count = records.len(), "loaded attendance records");
    Ok(records)
}

pub fn streak(format: OutputFormat, path: &Path) -> anyhow::Result<()> {
    let streak = compute_streak(&load_records(path)?);

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "streak": streak })),
        OutputFormat::Text => {
            println!("Current streak: {}", streak);
            Ok(())
        }
    }
}

pub fn trend(format: OutputFormat, path: &Path) -> anyhow::Result<()> {
    let trend = group_by_weekend(&load_records(path)?);

    match format {
        OutputFormat::Json => print_json(&trend),
        OutputFormat::Text => {
            if trend.is_empty() {
                println!("No weekend sessions");
            }
            for point in &trend {
                println!("{:<8} {:>3}%  ({} sessions)", point.week_label, point.rate, point.total);
            }
            Ok(())
        }
    }
}

pub fn history(format: OutputFormat, path: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    let mut history = session_history(&load_records(path)?);
    if let Some(limit) = limit {
        history.truncate(limit);
    }

    match format {
        OutputFormat::Json => print_json(&history),
        OutputFormat::Text => {
            for entry in &history {
                let lesson = entry.lesson_range().unwrap_or_else(|| "-".to_string());
                let done = if entry.lesson_completed { "completed" } else { "" };
                println!("{}  {:<9}  {}  {}", entry.date, entry.status, lesson, done);
            }
            Ok(())
        }
    }
}

pub fn summary(format: OutputFormat, path: &Path) -> anyhow::Result<()> {
    let records = load_records(path)?;
    let summary = summarize(&records);
    let completed = lessons_completed(&records);

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "summary": summary,
            "lessonsCompleted": completed,
        })),
        OutputFormat::Text => {
            println!("Sessions:   {}", summary.total);
            println!("Present:    {}", summary.present);
            println!("Late:       {}", summary.late);
            println!("Excused:    {}", summary.excused);
            println!("Absent:     {}", summary.absent);
            println!("Unexcused:  {}", summary.unexcused);
            println!("Rate:       {}%", summary.rate);
            println!("Lessons completed: {}", completed);
            Ok(())
        }
    }
}
