//! Question sheet — one request that returns five deep questions for the whole record.
//! No conversation loop and no answers; the sheet is printed and the run ends.

use tracing::info;

use crate::errors::AppError;
use crate::extraction::sources::ActivityKind;
use crate::extraction::summary::NO_AWARDS;
use crate::extraction::Extraction;
use crate::interview::console::Console;
use crate::interview::prompts::{question_sheet, SheetProfile, QUESTION_SHEET_SYSTEM};
use crate::llm_client::{ChatModel, Role, Turn};
use crate::models::record::StudentRecord;

/// Token bound for the sheet: five questions with short follow-ups.
pub const SHEET_MAX_TOKENS: u32 = 1200;
const UNSTATED: &str = "미기재";

/// Condenses the record and its extraction into the sheet's profile fields.
pub fn build_profile(record: &StudentRecord, extraction: &Extraction) -> SheetProfile {
    let award_names = record.award_names();
    let awards = if award_names.is_empty() {
        NO_AWARDS.to_string()
    } else {
        award_names.join(", ")
    };

    let grade = extraction
        .career
        .latest()
        .map(|(grade, _)| format!("{grade}학년"))
        .unwrap_or_else(|| UNSTATED.to_string());

    let details = join_or_unstated(
        extraction
            .sources
            .iter()
            .filter(|s| s.activity == ActivityKind::CourseworkNote)
            .map(|s| format!("{}: {}", s.subject, s.excerpt)),
    );

    let club = join_or_unstated(
        extraction
            .sources
            .iter()
            .filter(|s| s.activity == ActivityKind::Club)
            .map(|s| s.excerpt.clone()),
    );

    let career_goal = join_or_unstated(
        extraction
            .career
            .iter()
            .map(|(grade, intent)| format!("{grade}학년 {}", intent.label())),
    );

    SheetProfile {
        name: record.name().to_string(),
        grade,
        details,
        awards,
        club,
        career_goal,
    }
}

fn join_or_unstated(parts: impl Iterator<Item = String>) -> String {
    let joined = parts.collect::<Vec<_>>().join(" / ");
    if joined.is_empty() {
        UNSTATED.to_string()
    } else {
        joined
    }
}

pub async fn run(
    model: &dyn ChatModel,
    console: &mut dyn Console,
    record: &StudentRecord,
    extraction: &Extraction,
) -> Result<String, AppError> {
    let profile = build_profile(record, extraction);
    let turns = [
        Turn::new(Role::System, QUESTION_SHEET_SYSTEM),
        Turn::new(Role::User, question_sheet(&profile)),
    ];

    info!("Requesting question sheet for {}", profile.name);
    let sheet = model.complete(&turns, SHEET_MAX_TOKENS).await?;

    console.say("\n===== 📋 예상 면접 질문 =====");
    console.say(&sheet);
    Ok(sheet)
}
