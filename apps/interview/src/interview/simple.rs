//! Simple interview — fixed sequence over a one-paragraph record summary.
//!
//! Flow: first question → (answer → feedback + next question) × (total − 2)
//!       → answer → feedback + final question → done.
//!
//! No skip or retry branch: every answer is evaluated and the counter advances.

use tracing::info;

use crate::errors::AppError;
use crate::extraction::summary::build_student_summary;
use crate::interview::prompts::{first_question_request, simple_follow_up, simple_system_prompt};
use crate::interview::transcript::Transcript;
use crate::interview::{
    Session, SessionOutcome, SessionReport, ANSWER_PROMPT, COMPLETED, FAREWELL,
    FEEDBACK_MAX_TOKENS, QUESTION_MAX_TOKENS, SEPARATOR,
};
use crate::models::record::StudentRecord;

pub async fn run(
    session: &mut Session<'_>,
    record: &StudentRecord,
) -> Result<SessionReport, AppError> {
    let total = session.settings.total_questions;
    let summary = build_student_summary(record);
    let mut transcript = Transcript::new(simple_system_prompt(&summary, total));

    info!("Starting simple interview for {}", record.name());

    let first_question = transcript
        .exchange(session.model, first_question_request(), QUESTION_MAX_TOKENS)
        .await?;

    session.banner();
    session.console.say(&first_question);

    let mut number = 2;
    while number <= total {
        let answer = match session.console.ask(ANSWER_PROMPT)? {
            Some(line) if !session.settings.is_exit(&line) => line,
            _ => {
                session.console.say(FAREWELL);
                info!("Student left the interview before question {number}");
                return Ok(SessionReport {
                    outcome: SessionOutcome::Quit,
                    questions_asked: number - 1,
                    transcript,
                });
            }
        };

        let is_last = number == total;
        let reply = transcript
            .exchange(
                session.model,
                simple_follow_up(&answer, is_last),
                FEEDBACK_MAX_TOKENS,
            )
            .await?;

        session.console.say(SEPARATOR);
        session.console.say(&reply);

        if is_last {
            break;
        }
        number += 1;
    }

    session.console.say(COMPLETED);
    info!("Simple interview finished after {} turns", transcript.len());

    Ok(SessionReport {
        outcome: SessionOutcome::Completed,
        questions_asked: number.min(total).max(1),
        transcript,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::markers::TurnIntent;
    use crate::interview::SessionSettings;
    use crate::llm_client::Role;
    use crate::test_support::{ScriptedConsole, ScriptedModel};

    fn record() -> StudentRecord {
        serde_json::from_value(serde_json::json!({
            "student_info": {"name": "홍길동"},
            "awards": [],
            "academic_records": ["수학: 미적분 심화 학습"]
        }))
        .unwrap()
    }

    fn replies() -> Vec<String> {
        let mut replies = vec!["[첫 질문]\n미적분을 공부한 계기는?".to_string()];
        for n in 2..6 {
            replies.push(format!("[피드백]\n좋습니다.\n\n[다음 질문]\n질문 {n}"));
        }
        replies.push("[피드백]\n좋습니다.\n\n[마지막 질문]\n마지막 질문".to_string());
        replies
    }

    #[tokio::test]
    async fn test_full_session_asks_six_questions() {
        let model = ScriptedModel::new(replies());
        let mut console = ScriptedConsole::new((1..=5).map(|n| format!("답변 {n}")));
        let settings = SessionSettings::default();
        let mut session = Session {
            model: &model,
            console: &mut console,
            settings: &settings,
        };

        let report = run(&mut session, &record()).await.unwrap();

        assert_eq!(report.outcome, SessionOutcome::Completed);
        assert_eq!(report.questions_asked, 6);
        assert_eq!(report.transcript.len(), 13);
        assert_eq!(report.transcript.turns()[0].role, Role::System);

        let calls = model.calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0].max_tokens, QUESTION_MAX_TOKENS);
        assert!(calls[0].request().contains("[첫 질문]"));
        for call in &calls[1..5] {
            assert_eq!(call.max_tokens, FEEDBACK_MAX_TOKENS);
            assert!(call.request().contains(TurnIntent::NextQuestion.marker()));
        }
        assert!(calls[5].request().contains(TurnIntent::FinalQuestion.marker()));
        assert!(calls[5].request().contains("답변 5"));

        assert!(console.printed().contains(COMPLETED));
        assert_eq!(console.prompts, 5);
    }

    #[tokio::test]
    async fn test_summary_with_no_awards_reaches_model() {
        let model = ScriptedModel::new(replies());
        let mut console = ScriptedConsole::new(["quit"]);
        let settings = SessionSettings::default();
        let mut session = Session {
            model: &model,
            console: &mut console,
            settings: &settings,
        };

        run(&mut session, &record()).await.unwrap();

        let system = &model.calls()[0].turns[0].content;
        assert!(system.contains("수상경력: 없음"));
        assert!(system.contains("수학: 미적분 심화 학습"));
    }

    #[tokio::test]
    async fn test_exit_token_ends_session() {
        let model = ScriptedModel::new(replies());
        let mut console = ScriptedConsole::new(["답변", "EXIT"]);
        let settings = SessionSettings::default();
        let mut session = Session {
            model: &model,
            console: &mut console,
            settings: &settings,
        };

        let report = run(&mut session, &record()).await.unwrap();

        assert_eq!(report.outcome, SessionOutcome::Quit);
        assert_eq!(report.questions_asked, 2);
        assert_eq!(model.calls().len(), 2);
        assert!(console.printed().contains(FAREWELL));
    }

    #[tokio::test]
    async fn test_end_of_input_counts_as_quit() {
        let model = ScriptedModel::new(replies());
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let settings = SessionSettings::default();
        let mut session = Session {
            model: &model,
            console: &mut console,
            settings: &settings,
        };

        let report = run(&mut session, &record()).await.unwrap();
        assert_eq!(report.outcome, SessionOutcome::Quit);
        assert_eq!(report.questions_asked, 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_fatal() {
        let model = ScriptedModel::new(["[첫 질문]\n질문"]);
        let mut console = ScriptedConsole::new(["답변"]);
        let settings = SessionSettings::default();
        let mut session = Session {
            model: &model,
            console: &mut console,
            settings: &settings,
        };

        let err = run(&mut session, &record()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(model.calls().len(), 2, "no retry after a failed call");
    }
}
