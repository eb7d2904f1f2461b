//! Elaborate interview — one randomly chosen, career-relevant source excerpt per question.
//!
//! Per question:
//! 1. pick a grade uniformly from 1–3
//! 2. narrow the source items to the grade's career category (fall back to all items)
//! 3. pick one item and ask the model for a question built on it
//! 4. read answers: skip keyword → next question, exit token → stop,
//!    otherwise evaluate; a `[재답변 요청]` in the feedback keeps the same question open
//!
//! The retry loop is only bounded when `max_retries_per_question` is set. With the
//! default (`None`) a model that always requests a retry never lets the session advance.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::extraction::career::GRADES;
use crate::extraction::catalog::Catalog;
use crate::extraction::sources::{relevant_to, SourceItem};
use crate::extraction::Extraction;
use crate::interview::chooser::Chooser;
use crate::interview::console::Reply;
use crate::interview::markers::TurnIntent;
use crate::interview::prompts::{
    elaborate_evaluation, elaborate_question, elaborate_system_prompt, Topic,
};
use crate::interview::transcript::Transcript;
use crate::interview::{
    Session, SessionOutcome, SessionReport, ANSWER_PROMPT, COMPLETED, FAREWELL,
    FEEDBACK_MAX_TOKENS, QUESTION_MAX_TOKENS, SEPARATOR,
};

const SKIPPED: &str = "\n다음 질문으로 넘어갑니다.";

/// Chooses the grade and source item for one question.
pub fn choose_topic<'a>(
    extraction: &'a Extraction,
    catalog: &Catalog,
    chooser: &mut dyn Chooser,
) -> Topic<'a> {
    let grade = GRADES[chooser.pick(GRADES.len()) % GRADES.len()];
    let category = extraction.career.category(grade);

    let relevant = relevant_to(&extraction.sources, category, catalog);
    let pool: Vec<&SourceItem> = if relevant.is_empty() {
        debug!("No source matches grade {grade} career {category:?}; using every source");
        extraction.sources.iter().collect()
    } else {
        relevant
    };

    let item = pool[chooser.pick(pool.len()) % pool.len()];
    debug!("Grade {grade} topic: {}", item.label());

    Topic {
        grade,
        career_label: extraction.career.label(grade),
        item,
    }
}

pub async fn run(
    session: &mut Session<'_>,
    name: &str,
    extraction: &Extraction,
    catalog: &Catalog,
    chooser: &mut dyn Chooser,
) -> Result<SessionReport, AppError> {
    let total = session.settings.total_questions;
    let mut transcript = Transcript::new(elaborate_system_prompt(name, &extraction.career, total));

    info!(
        "Starting elaborate interview for {name} with {} source items",
        extraction.sources.len()
    );
    session.banner();

    for number in 1..=total {
        let topic = choose_topic(extraction, catalog, chooser);
        let question = transcript
            .exchange(
                session.model,
                elaborate_question(number, total, &topic),
                QUESTION_MAX_TOKENS,
            )
            .await?;
        let expected = TurnIntent::question_for(number, total);
        if TurnIntent::parse(&question) != Some(expected) {
            warn!("Question {number} reply does not open with {}", expected.marker());
        }
        session.console.say(&question);

        let mut retries = 0u32;
        loop {
            let answer = match session.settings.classify(session.console.ask(ANSWER_PROMPT)?) {
                Reply::Quit => {
                    session.console.say(FAREWELL);
                    info!("Student left the interview at question {number}");
                    return Ok(SessionReport {
                        outcome: SessionOutcome::Quit,
                        questions_asked: number,
                        transcript,
                    });
                }
                Reply::Skip => {
                    session.console.say(SKIPPED);
                    debug!("Question {number} skipped");
                    break;
                }
                Reply::Answer(answer) => answer,
            };

            let feedback = transcript
                .exchange(session.model, elaborate_evaluation(&answer), FEEDBACK_MAX_TOKENS)
                .await?;
            session.console.say(SEPARATOR);
            session.console.say(&feedback);

            if !TurnIntent::RetryRequested.found_in(&feedback) {
                break;
            }
            if let Some(cap) = session.settings.max_retries_per_question {
                if retries >= cap {
                    warn!("Question {number}: retry cap of {cap} reached, moving on");
                    break;
                }
            }
            retries += 1;
            debug!("Question {number}: retry {retries} requested");
        }
    }

    session.console.say(COMPLETED);
    info!("Elaborate interview finished after {} turns", transcript.len());

    Ok(SessionReport {
        outcome: SessionOutcome::Completed,
        questions_asked: total,
        transcript,
    })
}
