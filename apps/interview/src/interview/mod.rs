// Interview drivers: the conversation loop between the student at the console
// and the chat model.
// All LLM calls go through the ChatModel trait — no direct HTTP here.

pub mod batch;
pub mod chooser;
pub mod console;
pub mod elaborate;
pub mod markers;
pub mod prompts;
pub mod simple;
pub mod transcript;

use crate::interview::console::Console;
use crate::interview::transcript::Transcript;
use crate::llm_client::ChatModel;

/// Questions per session.
pub const TOTAL_QUESTIONS: u32 = 6;
/// Token bound for question turns.
pub const QUESTION_MAX_TOKENS: u32 = 400;
/// Token bound for feedback turns.
pub const FEEDBACK_MAX_TOKENS: u32 = 600;

pub const EXIT_TOKENS: &[&str] = &["exit", "quit", "종료"];
pub const SKIP_KEYWORDS: &[&str] = &["다음 질문", "넘어가", "패스", "pass", "skip", "모르겠"];

pub const ANSWER_PROMPT: &str = "\n[학생 답변] > ";
pub const SEPARATOR: &str = "\n--------------------------------";
pub const FAREWELL: &str = "\n면접 연습을 종료합니다. 수고했어요! 🙌";
pub const COMPLETED: &str = "\n✨ 모든 질문이 끝났습니다. 수고했어요! 🙌";

/// Fixed session parameters.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub total_questions: u32,
    /// `None`: keep re-asking for as long as the model requests a retry.
    pub max_retries_per_question: Option<u32>,
    pub exit_tokens: &'static [&'static str],
    pub skip_keywords: &'static [&'static str],
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            total_questions: TOTAL_QUESTIONS,
            max_retries_per_question: None,
            exit_tokens: EXIT_TOKENS,
            skip_keywords: SKIP_KEYWORDS,
        }
    }
}

/// What a driver needs from the outside world.
pub struct Session<'a> {
    pub model: &'a dyn ChatModel,
    pub console: &'a mut dyn Console,
    pub settings: &'a SessionSettings,
}

impl Session<'_> {
    fn banner(&mut self) {
        self.console.say("\n===== 🎤 AI 면접관 모드 시작 =====");
        self.console.say("종료하려면 exit 또는 quit 입력\n");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every question was asked.
    Completed,
    /// The student typed an exit token or closed stdin.
    Quit,
}

/// Result of a finished session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    /// Highest question number reached; never above `total_questions`.
    pub questions_asked: u32,
    pub transcript: Transcript,
}
