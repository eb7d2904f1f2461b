//! Bracketed markers shared by the prompt templates and the model's replies.
//!
//! The marker text lives only here. Templates reference markers through
//! placeholders and `with_markers` fills them in; replies are read with `scan`.

/// What a block of model output is, or what a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnIntent {
    FirstQuestion,
    NextQuestion,
    FinalQuestion,
    Feedback,
    RetryRequested,
}

impl TurnIntent {
    pub const ALL: [TurnIntent; 5] = [
        TurnIntent::FirstQuestion,
        TurnIntent::NextQuestion,
        TurnIntent::FinalQuestion,
        TurnIntent::Feedback,
        TurnIntent::RetryRequested,
    ];

    /// The literal marker the model must echo.
    pub fn marker(self) -> &'static str {
        match self {
            TurnIntent::FirstQuestion => "[첫 질문]",
            TurnIntent::NextQuestion => "[다음 질문]",
            TurnIntent::FinalQuestion => "[마지막 질문]",
            TurnIntent::Feedback => "[피드백]",
            TurnIntent::RetryRequested => "[재답변 요청]",
        }
    }

    /// Reads a marker at the start of a line.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_start();
        Self::ALL
            .into_iter()
            .find(|intent| line.starts_with(intent.marker()))
    }

    /// Every marker present anywhere in `text`, in order of first appearance.
    pub fn scan(text: &str) -> Vec<Self> {
        let mut found: Vec<(usize, Self)> = Self::ALL
            .into_iter()
            .filter_map(|intent| text.find(intent.marker()).map(|pos| (pos, intent)))
            .collect();
        found.sort_by_key(|(pos, _)| *pos);
        found.into_iter().map(|(_, intent)| intent).collect()
    }

    pub fn found_in(self, text: &str) -> bool {
        Self::scan(text).contains(&self)
    }

    /// The question marker for question `number` of `total`.
    pub fn question_for(number: u32, total: u32) -> Self {
        if number <= 1 {
            TurnIntent::FirstQuestion
        } else if number >= total {
            TurnIntent::FinalQuestion
        } else {
            TurnIntent::NextQuestion
        }
    }

    /// Template placeholder that `with_markers` replaces with `marker()`.
    fn placeholder(self) -> &'static str {
        match self {
            TurnIntent::FirstQuestion => "{first_marker}",
            TurnIntent::NextQuestion => "{next_marker}",
            TurnIntent::FinalQuestion => "{final_marker}",
            TurnIntent::Feedback => "{feedback_marker}",
            TurnIntent::RetryRequested => "{retry_marker}",
        }
    }
}

/// Replaces every marker placeholder in a template.
pub fn with_markers(template: &str) -> String {
    TurnIntent::ALL
        .into_iter()
        .fold(template.to_string(), |text, intent| {
            text.replace(intent.placeholder(), intent.marker())
        })
}
