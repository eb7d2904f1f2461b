//! Scripted stand-ins for the chat model and the console.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::interview::chooser::Chooser;
use crate::interview::console::Console;
use crate::llm_client::{ChatModel, LlmError, Turn};

/// One recorded `ChatModel::complete` call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub turns: Vec<Turn>,
    pub max_tokens: u32,
}

impl RecordedCall {
    /// Content of the last turn, i.e. the request that triggered the call.
    pub fn request(&self) -> &str {
        self.turns.last().map(|t| t.content.as_str()).unwrap_or("")
    }
}

type Responder = Box<dyn Fn(&[Turn]) -> String + Send + Sync>;

enum Script {
    Queue(Mutex<VecDeque<String>>),
    Function(Responder),
}

/// A chat model that replays canned replies and records every call.
///
/// A queue-backed model fails with a 500 once it runs out of replies.
pub struct ScriptedModel {
    script: Script,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedModel {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Script::Queue(Mutex::new(replies.into_iter().map(Into::into).collect())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A model whose reply is computed from the transcript it receives.
    pub fn responding(f: impl Fn(&[Turn]) -> String + Send + Sync + 'static) -> Self {
        Self {
            script: Script::Function(Box::new(f)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, turns: &[Turn], max_tokens: u32) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            turns: turns.to_vec(),
            max_tokens,
        });
        match &self.script {
            Script::Queue(queue) => queue.lock().unwrap().pop_front().ok_or(LlmError::Api {
                status: 500,
                message: "scripted model has no more replies".to_string(),
            }),
            Script::Function(f) => Ok(f(turns)),
        }
    }
}

/// A console fed from a list of answers; `None` once they run out (end of input).
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub output: Vec<String>,
    pub prompts: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: 0,
        }
    }

    pub fn printed(&self) -> String {
        self.output.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn ask(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        self.prompts += 1;
        Ok(self.answers.pop_front())
    }
}

/// Replays a fixed sequence of picks, cycling; each pick is reduced modulo `len`.
#[derive(Debug, Clone)]
pub struct SequenceChooser {
    picks: Vec<usize>,
    next: usize,
}

impl SequenceChooser {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }
}

impl Chooser for SequenceChooser {
    fn pick(&mut self, len: usize) -> usize {
        let value = self.picks.get(self.next % self.picks.len().max(1)).copied().unwrap_or(0);
        self.next += 1;
        value % len.max(1)
    }
}
