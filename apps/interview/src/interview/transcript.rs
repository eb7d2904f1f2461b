use crate::llm_client::{ChatModel, LlmError, Role, Turn};

/// The running conversation sent in full on every request.
///
/// Starts with exactly one system turn; turns are only ever appended.
#[derive(Debug, Clone)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::new(Role::System, system_prompt)],
        }
    }

    #[cfg(test)]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Appends a user request, sends the whole transcript, and appends the reply.
    /// On failure the request stays in the transcript; the session is over anyway.
    pub async fn exchange(
        &mut self,
        model: &dyn ChatModel,
        request: String,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        self.turns.push(Turn::new(Role::User, request));
        let reply = model.complete(&self.turns, max_tokens).await?;
        self.turns.push(Turn::new(Role::Assistant, reply.clone()));
        Ok(reply)
    }
}
