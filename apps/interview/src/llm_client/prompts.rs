// Shared prompt fragments used by more than one interview mode.
// Each mode keeps its own templates in interview/prompts.rs.

/// Persona line that opens every system prompt.
pub const INTERVIEWER_PERSONA: &str = "당신은 대한민국 대입 전문 면접관입니다.";

/// Closing rule appended to every format contract.
pub const STRICT_FORMAT_RULE: &str = "규칙을 절대 어기지 말 것.";

/// Grounding rule: questions may only use facts present in the record.
pub const GROUNDING_RULE: &str = "학생의 생기부에 실제로 적힌 내용만 근거로 질문하고, \
    기록에 없는 활동이나 성과를 지어내지 말 것.";
