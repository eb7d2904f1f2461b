// All LLM prompt templates for the interview modes.
// Marker text is never written here: templates use {first_marker}-style placeholders
// that markers::with_markers fills in. User-supplied text is substituted last.

use crate::extraction::career::{CareerIntent, GRADES};
use crate::extraction::sources::SourceItem;
use crate::interview::markers::{with_markers, TurnIntent};
use crate::llm_client::prompts::{GROUNDING_RULE, INTERVIEWER_PERSONA, STRICT_FORMAT_RULE};

/// Simple interview system prompt.
/// Replace: {persona}, {summary}, {total}, {total_minus_one}, {strict_rule}
pub const SIMPLE_SYSTEM_TEMPLATE: &str = r#"
{persona}

학생의 생기부 요약:
{summary}

면접 규칙:
1) 첫 질문은 아래 형식으로만 출력한다:
   {first_marker}
   질문 내용

2) 두 번째부터 {total_minus_one}번째 질문까지는:
   {next_marker}
   질문 내용

3) {total}번째 질문(마지막)은:
   {final_marker}
   마지막 질문 1개만 출력

4) 학생이 답변하면 반드시 아래 형식으로만 답한다:
   {feedback_marker}
   학생 답변 평가 1~2문장

   {next_marker} 또는 {final_marker}
   질문 내용

5) {strict_rule}
"#;

/// First-question request shared by the simple interview. No feedback allowed.
pub const FIRST_QUESTION_REQUEST: &str = r#"
생기부를 기반으로 첫 번째 질문을 출력하세요.

출력 형식:
{first_marker}
질문 내용
"#;

/// Simple interview follow-up. Replace: {question_marker}, then {answer}
pub const SIMPLE_FOLLOW_UP_TEMPLATE: &str = r#"
아래 학생의 답변을 평가하세요.

[학생 답변]
{answer}

출력 형식은 반드시 아래 중 하나:

{question_marker}

형식:
{feedback_marker}
학생 답변 평가 1~2문장

{question_marker}
질문 내용
"#;

/// Elaborate interview system prompt.
/// Replace: {persona}, {name}, {career_lines}, {total}, {grounding_rule}, {strict_rule}
pub const ELABORATE_SYSTEM_TEMPLATE: &str = r#"
{persona}

학생 이름: {name}
학년별 희망 분야:
{career_lines}

면접은 총 {total}개의 질문으로 진행된다.

면접 규칙:
1) 질문을 요청받으면 요청에 적힌 표식({first_marker}, {next_marker}, {final_marker} 중 하나)을 첫 줄에 쓰고,
   다음 줄에 질문 1개만 출력한다.
2) 질문은 요청에 주어진 생기부 소재 하나에만 근거한다. 학생의 희망 분야와 연결되는 꼬리 질문이면 더 좋다.
3) 학생 답변 평가를 요청받으면 아래 형식으로만 답한다:
   {feedback_marker}
   점수: N/5
   학생 답변 평가 1~2문장
4) 점수가 2점 이하이면 평가 아래에 다음을 덧붙인다:
   {retry_marker}
   같은 질문에 다시 답할 때 보완할 점 1문장
5) 평가 단계에서는 새 질문을 만들지 않는다.
6) {grounding_rule}
7) {strict_rule}
"#;

/// Elaborate question request.
/// Replace: {number}, {total}, {question_marker}, {subject}, {activity}, {grade}, {career}, {excerpt}
pub const ELABORATE_QUESTION_TEMPLATE: &str = r#"
{number}번째 질문을 만드세요. (전체 {total}개 중)

[질문 소재]
과목/활동: {subject}
활동 구분: {activity}
학년: {grade}학년
해당 학년 희망 분야: {career}
기록 내용: {excerpt}

출력 형식:
{question_marker}
질문 내용
"#;

/// Elaborate evaluation request. Replace: {answer}
pub const ELABORATE_EVALUATION_TEMPLATE: &str = r#"
아래 학생의 답변을 평가하세요. 새 질문은 만들지 마세요.

[학생 답변]
{answer}

출력 형식:
{feedback_marker}
점수: N/5
학생 답변 평가 1~2문장

(점수가 2점 이하일 때만 추가)
{retry_marker}
보완할 점 1문장
"#;

/// System prompt for the one-shot question sheet.
pub const QUESTION_SHEET_SYSTEM: &str = "당신은 입시 전문 면접관입니다.";

/// One-shot question sheet request.
/// Replace: {name}, {grade}, {details}, {awards}, {club}, {career_goal}, {grounding_rule}
pub const QUESTION_SHEET_TEMPLATE: &str = r#"
다음 학생의 생기부 정보를 바탕으로 심층 질문 5개를 만들어주세요.

### 학생 정보
이름: {name}
학년: {grade}
세부특기사항: {details}
수상경력: {awards}
동아리 활동: {club}
진로희망: {career_goal}

### 요구사항
- 실제 교내·대학 면접처럼 깊이 있는 질문
- 학생의 경험을 추적하는 꼬리 질문 포함
- 지식 기반·경험 기반·상황형 질문 혼합
- 너무 길게 말하지 말 것
- {grounding_rule}
"#;

pub fn simple_system_prompt(summary: &str, total: u32) -> String {
    with_markers(SIMPLE_SYSTEM_TEMPLATE)
        .replace("{persona}", INTERVIEWER_PERSONA)
        .replace("{strict_rule}", STRICT_FORMAT_RULE)
        .replace("{total_minus_one}", &total.saturating_sub(1).to_string())
        .replace("{total}", &total.to_string())
        .replace("{summary}", summary)
}

pub fn first_question_request() -> String {
    with_markers(FIRST_QUESTION_REQUEST)
}

pub fn simple_follow_up(answer: &str, is_last: bool) -> String {
    let question_marker = if is_last {
        TurnIntent::FinalQuestion
    } else {
        TurnIntent::NextQuestion
    };
    with_markers(SIMPLE_FOLLOW_UP_TEMPLATE)
        .replace("{question_marker}", question_marker.marker())
        .replace("{answer}", answer)
}

pub fn elaborate_system_prompt(name: &str, career: &CareerIntent, total: u32) -> String {
    let career_lines = GRADES
        .iter()
        .map(|grade| format!("- {grade}학년: {}", career.label(*grade)))
        .collect::<Vec<_>>()
        .join("\n");

    with_markers(ELABORATE_SYSTEM_TEMPLATE)
        .replace("{persona}", INTERVIEWER_PERSONA)
        .replace("{grounding_rule}", GROUNDING_RULE)
        .replace("{strict_rule}", STRICT_FORMAT_RULE)
        .replace("{total}", &total.to_string())
        .replace("{career_lines}", &career_lines)
        .replace("{name}", name)
}

/// The topic a question is built on.
#[derive(Debug, Clone, Copy)]
pub struct Topic<'a> {
    pub grade: u8,
    pub career_label: &'a str,
    pub item: &'a SourceItem,
}

pub fn elaborate_question(number: u32, total: u32, topic: &Topic<'_>) -> String {
    with_markers(ELABORATE_QUESTION_TEMPLATE)
        .replace(
            "{question_marker}",
            TurnIntent::question_for(number, total).marker(),
        )
        .replace("{number}", &number.to_string())
        .replace("{total}", &total.to_string())
        .replace("{grade}", &topic.grade.to_string())
        .replace("{activity}", topic.item.activity.name())
        .replace("{career}", topic.career_label)
        .replace("{subject}", &topic.item.label())
        .replace("{excerpt}", &topic.item.excerpt)
}

pub fn elaborate_evaluation(answer: &str) -> String {
    with_markers(ELABORATE_EVALUATION_TEMPLATE).replace("{answer}", answer)
}

/// Profile fields for the question sheet.
#[derive(Debug, Clone, Default)]
pub struct SheetProfile {
    pub name: String,
    pub grade: String,
    pub details: String,
    pub awards: String,
    pub club: String,
    pub career_goal: String,
}

pub fn question_sheet(profile: &SheetProfile) -> String {
    QUESTION_SHEET_TEMPLATE
        .replace("{grounding_rule}", GROUNDING_RULE)
        .replace("{name}", &profile.name)
        .replace("{grade}", &profile.grade)
        .replace("{awards}", &profile.awards)
        .replace("{club}", &profile.club)
        .replace("{career_goal}", &profile.career_goal)
        .replace("{details}", &profile.details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::catalog::Catalog;
    use crate::extraction::career::extract_career_intent;
    use crate::extraction::sources::ActivityKind;

    #[test]
    fn test_simple_system_prompt_numbers_and_markers() {
        let prompt = simple_system_prompt("이름: 홍길동", 6);
        assert!(prompt.contains("두 번째부터 5번째 질문까지는"));
        assert!(prompt.contains("6번째 질문(마지막)은"));
        assert!(prompt.contains("[첫 질문]"));
        assert!(prompt.contains("[마지막 질문]"));
        assert!(prompt.contains("[피드백]"));
        assert!(prompt.contains("이름: 홍길동"));
        assert!(!prompt.contains('{'), "unfilled placeholder in: {prompt}");
    }

    #[test]
    fn test_simple_follow_up_picks_marker() {
        let next = simple_follow_up("답변", false);
        assert!(next.contains("[다음 질문]"));
        assert!(!next.contains("[마지막 질문]"));

        let last = simple_follow_up("답변", true);
        assert!(last.contains("[마지막 질문]"));
        assert!(!last.contains("[다음 질문]"));
    }

    #[test]
    fn test_answer_text_is_not_treated_as_placeholder() {
        let request = elaborate_evaluation("저는 {retry_marker} 라고 썼습니다");
        assert!(request.contains("저는 {retry_marker} 라고 썼습니다"));
    }

    #[test]
    fn test_elaborate_question_embeds_topic() {
        let item = SourceItem {
            subject: "수학".to_string(),
            activity: ActivityKind::CourseworkNote,
            excerpt: "미적분 심화 학습".to_string(),
        };
        let topic = Topic {
            grade: 2,
            career_label: "공학",
            item: &item,
        };
        let request = elaborate_question(6, 6, &topic);
        assert!(request.contains("과목/활동: 수학(세부능력특기사항)"));
        assert!(request.contains("활동 구분: 세부능력특기사항"));
        assert!(request.contains("학년: 2학년"));
        assert!(request.contains("해당 학년 희망 분야: 공학"));
        assert!(request.contains("기록 내용: 미적분 심화 학습"));
        assert!(request.contains("[마지막 질문]"));
        assert!(!request.contains('{'));
    }

    #[test]
    fn test_elaborate_system_prompt_lists_grades() {
        let career = extract_career_intent("희망 분야 공학\n희망 분야 AI 연구", &Catalog::default());
        let prompt = elaborate_system_prompt("홍길동", &career, 6);
        assert!(prompt.contains("- 1학년: 공학"));
        assert!(prompt.contains("- 2학년: AI"));
        assert!(prompt.contains("- 3학년: 미기재"));
        assert!(prompt.contains("[재답변 요청]"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_question_sheet_fills_profile() {
        let profile = SheetProfile {
            name: "홍길동".into(),
            grade: "3".into(),
            details: "수학: 미적분".into(),
            awards: "없음".into(),
            club: "로봇부".into(),
            career_goal: "공학".into(),
        };
        let request = question_sheet(&profile);
        assert!(request.contains("심층 질문 5개"));
        assert!(request.contains("동아리 활동: 로봇부"));
        assert!(!request.contains('{'));
    }
}
