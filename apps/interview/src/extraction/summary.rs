use crate::models::record::StudentRecord;

/// Rendered when the record lists no awards.
pub const NO_AWARDS: &str = "없음";
/// Cap on the academic text embedded in the summary, in characters.
pub const MAX_ACADEMIC_CHARS: usize = 2000;

/// Builds the short interview summary used by the simple interview.
pub fn build_student_summary(record: &StudentRecord) -> String {
    let award_names = record.award_names();
    let awards = if award_names.is_empty() {
        NO_AWARDS.to_string()
    } else {
        award_names.join(", ")
    };

    let academic_text: String = record
        .academic_texts()
        .flat_map(|rec| rec.chars().chain(std::iter::once('\n')))
        .take(MAX_ACADEMIC_CHARS)
        .collect();

    format!(
        "\n이름: {name}\n수상경력: {awards}\n\n창의적 체험활동 / 교과 세부능력 주요 내용:\n{academic_text}\n",
        name = record.name(),
    )
}
