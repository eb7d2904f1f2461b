//! Static lookup tables for extraction and topic selection.
//!
//! Immutable data; a `Catalog` is built once and passed to the builder and the driver.

use crate::extraction::career::CareerCategory;

/// Career normalisation rules in precedence order: the first category whose
/// keyword occurs in a statement wins.
pub const CAREER_RULES: &[(CareerCategory, &[&str])] = &[
    (
        CareerCategory::ComputerScience,
        &["컴퓨터", "소프트웨어", "정보", "프로그래", "코딩", "개발자"],
    ),
    (CareerCategory::Ai, &["인공지능", "AI", "머신러닝", "딥러닝"]),
    (
        CareerCategory::Engineering,
        &["공학", "엔지니어", "기계", "전자", "전기", "건축"],
    ),
    (
        CareerCategory::NaturalScience,
        &["자연과학", "물리", "화학", "생명과학", "생물", "수학", "천문"],
    ),
    (
        CareerCategory::Medicine,
        &["의학", "의사", "의료", "간호", "약학", "치의", "한의"],
    ),
    (CareerCategory::BusinessManagement, &["경영"]),
    (
        CareerCategory::BusinessEconomics,
        &["경제", "무역", "금융", "회계"],
    ),
    (
        CareerCategory::Humanities,
        &["인문", "문학", "국문", "사학", "역사", "철학", "언어"],
    ),
    (CareerCategory::Education, &["교육", "교사", "교직"]),
];

/// Subjects and activity words that make a source item relevant to a career category.
pub const TOPIC_KEYWORDS: &[(CareerCategory, &[&str])] = &[
    (
        CareerCategory::ComputerScience,
        &["정보", "컴퓨터", "소프트웨어", "프로그래밍", "코딩", "알고리즘", "수학", "데이터"],
    ),
    (
        CareerCategory::Ai,
        &["인공지능", "AI", "머신러닝", "딥러닝", "데이터", "정보", "수학", "통계"],
    ),
    (
        CareerCategory::Engineering,
        &["공학", "물리", "수학", "기술", "설계", "로봇", "제작"],
    ),
    (
        CareerCategory::NaturalScience,
        &["물리", "화학", "생명", "생물", "지구과학", "과학", "수학", "실험"],
    ),
    (
        CareerCategory::Medicine,
        &["생명", "생물", "화학", "의학", "보건", "건강", "봉사"],
    ),
    (
        CareerCategory::BusinessManagement,
        &["경영", "경제", "사회", "리더", "마케팅", "창업"],
    ),
    (
        CareerCategory::BusinessEconomics,
        &["경제", "사회", "수학", "통계", "금융", "무역"],
    ),
    (
        CareerCategory::Humanities,
        &["국어", "문학", "역사", "철학", "윤리", "독서", "영어", "한문"],
    ),
    (
        CareerCategory::Education,
        &["교육", "멘토", "또래", "학습", "봉사", "국어", "교사"],
    ),
];

/// Generic praise that says nothing about the student's actual work.
pub const ATTITUDE_PHRASES: &[&str] = &[
    "성실",
    "태도가 좋",
    "태도가 바르",
    "수업 태도",
    "적극적으로 참여",
    "적극적인 참여",
    "적극 참여",
    "모범적",
    "책임감이 강",
    "열심히 참여",
    "예의 바르",
];

/// Lookup tables for one run.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub career_rules: &'static [(CareerCategory, &'static [&'static str])],
    pub topic_keywords: &'static [(CareerCategory, &'static [&'static str])],
    pub attitude_phrases: &'static [&'static str],
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            career_rules: CAREER_RULES,
            topic_keywords: TOPIC_KEYWORDS,
            attitude_phrases: ATTITUDE_PHRASES,
        }
    }
}

impl Catalog {
    /// Topic keywords for a category; empty when the table has no row for it.
    pub fn topic_keywords_for(&self, category: CareerCategory) -> &'static [&'static str] {
        self.topic_keywords
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_rules_and_topics() {
        let catalog = Catalog::default();
        for (category, _) in catalog.career_rules {
            assert!(
                !catalog.topic_keywords_for(*category).is_empty(),
                "{category} has no topic keywords"
            );
        }
    }

    #[test]
    fn test_career_rules_follow_precedence_order() {
        let order: Vec<_> = CAREER_RULES.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                CareerCategory::ComputerScience,
                CareerCategory::Ai,
                CareerCategory::Engineering,
                CareerCategory::NaturalScience,
                CareerCategory::Medicine,
                CareerCategory::BusinessManagement,
                CareerCategory::BusinessEconomics,
                CareerCategory::Humanities,
                CareerCategory::Education,
            ]
        );
    }
}
