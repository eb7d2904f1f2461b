//! Career intent — the per-grade "희망 분야" statements of a record, normalised
//! to a closed category set so topics can be filtered by grade.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::catalog::Catalog;

/// Grades tracked by a Korean high-school record.
pub const GRADES: [u8; 3] = [1, 2, 3];

/// Words that only decorate the statement ("공학 분야", "자연 계열").
const FILLER_WORDS: &[&str] = &["분야", "계열"];

static CAREER_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"희망[ \t]*분야[ \t]*[:：]?[ \t]*([^\r\n]*)").unwrap());

/// Normalised field of study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CareerCategory {
    ComputerScience,
    Ai,
    Engineering,
    NaturalScience,
    Medicine,
    BusinessManagement,
    BusinessEconomics,
    Humanities,
    Education,
}

impl CareerCategory {
    pub fn label(self) -> &'static str {
        match self {
            CareerCategory::ComputerScience => "컴퓨터공학",
            CareerCategory::Ai => "AI",
            CareerCategory::Engineering => "공학",
            CareerCategory::NaturalScience => "자연과학",
            CareerCategory::Medicine => "의학",
            CareerCategory::BusinessManagement => "경영",
            CareerCategory::BusinessEconomics => "경제",
            CareerCategory::Humanities => "인문",
            CareerCategory::Education => "교육",
        }
    }
}

impl fmt::Display for CareerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One grade's stated intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeIntent {
    /// Statement with filler words stripped.
    pub raw: String,
    pub category: Option<CareerCategory>,
}

impl GradeIntent {
    /// Text used in prompts: the category label when normalised, the raw phrase otherwise.
    pub fn label(&self) -> &str {
        match self.category {
            Some(category) => category.label(),
            None if self.raw.is_empty() => "미기재",
            None => &self.raw,
        }
    }
}

/// Grade (1–3) → stated intent. Grades without a marker are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerIntent {
    grades: BTreeMap<u8, GradeIntent>,
}

impl CareerIntent {
    pub fn get(&self, grade: u8) -> Option<&GradeIntent> {
        self.grades.get(&grade)
    }

    pub fn category(&self, grade: u8) -> Option<CareerCategory> {
        self.get(grade).and_then(|g| g.category)
    }

    /// Prompt label for a grade; "미기재" when the grade has no statement.
    pub fn label(&self, grade: u8) -> &str {
        self.get(grade).map(GradeIntent::label).unwrap_or("미기재")
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &GradeIntent)> {
        self.grades.iter().map(|(g, i)| (*g, i))
    }

    /// The highest grade that has a statement.
    pub fn latest(&self) -> Option<(u8, &GradeIntent)> {
        self.grades.iter().next_back().map(|(g, i)| (*g, i))
    }
}

/// Finds every "희망 분야" statement; the first three become grades 1, 2 and 3.
pub fn extract_career_intent(text: &str, catalog: &Catalog) -> CareerIntent {
    let grades = CAREER_MARKER_RE
        .captures_iter(text)
        .take(GRADES.len())
        .zip(GRADES)
        .map(|(caps, grade)| {
            let raw = strip_filler(&caps[1]);
            let category = normalize_career(&raw, catalog);
            (grade, GradeIntent { raw, category })
        })
        .collect();

    CareerIntent { grades }
}

/// True if the line is a career statement rather than coursework.
pub fn is_career_line(line: &str) -> bool {
    CAREER_MARKER_RE.is_match(line)
}

/// Maps a statement to its category. Rules are tried in catalogue order; first hit wins.
/// Matching ignores ASCII case ("ai" and "AI" are the same keyword).
pub fn normalize_career(raw: &str, catalog: &Catalog) -> Option<CareerCategory> {
    let statement = raw.to_lowercase();
    catalog
        .career_rules
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|kw| statement.contains(&kw.to_lowercase()))
        })
        .map(|(category, _)| *category)
}

fn strip_filler(statement: &str) -> String {
    statement
        .split_whitespace()
        .map(|word| {
            FILLER_WORDS
                .iter()
                .fold(word.to_string(), |w, filler| w.replace(filler, ""))
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
