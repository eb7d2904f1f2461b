//! Source extraction — cuts the record text into labelled excerpts that each
//! ground one interview question.
//!
//! Two independent scans run over the same text:
//! - coursework notes: `과목: 내용` blocks, ended by the next label line, a
//!   section header, a career statement, or end of text
//! - extracurricular blocks: everything under one of the four section headers
//!   until the next header or end of text
//!
//! No LLM calls.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::career::{is_career_line, CareerCategory};
use crate::extraction::catalog::Catalog;

/// Maximum excerpt length, in characters.
pub const MAX_EXCERPT_CHARS: usize = 250;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:[\[【<]\s*(자율활동|동아리활동|진로활동|봉사활동)\s*[\]】>]|(자율활동|동아리활동|진로활동|봉사활동)\s*(?:[:：]|$))\s*[:：]?\s*(.*)$",
    )
    .unwrap()
});

static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^\s:：\[\]【】<>][^:：\[\]【】<>]{0,24}?)\s*[:：]\s*(.*)$").unwrap()
});

/// Where an excerpt came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// 세부능력특기사항 — a subject teacher's note.
    CourseworkNote,
    Autonomous,
    Club,
    Career,
    Service,
}

impl ActivityKind {
    /// Section headers in extraction order.
    pub const EXTRACURRICULAR: [ActivityKind; 4] = [
        ActivityKind::Autonomous,
        ActivityKind::Club,
        ActivityKind::Career,
        ActivityKind::Service,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::CourseworkNote => "세부능력특기사항",
            ActivityKind::Autonomous => "자율활동",
            ActivityKind::Club => "동아리활동",
            ActivityKind::Career => "진로활동",
            ActivityKind::Service => "봉사활동",
        }
    }

    fn from_header(header: &str) -> Option<Self> {
        Self::EXTRACURRICULAR
            .into_iter()
            .find(|kind| kind.name() == header)
    }
}

/// A labelled excerpt of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceItem {
    /// Subject name for coursework notes, section name for activities.
    pub subject: String,
    pub activity: ActivityKind,
    /// At most `MAX_EXCERPT_CHARS` characters, no line breaks.
    pub excerpt: String,
}

impl SourceItem {
    /// "수학(세부능력특기사항)" for coursework notes, "동아리활동" for activities.
    pub fn label(&self) -> String {
        match self.activity {
            ActivityKind::CourseworkNote => {
                format!("{}({})", self.subject, self.activity.name())
            }
            _ => self.subject.clone(),
        }
    }

    /// Case-insensitive substring search over label and excerpt.
    fn mentions_any(&self, needles: &[&str]) -> bool {
        let label = self.label().to_lowercase();
        let excerpt = self.excerpt.to_lowercase();
        needles.iter().any(|n| {
            let n = n.to_lowercase();
            label.contains(&n) || excerpt.contains(&n)
        })
    }
}

enum Line<'a> {
    Header(ActivityKind, &'a str),
    Career,
    Label(&'a str, &'a str),
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if let Some(caps) = HEADER_RE.captures(line) {
        let header = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str());
        if let Some(kind) = header.and_then(ActivityKind::from_header) {
            let rest = caps.get(3).map(|m| m.as_str()).unwrap_or("");
            return Line::Header(kind, rest);
        }
    }
    if is_career_line(line) {
        return Line::Career;
    }
    if let Some(caps) = LABEL_RE.captures(line) {
        let label = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        // "1:2" or "10:30" is a ratio or a time, not a subject.
        if !label.is_empty() && !label.ends_with(|c: char| c.is_ascii_digit()) {
            let rest = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            return Line::Label(label, rest);
        }
    }
    Line::Text(line)
}

/// Extracts coursework notes followed by extracurricular blocks (in header order).
pub fn extract_sources(text: &str) -> Vec<SourceItem> {
    let mut items = extract_coursework_notes(text);
    items.extend(extract_activity_blocks(text));
    items
}

/// `과목: 내용` blocks, in text order.
pub fn extract_coursework_notes(text: &str) -> Vec<SourceItem> {
    let mut items = Vec::new();
    let mut current: Option<(&str, Vec<&str>)> = None;

    for line in text.lines() {
        match classify(line) {
            Line::Label(subject, rest) => {
                flush(&mut items, current.take(), ActivityKind::CourseworkNote);
                current = Some((subject, vec![rest]));
            }
            Line::Header(..) | Line::Career => {
                flush(&mut items, current.take(), ActivityKind::CourseworkNote);
            }
            Line::Text(body) => {
                if let Some((_, parts)) = current.as_mut() {
                    parts.push(body);
                }
            }
        }
    }
    flush(&mut items, current, ActivityKind::CourseworkNote);

    items
}

/// Blocks under the four section headers, grouped by header order.
pub fn extract_activity_blocks(text: &str) -> Vec<SourceItem> {
    let mut items = Vec::new();
    let mut current: Option<(ActivityKind, Vec<&str>)> = None;

    for line in text.lines() {
        match classify(line) {
            Line::Header(kind, rest) => {
                if let Some((prev, parts)) = current.take() {
                    flush(&mut items, Some((prev.name(), parts)), prev);
                }
                current = Some((kind, vec![rest]));
            }
            _ => {
                if let Some((_, parts)) = current.as_mut() {
                    parts.push(line);
                }
            }
        }
    }
    if let Some((prev, parts)) = current {
        flush(&mut items, Some((prev.name(), parts)), prev);
    }

    // Stable: blocks of the same header keep their text order.
    items.sort_by_key(|item| {
        ActivityKind::EXTRACURRICULAR
            .iter()
            .position(|k| *k == item.activity)
    });
    items
}

fn flush(items: &mut Vec<SourceItem>, block: Option<(&str, Vec<&str>)>, activity: ActivityKind) {
    let Some((subject, parts)) = block else {
        return;
    };
    let excerpt = make_excerpt(&parts);
    if excerpt.is_empty() {
        return;
    }
    items.push(SourceItem {
        subject: subject.to_string(),
        activity,
        excerpt,
    });
}

/// Joins block lines with single spaces and truncates to `MAX_EXCERPT_CHARS`.
fn make_excerpt(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .flat_map(|p| p.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");
    match joined.char_indices().nth(MAX_EXCERPT_CHARS) {
        Some((cut, _)) => joined[..cut].trim_end().to_string(),
        None => joined,
    }
}

/// Drops items whose label or excerpt is generic praise. Order preserving.
pub fn filter_attitude(items: Vec<SourceItem>, catalog: &Catalog) -> Vec<SourceItem> {
    items
        .into_iter()
        .filter(|item| !item.mentions_any(catalog.attitude_phrases))
        .collect()
}

/// Items relevant to a career category, by the catalogue's topic keywords.
/// Empty when the category is unknown or nothing matches.
pub fn relevant_to<'a>(
    items: &'a [SourceItem],
    category: Option<CareerCategory>,
    catalog: &Catalog,
) -> Vec<&'a SourceItem> {
    let Some(category) = category else {
        return Vec::new();
    };
    let keywords = catalog.topic_keywords_for(category);
    items
        .iter()
        .filter(|item| item.mentions_any(keywords))
        .collect()
}
