//! Heuristic parsing of model output into structured fields.
//!
//! Free-text tasks (explain, summarize) use a line-scan state machine:
//! a `current_section` cursor advances whenever a line contains a known
//! header keyword, and content lines are dispatched by the kind of the
//! active section. List tasks (quiz, flashcards) extract the first
//! bracketed JSON array from the raw text and validate each record.
//!
//! Parsing never fails: malformed output degrades to empty fields,
//! which the defaulting policy backfills afterwards.

use concepta_common::{Definition, Flashcard, QuizQuestion};
use serde_json::Value;

/// List-section caps. Small models ramble; extra items are dropped.
const MAX_STEPS: usize = 5;
const MAX_KEY_POINTS: usize = 5;

// ============================================================================
// Free-text tasks
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExplainSection {
    Explanation,
    Steps,
    Analogy,
    KeyPoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SummarySection {
    Summary,
    KeyPoints,
    Definitions,
    ExamTips,
}

/// Header keyword tables, matched case-insensitively as substrings of
/// the trimmed line, in priority order. A line that matches a header is
/// consumed and contributes no content, even if it also looks like a
/// bullet.
const EXPLAIN_HEADERS: &[(&str, ExplainSection)] = &[
    ("SIMPLE EXPLANATION", ExplainSection::Explanation),
    ("STEPS", ExplainSection::Steps),
    ("ANALOGY", ExplainSection::Analogy),
    ("KEY POINTS", ExplainSection::KeyPoints),
];

const SUMMARY_HEADERS: &[(&str, SummarySection)] = &[
    ("SUMMARY", SummarySection::Summary),
    ("KEY POINTS", SummarySection::KeyPoints),
    ("DEFINITIONS", SummarySection::Definitions),
    ("EXAM TIPS", SummarySection::ExamTips),
];

/// Parsed fields of an explain response. Any field may come back empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExplainFields {
    pub simple_explanation: String,
    pub steps: Vec<String>,
    pub analogy: String,
    pub key_points: Vec<String>,
}

/// Parsed fields of a summarize response. Any field may come back empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SummaryFields {
    pub summary: String,
    pub key_points: Vec<String>,
    pub definitions: Vec<Definition>,
    pub exam_tips: Vec<String>,
}

pub fn parse_explain(text: &str) -> ExplainFields {
    let mut out = ExplainFields::default();
    let mut current: Option<ExplainSection> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(section) = match_header(EXPLAIN_HEADERS, line) {
            current = Some(section);
            continue;
        }
        match current {
            Some(ExplainSection::Explanation) => {
                // First non-empty line wins; the rest of the section is noise.
                if out.simple_explanation.is_empty() {
                    out.simple_explanation = line.to_string();
                }
            }
            Some(ExplainSection::Steps) => {
                if out.steps.len() < MAX_STEPS {
                    if let Some(step) = numbered_item(line) {
                        out.steps.push(step);
                    }
                }
            }
            Some(ExplainSection::Analogy) => {
                if out.analogy.is_empty() {
                    out.analogy = line.to_string();
                }
            }
            Some(ExplainSection::KeyPoints) => {
                if out.key_points.len() < MAX_KEY_POINTS {
                    if let Some(point) = bullet_item(line) {
                        out.key_points.push(point);
                    }
                }
            }
            None => {}
        }
    }
    out
}

pub fn parse_summary(text: &str) -> SummaryFields {
    let mut out = SummaryFields::default();
    let mut current: Option<SummarySection> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(section) = match_header(SUMMARY_HEADERS, line) {
            current = Some(section);
            continue;
        }
        match current {
            Some(SummarySection::Summary) => {
                if out.summary.is_empty() {
                    out.summary = line.to_string();
                }
            }
            Some(SummarySection::KeyPoints) => {
                if out.key_points.len() < MAX_KEY_POINTS {
                    if let Some(point) = bullet_item(line) {
                        out.key_points.push(point);
                    }
                }
            }
            Some(SummarySection::Definitions) => {
                if let Some((term, definition)) = line.split_once(':') {
                    out.definitions.push(Definition {
                        term: term.trim().to_string(),
                        definition: definition.trim().to_string(),
                    });
                }
            }
            Some(SummarySection::ExamTips) => {
                if let Some(tip) = bullet_item(line) {
                    out.exam_tips.push(tip);
                }
            }
            None => {}
        }
    }
    out
}

fn match_header<S: Copy>(table: &[(&str, S)], line: &str) -> Option<S> {
    let upper = line.to_uppercase();
    table
        .iter()
        .find(|(keyword, _)| upper.contains(keyword))
        .map(|(_, section)| *section)
}

/// Accept `1.`-`5.`, `-` or `*` markers; returns the stripped item.
fn numbered_item(line: &str) -> Option<String> {
    const MARKERS: [&str; 7] = ["1.", "2.", "3.", "4.", "5.", "-", "*"];
    if !MARKERS.iter().any(|m| line.starts_with(m)) {
        return None;
    }
    let item = line
        .trim_start_matches(|c: char| "12345.-* ".contains(c))
        .trim()
        .to_string();
    (!item.is_empty()).then_some(item)
}

/// Accept `-` or `*` markers; returns the stripped item.
fn bullet_item(line: &str) -> Option<String> {
    if !(line.starts_with('-') || line.starts_with('*')) {
        return None;
    }
    let item = line
        .trim_start_matches(|c: char| "-* ".contains(c))
        .trim()
        .to_string();
    (!item.is_empty()).then_some(item)
}

// ============================================================================
// List tasks
// ============================================================================

/// Greedy bracket span: first `[` through the *last* `]`.
///
/// Deliberately greedy so nested objects inside the array survive; a
/// non-greedy match would cut the array at the first closing bracket.
/// Fragile against stray brackets in surrounding prose, but kept for
/// compatibility with how models actually wrap their output.
fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extract and validate quiz questions, at most `limit`.
///
/// Records missing `question` or `answer` are dropped; missing `type`
/// and `explanation` are defaulted. An empty result signals total
/// failure and the caller substitutes the fallback set.
pub fn parse_quiz(text: &str, limit: usize) -> Vec<QuizQuestion> {
    let Some(raw) = extract_json_array(text) else {
        return Vec::new();
    };
    let Ok(items) = serde_json::from_str::<Vec<Value>>(raw) else {
        return Vec::new();
    };

    let mut questions = Vec::new();
    for item in &items {
        if questions.len() == limit {
            break;
        }
        let Some(question) = item.get("question").and_then(Value::as_str) else {
            continue;
        };
        let Some(answer) = item.get("answer").and_then(Value::as_str) else {
            continue;
        };
        let question_type = item
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("short")
            .to_string();
        let explanation = item
            .get("explanation")
            .and_then(Value::as_str)
            .unwrap_or("Explanation not provided.")
            .to_string();
        let options = item.get("options").and_then(Value::as_array).map(|arr| {
            arr.iter()
                .filter_map(|o| o.as_str().map(str::to_string))
                .collect()
        });
        questions.push(QuizQuestion {
            question: question.to_string(),
            question_type,
            options,
            answer: answer.to_string(),
            explanation,
        });
    }
    questions
}

/// Extract and validate flashcards, at most `limit`.
///
/// Each surviving record carries exactly `question` and `answer`; any
/// extra fields the model invented are dropped.
pub fn parse_flashcards(text: &str, limit: usize) -> Vec<Flashcard> {
    let Some(raw) = extract_json_array(text) else {
        return Vec::new();
    };
    let Ok(items) = serde_json::from_str::<Vec<Value>>(raw) else {
        return Vec::new();
    };

    let mut cards = Vec::new();
    for item in &items {
        if cards.len() == limit {
            break;
        }
        let Some(question) = item.get("question").and_then(Value::as_str) else {
            continue;
        };
        let Some(answer) = item.get("answer").and_then(Value::as_str) else {
            continue;
        };
        cards.push(Flashcard {
            question: question.to_string(),
            answer: answer.to_string(),
        });
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPLAIN_SAMPLE: &str = "\
SIMPLE EXPLANATION:
This concept helps organize information and solve problems systematically.

STEPS:
1. Understand the basic definition
2. Learn the key components
3. Practice with examples
4. Apply in real situations

ANALOGY:
Like learning to cook - start with ingredients, follow recipes, then create your own dishes.

KEY POINTS:
- Focus on core principles
- Practice regularly
- Connect to real-world applications";

    #[test]
    fn test_parse_explain_full_template() {
        let fields = parse_explain(EXPLAIN_SAMPLE);
        assert_eq!(
            fields.simple_explanation,
            "This concept helps organize information and solve problems systematically."
        );
        assert_eq!(fields.steps.len(), 4);
        assert_eq!(fields.steps[0], "Understand the basic definition");
        assert!(!fields.analogy.is_empty());
        assert_eq!(
            fields.key_points,
            vec![
                "Focus on core principles",
                "Practice regularly",
                "Connect to real-world applications"
            ]
        );
    }

    #[test]
    fn test_parse_explain_is_idempotent() {
        assert_eq!(parse_explain(EXPLAIN_SAMPLE), parse_explain(EXPLAIN_SAMPLE));
    }

    #[test]
    fn test_explanation_first_line_wins() {
        let text = "SIMPLE EXPLANATION:\nFirst line.\nSecond line is ignored.";
        let fields = parse_explain(text);
        assert_eq!(fields.simple_explanation, "First line.");
    }

    #[test]
    fn test_steps_capped_at_five() {
        let text = "STEPS:\n1. a\n2. b\n3. c\n4. d\n5. e\n- f\n* g";
        let fields = parse_explain(text);
        assert_eq!(fields.steps.len(), 5);
    }

    #[test]
    fn test_steps_ignore_unmarked_lines() {
        let text = "STEPS:\nJust prose without a marker\n1. real step";
        let fields = parse_explain(text);
        assert_eq!(fields.steps, vec!["real step"]);
    }

    #[test]
    fn test_key_points_header_followed_by_prose_stays_empty() {
        let text = "KEY POINTS:\nThese are not bullets\nNeither is this";
        let fields = parse_explain(text);
        assert!(fields.key_points.is_empty());
    }

    #[test]
    fn test_header_wins_over_bullet_on_same_line() {
        // A bullet that mentions a header keyword switches sections
        // instead of contributing content.
        let text = "STEPS:\n1. first\n- Key Points to remember\n- not a step anymore";
        let fields = parse_explain(text);
        assert_eq!(fields.steps, vec!["first"]);
        assert_eq!(fields.key_points, vec!["not a step anymore"]);
    }

    #[test]
    fn test_content_before_any_header_is_dropped() {
        let text = "Sure, here is the explanation you asked for!\nSIMPLE EXPLANATION:\nActual.";
        let fields = parse_explain(text);
        assert_eq!(fields.simple_explanation, "Actual.");
    }

    #[test]
    fn test_header_detection_is_case_insensitive() {
        let text = "simple explanation:\nlowercase headers still count.";
        let fields = parse_explain(text);
        assert_eq!(fields.simple_explanation, "lowercase headers still count.");
    }

    #[test]
    fn test_parse_summary_full_template() {
        let text = "\
SUMMARY:
The content covers essential concepts.

KEY POINTS:
- Core concepts are explained clearly
* Examples help understanding

DEFINITIONS:
Concept: A fundamental idea or principle
Application: How concepts are used in practice

EXAM TIPS:
- Review key definitions
- Practice with examples";
        let fields = parse_summary(text);
        assert_eq!(fields.summary, "The content covers essential concepts.");
        assert_eq!(fields.key_points.len(), 2);
        assert_eq!(fields.definitions.len(), 2);
        assert_eq!(fields.definitions[0].term, "Concept");
        assert_eq!(
            fields.definitions[0].definition,
            "A fundamental idea or principle"
        );
        assert_eq!(fields.exam_tips.len(), 2);
    }

    #[test]
    fn test_definitions_split_on_first_colon_only() {
        let text = "DEFINITIONS:\nURL: Uniform Resource Locator: an address";
        let fields = parse_summary(text);
        assert_eq!(fields.definitions.len(), 1);
        assert_eq!(fields.definitions[0].term, "URL");
        assert_eq!(
            fields.definitions[0].definition,
            "Uniform Resource Locator: an address"
        );
    }

    #[test]
    fn test_definitions_without_colon_are_ignored() {
        let text = "DEFINITIONS:\nno colon on this line";
        let fields = parse_summary(text);
        assert!(fields.definitions.is_empty());
    }

    #[test]
    fn test_parse_quiz_extracts_array_from_noise() {
        let text = r#"noise [{"question":"Q1","answer":"A1"}] trailing"#;
        let questions = parse_quiz(text, 5);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Q1");
        assert_eq!(questions[0].question_type, "short");
        assert_eq!(questions[0].explanation, "Explanation not provided.");
        assert!(questions[0].options.is_none());
    }

    #[test]
    fn test_parse_quiz_drops_records_missing_answer() {
        let text = r#"[{"question":"Q1"},{"question":"Q2","answer":"A2"}]"#;
        let questions = parse_quiz(text, 5);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Q2");
    }

    #[test]
    fn test_parse_quiz_all_invalid_yields_empty() {
        let text = r#"[{"question":"Q1"}]"#;
        assert!(parse_quiz(text, 5).is_empty());
    }

    #[test]
    fn test_parse_quiz_respects_limit() {
        let text = r#"[
            {"question":"Q1","answer":"A"},
            {"question":"Q2","answer":"A"},
            {"question":"Q3","answer":"A"}
        ]"#;
        assert_eq!(parse_quiz(text, 2).len(), 2);
    }

    #[test]
    fn test_parse_quiz_keeps_mcq_options() {
        let text = r#"[{"question":"Q","type":"mcq","options":["A","B"],"answer":"B","explanation":"E"}]"#;
        let questions = parse_quiz(text, 5);
        assert_eq!(
            questions[0].options,
            Some(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_greedy_span_tolerates_nested_objects() {
        // Non-greedy extraction would stop at the options array's `]`.
        let text = r#"Here you go:
[
  {"question":"Q","type":"mcq","options":["A","B","C"],"answer":"A","explanation":"E"},
  {"question":"Q2","answer":"True"}
]
Hope that helps!"#;
        let questions = parse_quiz(text, 5);
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_parse_quiz_no_array_yields_empty() {
        assert!(parse_quiz("no brackets here", 5).is_empty());
        assert!(parse_quiz("] reversed [", 5).is_empty());
    }

    #[test]
    fn test_parse_quiz_unparseable_array_yields_empty() {
        assert!(parse_quiz("[not json]", 5).is_empty());
    }

    #[test]
    fn test_parse_flashcards_strips_extra_fields() {
        let text = r#"[{"question":"Q","answer":"A","hint":"ignored"}]"#;
        let cards = parse_flashcards(text, 8);
        assert_eq!(
            cards,
            vec![Flashcard {
                question: "Q".to_string(),
                answer: "A".to_string()
            }]
        );
    }

    #[test]
    fn test_parse_flashcards_never_pads() {
        let text = r#"[{"question":"Q1","answer":"A1"},{"question":"Q2","answer":"A2"}]"#;
        assert_eq!(parse_flashcards(text, 3).len(), 2);
    }

    #[test]
    fn test_parse_flashcards_respects_limit() {
        let items: Vec<String> = (0..10)
            .map(|i| format!(r#"{{"question":"Q{i}","answer":"A{i}"}}"#))
            .collect();
        let text = format!("[{}]", items.join(","));
        assert_eq!(parse_flashcards(&text, 8).len(), 8);
    }
}
