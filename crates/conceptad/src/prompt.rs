//! Prompt templates for each study task.
//!
//! Builders are pure: truncated user content in, instruction text out.
//! Each template pins the exact output layout the interpreter scans
//! for, so parsing works the same on real and mock responses.

/// Input limits, applied by the handlers before prompt construction.
/// Oversized input is truncated, never rejected.
pub const MAX_TOPIC_CHARS: usize = 500;
pub const MAX_NOTES_CHARS: usize = 2000;
pub const MAX_QUIZ_CONTENT_CHARS: usize = 1000;
pub const MAX_FLASHCARD_CONTENT_CHARS: usize = 800;

/// Output caps for list tasks; small models degrade past these.
pub const MAX_QUIZ_QUESTIONS: usize = 5;
pub const MAX_FLASHCARDS: usize = 8;

/// Truncate to at most `max` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

pub fn explain_prompt(topic: &str, difficulty: &str) -> String {
    format!(
        r#"Explain "{topic}" for a {difficulty} level student.

Please provide in this exact format:

SIMPLE EXPLANATION:
[2-3 sentences, very simple]

STEPS:
1. [First step - concise]
2. [Second step - concise]
3. [Third step - concise]

ANALOGY:
[One simple real-world comparison]

KEY POINTS:
- [Most important point]
- [Second important point]
- [Third important point]

Use simple language and avoid technical jargon."#
    )
}

pub fn summarize_prompt(notes: &str) -> String {
    format!(
        r#"Summarize these notes concisely:

{notes}

Provide in this exact format:

SUMMARY:
[2-3 sentence overview]

KEY POINTS:
- [Point 1]
- [Point 2]
- [Point 3]

DEFINITIONS:
[Term1]: [Simple definition]
[Term2]: [Simple definition]

EXAM TIPS:
- [Tip 1]
- [Tip 2]

Keep it concise and focused on essentials."#
    )
}

pub fn quiz_prompt(content: &str, count: usize) -> String {
    format!(
        r#"Create {count} quiz questions about this content:

{content}

Format as JSON array with exactly these fields for each question:
- question: string
- type: "mcq" or "truefalse" or "short"
- options: array of strings (only for MCQ)
- answer: string
- explanation: string

Example format:
[
  {{
    "question": "What is...?",
    "type": "mcq",
    "options": ["A", "B", "C", "D"],
    "answer": "B",
    "explanation": "Because..."
  }}
]

Create {count} diverse questions."#
    )
}

pub fn flashcards_prompt(content: &str, count: usize) -> String {
    format!(
        r#"Create {count} flashcards about:

{content}

Format as JSON array with question and answer pairs:
[
  {{
    "question": "Clear question?",
    "answer": "Concise answer"
  }}
]

Create {count} focused flashcards."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("hello", 500), "hello");
    }

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        let input = "é".repeat(600);
        let truncated = truncate_chars(&input, 500);
        assert_eq!(truncated.chars().count(), 500);
    }

    #[test]
    fn test_explain_prompt_embeds_topic_and_difficulty() {
        let prompt = explain_prompt("photosynthesis", "beginner");
        assert!(prompt.contains("\"photosynthesis\""));
        assert!(prompt.contains("beginner level student"));
    }

    #[test]
    fn test_explain_prompt_pins_section_layout() {
        let prompt = explain_prompt("x", "beginner");
        for header in ["SIMPLE EXPLANATION:", "STEPS:", "ANALOGY:", "KEY POINTS:"] {
            assert!(prompt.contains(header), "missing {}", header);
        }
    }

    #[test]
    fn test_summarize_prompt_pins_section_layout() {
        let prompt = summarize_prompt("my notes");
        assert!(prompt.contains("my notes"));
        for header in ["SUMMARY:", "KEY POINTS:", "DEFINITIONS:", "EXAM TIPS:"] {
            assert!(prompt.contains(header), "missing {}", header);
        }
    }

    #[test]
    fn test_quiz_prompt_states_count_and_fields() {
        let prompt = quiz_prompt("the water cycle", 4);
        assert!(prompt.contains("Create 4 quiz questions"));
        assert!(prompt.contains("the water cycle"));
        assert!(prompt.contains("\"question\": \"What is...?\""));
    }

    #[test]
    fn test_flashcards_prompt_states_count() {
        let prompt = flashcards_prompt("ohm's law", 6);
        assert!(prompt.contains("Create 6 flashcards"));
        assert!(prompt.contains("ohm's law"));
    }
}
