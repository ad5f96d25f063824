//! Defaulting policy: canned values that guarantee every output field
//! is populated, however badly the model output parsed.
//!
//! Free-text fields are backfilled one by one; list tasks that parsed
//! nothing at all get a small fixed example set instead (count limits
//! are not reapplied to that set).

use crate::interpret::{ExplainFields, SummaryFields};
use crate::prompt::truncate_chars;
use concepta_common::{Definition, Flashcard, QuizQuestion};

pub fn backfill_explain(fields: &mut ExplainFields, topic: &str, difficulty: &str) {
    if fields.simple_explanation.is_empty() {
        fields.simple_explanation = format!("Explanation of {topic} at {difficulty} level.");
    }
    if fields.steps.is_empty() {
        fields.steps = vec![
            "Learn the basics".to_string(),
            "Understand components".to_string(),
            "Practice applications".to_string(),
        ];
    }
    if fields.analogy.is_empty() {
        fields.analogy = format!(
            "Understanding {topic} is like learning any new skill - start simple, practice, master."
        );
    }
    if fields.key_points.is_empty() {
        fields.key_points = vec![
            "Focus on fundamentals".to_string(),
            "Practice regularly".to_string(),
            "Apply in real situations".to_string(),
        ];
    }
}

pub fn backfill_summary(fields: &mut SummaryFields, length: &str) {
    if fields.summary.is_empty() {
        fields.summary = format!("Summary of notes for {length} review.");
    }
    if fields.key_points.is_empty() {
        fields.key_points = vec![
            "Main concept".to_string(),
            "Important detail".to_string(),
            "Key application".to_string(),
        ];
    }
    if fields.definitions.is_empty() {
        fields.definitions = vec![
            Definition {
                term: "Concept".to_string(),
                definition: "Fundamental idea".to_string(),
            },
            Definition {
                term: "Application".to_string(),
                definition: "Practical use".to_string(),
            },
        ];
    }
    if fields.exam_tips.is_empty() {
        fields.exam_tips = vec![
            "Review regularly".to_string(),
            "Practice problems".to_string(),
            "Understand concepts".to_string(),
        ];
    }
}

/// Fixed example questions returned when quiz extraction fails outright.
pub fn fallback_quiz(content: &str) -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            question: format!(
                "What is the main topic of: {}...?",
                truncate_chars(content, 50)
            ),
            question_type: "mcq".to_string(),
            options: Some(vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ]),
            answer: "Option B".to_string(),
            explanation: "This is correct based on the content.".to_string(),
        },
        QuizQuestion {
            question: "True or False: This topic is important to understand.".to_string(),
            question_type: "truefalse".to_string(),
            options: None,
            answer: "True".to_string(),
            explanation: "Understanding this topic is fundamental.".to_string(),
        },
    ]
}

/// Fixed example cards returned when flashcard extraction fails outright.
pub fn fallback_flashcards(content: &str) -> Vec<Flashcard> {
    vec![
        Flashcard {
            question: format!("What is {}...?", truncate_chars(content, 30)),
            answer: "Important concept or definition.".to_string(),
        },
        Flashcard {
            question: "Why is this topic important?".to_string(),
            answer: "It helps understand fundamental principles.".to_string(),
        },
    ]
}
