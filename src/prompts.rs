use serde::{Deserialize, Serialize};

/// Question category selectable on the form. The prompt template lowercases
/// the label ("Case Study" becomes "case study"), so each variant carries both
/// a display label and a prompt label.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuestionCategory {
    Behavioral,
    Technical,
    Situational,
    #[serde(rename = "Case Study")]
    CaseStudy,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
    All,
}

impl QuestionCategory {
    pub const ALL_CATEGORIES: [QuestionCategory; 6] = [
        QuestionCategory::Behavioral,
        QuestionCategory::Technical,
        QuestionCategory::Situational,
        QuestionCategory::CaseStudy,
        QuestionCategory::ProblemSolving,
        QuestionCategory::All,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            QuestionCategory::Behavioral => "Behavioral",
            QuestionCategory::Technical => "Technical",
            QuestionCategory::Situational => "Situational",
            QuestionCategory::CaseStudy => "Case Study",
            QuestionCategory::ProblemSolving => "Problem Solving",
            QuestionCategory::All => "All",
        }
    }

    /// Lower-case form used inside the instruction text.
    pub fn prompt_label(&self) -> &str {
        match self {
            QuestionCategory::Behavioral => "behavioral",
            QuestionCategory::Technical => "technical",
            QuestionCategory::Situational => "situational",
            QuestionCategory::CaseStudy => "case study",
            QuestionCategory::ProblemSolving => "problem solving",
            QuestionCategory::All => "all",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Behavioral" => Some(QuestionCategory::Behavioral),
            "Technical" => Some(QuestionCategory::Technical),
            "Situational" => Some(QuestionCategory::Situational),
            "Case Study" => Some(QuestionCategory::CaseStudy),
            "Problem Solving" => Some(QuestionCategory::ProblemSolving),
            "All" => Some(QuestionCategory::All),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL_LEVELS: [Difficulty; 3] =
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// One question-generation submission from the form. Built per submission,
/// discarded after use.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub role: String,
    pub category: QuestionCategory,
    pub difficulty: Difficulty,
    pub count: u32,
}

/// One feedback submission: the question that was asked and the candidate's
/// answer.
#[derive(Clone, Debug)]
pub struct FeedbackRequest {
    pub question: String,
    pub answer: String,
}

/// Builds the question-generation instruction. Pure string formatting:
/// identical inputs always produce the identical prompt, and no input can
/// make it fail.
pub fn build_question_prompt(request: &GenerationRequest) -> String {
    format!(
        "Generate {} {} {} interview questions for the role of {}. Only include {} questions.",
        request.count,
        request.difficulty.as_str(),
        request.category.prompt_label(),
        request.role,
        request.category.prompt_label(),
    )
}

/// Builds the feedback instruction. Note that only the question appears in
/// the text: the candidate's answer rides along on the request but is never
/// echoed into the instruction, matching upstream behavior (see DESIGN.md --
/// this may well be a defect there, kept verbatim rather than silently fixed).
pub fn build_feedback_prompt(request: &FeedbackRequest) -> String {
    format!(
        "Provide feedback on the following answer for the question: '{}'. Suggest the most eligible answer.",
        request.question,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technical_request() -> GenerationRequest {
        GenerationRequest {
            role: "Software Engineer".to_string(),
            category: QuestionCategory::Technical,
            difficulty: Difficulty::Medium,
            count: 3,
        }
    }

    #[test]
    fn question_prompt_exact_text() {
        assert_eq!(
            build_question_prompt(&technical_request()),
            "Generate 3 Medium technical interview questions for the role of Software Engineer. Only include technical questions."
        );
    }

    #[test]
    fn question_prompt_is_deterministic() {
        let request = technical_request();
        assert_eq!(
            build_question_prompt(&request),
            build_question_prompt(&request)
        );
    }

    #[test]
    fn question_prompt_lowercases_multiword_categories() {
        let request = GenerationRequest {
            role: "Product Manager".to_string(),
            category: QuestionCategory::CaseStudy,
            difficulty: Difficulty::Hard,
            count: 2,
        };
        assert_eq!(
            build_question_prompt(&request),
            "Generate 2 Hard case study interview questions for the role of Product Manager. Only include case study questions."
        );

        let request = GenerationRequest {
            category: QuestionCategory::ProblemSolving,
            ..request
        };
        assert!(build_question_prompt(&request).contains("problem solving interview questions"));
    }

    #[test]
    fn question_prompt_accepts_empty_role() {
        let request = GenerationRequest {
            role: String::new(),
            category: QuestionCategory::All,
            difficulty: Difficulty::Easy,
            count: 1,
        };
        assert_eq!(
            build_question_prompt(&request),
            "Generate 1 Easy all interview questions for the role of . Only include all questions."
        );
    }

    #[test]
    fn feedback_prompt_exact_text() {
        let request = FeedbackRequest {
            question: "Explain polymorphism.".to_string(),
            answer: "It means many forms.".to_string(),
        };
        assert_eq!(
            build_feedback_prompt(&request),
            "Provide feedback on the following answer for the question: 'Explain polymorphism.'. Suggest the most eligible answer."
        );
    }

    #[test]
    fn feedback_prompt_does_not_echo_answer() {
        let request = FeedbackRequest {
            question: "Q".to_string(),
            answer: "a highly distinctive answer string".to_string(),
        };
        assert!(!build_feedback_prompt(&request).contains(&request.answer));
    }

    #[test]
    fn category_labels_round_trip() {
        for category in QuestionCategory::ALL_CATEGORIES {
            assert_eq!(QuestionCategory::from_str(category.as_str()), Some(category));
        }
        assert_eq!(QuestionCategory::from_str("Unknown"), None);
    }
}
