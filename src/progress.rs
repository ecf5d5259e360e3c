use std::collections::HashMap;

use serde::Serialize;

use crate::prompts::QuestionCategory;

/// Session-scoped progress counters. Owned by the surface loop and passed in
/// explicitly so each session (and each test) gets its own isolated instance;
/// nothing here is global. Counters only ever increase, are never persisted,
/// and reset only when the process restarts.
#[derive(Debug, Serialize)]
pub struct ProgressTracker {
    questions_solved: HashMap<QuestionCategory, u32>,
    mock_interviews_taken: u32,
    feedback_provided: u32,
    tips_retrieved: u32,
}

impl ProgressTracker {
    pub fn new() -> Self {
        let questions_solved = QuestionCategory::ALL_CATEGORIES
            .iter()
            .map(|category| (*category, 0))
            .collect();
        Self {
            questions_solved,
            mock_interviews_taken: 0,
            feedback_provided: 0,
            tips_retrieved: 0,
        }
    }

    pub fn record_questions(&mut self, category: QuestionCategory, count: u32) {
        *self.questions_solved.entry(category).or_insert(0) += count;
    }

    pub fn record_feedback(&mut self) {
        self.feedback_provided += 1;
    }

    pub fn record_mock_interview(&mut self) {
        self.mock_interviews_taken += 1;
    }

    pub fn record_tips(&mut self) {
        self.tips_retrieved += 1;
    }

    pub fn questions_solved(&self, category: QuestionCategory) -> u32 {
        self.questions_solved.get(&category).copied().unwrap_or(0)
    }

    pub fn mock_interviews_taken(&self) -> u32 {
        self.mock_interviews_taken
    }

    pub fn feedback_provided(&self) -> u32 {
        self.feedback_provided
    }

    pub fn tips_retrieved(&self) -> u32 {
        self.tips_retrieved
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
