//! Canned career-advice responses.
//!
//! A query is matched against an ordered list of keyword rules; the first rule
//! whose keyword appears in the query (case-insensitively) picks the template.
//! Queries that match nothing get the general advice template.

mod templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    ResumeAnalysis,
    InterviewPreparation,
    CareerPathGuidance,
    GeneralAdvice,
}

/// Keyword rules in priority order. Keywords are lowercase.
const RULES: &[(&str, Topic)] = &[
    ("resume", Topic::ResumeAnalysis),
    ("interview", Topic::InterviewPreparation),
    ("career", Topic::CareerPathGuidance),
];

impl Topic {
    /// Classify a free-text query. Always returns a topic.
    pub fn classify(query: &str) -> Self {
        let query = query.to_lowercase();
        RULES
            .iter()
            .find(|(keyword, _)| query.contains(keyword))
            .map(|(_, topic)| *topic)
            .unwrap_or(Topic::GeneralAdvice)
    }

    /// The fixed HTML block for this topic.
    pub fn template(self) -> &'static str {
        match self {
            Topic::ResumeAnalysis => templates::RESUME_ANALYSIS,
            Topic::InterviewPreparation => templates::INTERVIEW_PREPARATION,
            Topic::CareerPathGuidance => templates::CAREER_PATH_GUIDANCE,
            Topic::GeneralAdvice => templates::GENERAL_ADVICE,
        }
    }
}
