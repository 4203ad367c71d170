//! Task descriptors: the declarative table behind every generation feature.
//!
//! Each `TaskKind` owns a static `TaskDescriptor` listing its input fields.
//! A field with `default: None` is required; optional fields fall back to their
//! documented default when absent or blank.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::errors::AppError;

pub const TONES: &[&str] = &[
    "Formal",
    "Professional",
    "Concise",
    "Creative",
    "Persuasive",
    "Friendly",
    "Direct",
];

pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
];

pub const RESUME_LENGTHS: &[&str] = &["Concise", "Standard", "Detailed"];
pub const COVER_LETTER_LENGTHS: &[&str] = &["Brief", "Standard", "Detailed"];
pub const QUESTION_TYPES: &[&str] = &["Behavioral", "Technical", "Situational", "General"];

const CRITIQUE_SECTION_TYPES: &[&str] = &[
    "Resume Summary",
    "Skills",
    "Experience",
    "Education",
    "Projects",
    "Achievements",
];
const EXPANSION_SECTION_TYPES: &[&str] = &[
    "Experience Bullet Point",
    "Project Description",
    "Summary Statement",
];
const SUMMARY_SECTION_TYPES: &[&str] = &["Experience", "Project", "Summary", "Education"];

/// Analysis modes of the job-description analyzer. Each renders a different template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisType {
    KeySkills,
    InterviewQuestions,
    AtsAdvice,
    SkillGap,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 4] = [
        AnalysisType::KeySkills,
        AnalysisType::InterviewQuestions,
        AnalysisType::AtsAdvice,
        AnalysisType::SkillGap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisType::KeySkills => "Key Skills and Requirements",
            AnalysisType::InterviewQuestions => "Potential Interview Questions",
            AnalysisType::AtsAdvice => "ATS Alignment Advice",
            AnalysisType::SkillGap => "Skill Gap Analysis",
        }
    }

    /// Exact, case-sensitive label match.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// Fields this branch needs beyond `jd_content`.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            AnalysisType::InterviewQuestions => &["user_experience_summary"],
            AnalysisType::SkillGap => &["user_skills"],
            AnalysisType::KeySkills | AnalysisType::AtsAdvice => &[],
        }
    }
}

const ANALYSIS_TYPES: &[&str] = &[
    "Key Skills and Requirements",
    "Potential Interview Questions",
    "ATS Alignment Advice",
    "Skill Gap Analysis",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    /// Positive integer, still carried as text.
    Count,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub default: Option<&'static str>,
    pub kind: FieldKind,
    pub choices: &'static [&'static str],
}

impl FieldSpec {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            default: None,
            kind: FieldKind::Text,
            choices: &[],
        }
    }

    const fn optional(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default: Some(default),
            kind: FieldKind::Text,
            choices: &[],
        }
    }

    const fn count(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default: Some(default),
            kind: FieldKind::Count,
            choices: &[],
        }
    }

    const fn choices(self, choices: &'static [&'static str]) -> Self {
        Self { choices, ..self }
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    ResumeSummary,
    CoverLetter,
    KeywordExtraction,
    InterviewQuestions,
    SectionCritique,
    BulletPoints,
    AchievementStatement,
    LinkedinSummary,
    AnalyzeJobDescription,
    PowerVerbs,
    SectionExpansion,
    SectionSummary,
    ThankYouNote,
    NetworkingMessage,
    CareerPaths,
    LearningResources,
    SalaryNegotiation,
    AnswerCritique,
    CoverLetterParts,
    StarPrompt,
}

#[derive(Debug)]
pub struct TaskDescriptor {
    pub kind: TaskKind,
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

static TASKS: &[TaskDescriptor] = &[
    TaskDescriptor {
        kind: TaskKind::ResumeSummary,
        id: "resume-summary",
        title: "Resume summary",
        fields: &[
            FieldSpec::required("name"),
            FieldSpec::required("title"),
            FieldSpec::required("skills"),
            FieldSpec::required("experience"),
            FieldSpec::optional("tone", "Formal").choices(TONES),
            FieldSpec::optional("language", "English").choices(LANGUAGES),
            FieldSpec::optional("length", "Concise").choices(RESUME_LENGTHS),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::CoverLetter,
        id: "cover-letter",
        title: "Cover letter",
        fields: &[
            FieldSpec::required("name"),
            FieldSpec::required("title"),
            FieldSpec::required("company"),
            FieldSpec::required("skills"),
            FieldSpec::required("experience"),
            FieldSpec::optional("tone", "Formal").choices(TONES),
            FieldSpec::optional("language", "English").choices(LANGUAGES),
            FieldSpec::optional("length", "Standard").choices(COVER_LETTER_LENGTHS),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::KeywordExtraction,
        id: "keyword-extraction",
        title: "Keyword extraction",
        fields: &[FieldSpec::required("text"), FieldSpec::required("context")],
    },
    TaskDescriptor {
        kind: TaskKind::InterviewQuestions,
        id: "interview-questions",
        title: "Interview questions",
        fields: &[
            FieldSpec::required("resume_summary"),
            FieldSpec::required("job_keywords"),
            FieldSpec::optional("question_type", "Behavioral").choices(QUESTION_TYPES),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::SectionCritique,
        id: "section-critique",
        title: "Resume section critique",
        fields: &[
            FieldSpec::required("section_text"),
            FieldSpec::required("section_type").choices(CRITIQUE_SECTION_TYPES),
            FieldSpec::required("job_title"),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::BulletPoints,
        id: "bullet-points",
        title: "Experience to bullet points",
        fields: &[
            FieldSpec::required("experience_description"),
            FieldSpec::required("job_title"),
            FieldSpec::count("num_bullets", "5"),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::AchievementStatement,
        id: "achievement-statement",
        title: "Achievement statement",
        fields: &[
            FieldSpec::required("responsibility"),
            FieldSpec::required("impact_details"),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::LinkedinSummary,
        id: "linkedin-summary",
        title: "LinkedIn summary",
        fields: &[
            FieldSpec::required("keywords"),
            FieldSpec::required("career_overview"),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::AnalyzeJobDescription,
        id: "analyze-job-description",
        title: "Job description analysis",
        fields: &[
            FieldSpec::required("jd_content"),
            FieldSpec::required("analysis_type").choices(ANALYSIS_TYPES),
            FieldSpec::optional("job_title_context", ""),
            FieldSpec::optional("user_experience_summary", ""),
            FieldSpec::optional("user_skills", ""),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::PowerVerbs,
        id: "power-verbs",
        title: "Power verbs",
        fields: &[FieldSpec::required("job_title")],
    },
    TaskDescriptor {
        kind: TaskKind::SectionExpansion,
        id: "section-expansion",
        title: "Resume section expansion",
        fields: &[
            FieldSpec::required("brief_text"),
            FieldSpec::required("section_type").choices(EXPANSION_SECTION_TYPES),
            FieldSpec::required("job_title"),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::SectionSummary,
        id: "section-summary",
        title: "Resume section summary",
        fields: &[
            FieldSpec::required("detailed_text"),
            FieldSpec::required("section_type").choices(SUMMARY_SECTION_TYPES),
            FieldSpec::count("target_sentences", "3"),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::ThankYouNote,
        id: "thank-you-note",
        title: "Post-interview thank-you note",
        fields: &[
            FieldSpec::required("name"),
            FieldSpec::required("company"),
            FieldSpec::required("job_title"),
            FieldSpec::required("interview_date"),
            FieldSpec::required("discussion_points"),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::NetworkingMessage,
        id: "networking-message",
        title: "Networking message",
        fields: &[
            FieldSpec::required("my_role"),
            FieldSpec::required("target_role"),
            FieldSpec::required("purpose"),
            FieldSpec::optional("common_ground", ""),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::CareerPaths,
        id: "career-paths",
        title: "Career path suggestions",
        fields: &[
            FieldSpec::required("skills"),
            FieldSpec::required("experience"),
            FieldSpec::optional("current_role", ""),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::LearningResources,
        id: "learning-resources",
        title: "Learning resources",
        fields: &[
            FieldSpec::required("skill_gap"),
            FieldSpec::required("current_role"),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::SalaryNegotiation,
        id: "salary-negotiation",
        title: "Salary negotiation script",
        fields: &[
            FieldSpec::required("job_title"),
            FieldSpec::required("company"),
            FieldSpec::required("initial_offer"),
            FieldSpec::required("desired_range"),
            FieldSpec::required("key_achievements"),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::AnswerCritique,
        id: "answer-critique",
        title: "Interview answer critique",
        fields: &[
            FieldSpec::required("question"),
            FieldSpec::required("answer"),
            FieldSpec::required("job_title"),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::CoverLetterParts,
        id: "cover-letter-parts",
        title: "Cover letter opening and closing",
        fields: &[
            FieldSpec::required("purpose"),
            FieldSpec::optional("tone", "Formal").choices(TONES),
        ],
    },
    TaskDescriptor {
        kind: TaskKind::StarPrompt,
        id: "star-prompt",
        title: "Behavioral question with STAR outline",
        fields: &[
            FieldSpec::required("skill"),
            FieldSpec::optional("context", ""),
        ],
    },
];

/// All task descriptors, in catalog order.
pub fn descriptors() -> &'static [TaskDescriptor] {
    TASKS
}

impl TaskKind {
    pub fn from_id(id: &str) -> Option<Self> {
        TASKS.iter().find(|d| d.id == id).map(|d| d.kind)
    }

    pub fn descriptor(self) -> &'static TaskDescriptor {
        TASKS
            .iter()
            .find(|d| d.kind == self)
            .unwrap_or_else(|| unreachable!("every TaskKind has a descriptor"))
    }

    pub fn id(self) -> &'static str {
        self.descriptor().id
    }
}

/// Resolved input values for one task: exactly the descriptor's fields,
/// with defaults applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues(BTreeMap<&'static str, String>);

impl FieldValues {
    /// Picks the descriptor's fields out of `raw`; unknown keys are ignored.
    /// Missing required fields resolve to the empty string. Counts are trimmed.
    pub fn resolve(descriptor: &TaskDescriptor, raw: &HashMap<String, String>) -> Self {
        let values = descriptor
            .fields
            .iter()
            .map(|field| {
                let given = raw.get(field.name).map(String::as_str);
                let value = match (given, field.default) {
                    (Some(v), Some(default)) if v.trim().is_empty() => default,
                    (Some(v), _) if field.kind == FieldKind::Count => v.trim(),
                    (Some(v), _) => v,
                    (None, Some(default)) => default,
                    (None, None) => "",
                };
                (field.name, value.to_string())
            })
            .collect();
        Self(values)
    }

    /// Value of `name`, or `""` when the task has no such field.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl<const N: usize> From<[(&'static str, &str); N]> for FieldValues {
    fn from(pairs: [(&'static str, &str); N]) -> Self {
        Self(pairs.into_iter().map(|(k, v)| (k, v.to_string())).collect())
    }
}

/// Rejects blank required fields and malformed counts before dispatch.
///
/// An unrecognized analysis type is NOT rejected here: the builder answers it
/// with its fixed sentinel instead of a prompt.
pub fn validate(kind: TaskKind, values: &FieldValues) -> Result<(), AppError> {
    for field in kind.descriptor().fields {
        let value = values.get(field.name);
        if field.is_required() && value.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "{} cannot be empty",
                field.name
            )));
        }
        if field.kind == FieldKind::Count && !is_positive_count(value) {
            return Err(AppError::Validation(format!(
                "{} must be a positive whole number",
                field.name
            )));
        }
    }

    if kind == TaskKind::AnalyzeJobDescription {
        if let Some(analysis) = AnalysisType::from_label(values.get("analysis_type")) {
            for name in analysis.required_fields() {
                if values.get(name).trim().is_empty() {
                    return Err(AppError::Validation(format!(
                        "{name} is required for {}",
                        analysis.label()
                    )));
                }
            }
        }
    }

    Ok(())
}

/// Plain ASCII digits only: no sign, no inner whitespace.
fn is_positive_count(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && value.parse::<u32>().map(|n| n > 0).unwrap_or(false)
}
