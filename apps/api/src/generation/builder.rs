//! Request Builder: renders the prompt for a task from its resolved field values.
//!
//! Pure and deterministic: the same `(TaskKind, FieldValues)` always yields the
//! same prompt. No validation happens here; blank fields are interpolated as-is.

use std::collections::HashMap;

use crate::generation::prompts::*;
use crate::generation::tasks::{AnalysisType, FieldValues, TaskKind};
use crate::llm_client::prompts::BRAND;

/// Result of prompt construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Prompt(String),
    /// Fixed sentinel returned in place of a prompt; nothing should be dispatched.
    Rejected(&'static str),
}

/// Picks the template for a task. Only the job-description analyzer can fail,
/// for an analysis type outside the four known labels.
fn template_for(kind: TaskKind, values: &FieldValues) -> Result<&'static str, &'static str> {
    let template = match kind {
        TaskKind::ResumeSummary => RESUME_SUMMARY_TEMPLATE,
        TaskKind::CoverLetter => COVER_LETTER_TEMPLATE,
        TaskKind::KeywordExtraction => KEYWORD_EXTRACTION_TEMPLATE,
        TaskKind::InterviewQuestions => INTERVIEW_QUESTIONS_TEMPLATE,
        TaskKind::SectionCritique => SECTION_CRITIQUE_TEMPLATE,
        TaskKind::BulletPoints => BULLET_POINTS_TEMPLATE,
        TaskKind::AchievementStatement => ACHIEVEMENT_STATEMENT_TEMPLATE,
        TaskKind::LinkedinSummary => LINKEDIN_SUMMARY_TEMPLATE,
        TaskKind::AnalyzeJobDescription => {
            match AnalysisType::from_label(values.get("analysis_type")) {
                Some(AnalysisType::KeySkills) => JD_KEY_SKILLS_TEMPLATE,
                Some(AnalysisType::InterviewQuestions) => JD_INTERVIEW_QUESTIONS_TEMPLATE,
                Some(AnalysisType::AtsAdvice) => JD_ATS_ADVICE_TEMPLATE,
                Some(AnalysisType::SkillGap) => JD_SKILL_GAP_TEMPLATE,
                None => return Err(INVALID_ANALYSIS_TYPE),
            }
        }
        TaskKind::PowerVerbs => POWER_VERBS_TEMPLATE,
        TaskKind::SectionExpansion => SECTION_EXPANSION_TEMPLATE,
        TaskKind::SectionSummary => SECTION_SUMMARY_TEMPLATE,
        TaskKind::ThankYouNote => THANK_YOU_NOTE_TEMPLATE,
        TaskKind::NetworkingMessage => NETWORKING_MESSAGE_TEMPLATE,
        TaskKind::CareerPaths => CAREER_PATHS_TEMPLATE,
        TaskKind::LearningResources => LEARNING_RESOURCES_TEMPLATE,
        TaskKind::SalaryNegotiation => SALARY_NEGOTIATION_TEMPLATE,
        TaskKind::AnswerCritique => ANSWER_CRITIQUE_TEMPLATE,
        TaskKind::CoverLetterParts => COVER_LETTER_PARTS_TEMPLATE,
        TaskKind::StarPrompt => STAR_PROMPT_TEMPLATE,
    };
    Ok(template)
}

/// Renders the prompt for `kind`.
pub fn build_prompt(kind: TaskKind, values: &FieldValues) -> PromptOutcome {
    let template = match template_for(kind, values) {
        Ok(template) => template,
        Err(sentinel) => return PromptOutcome::Rejected(sentinel),
    };

    let mut slots: HashMap<&str, &str> = values.iter().collect();
    slots.insert("brand", BRAND);

    // Derived slots: length buckets go through fixed lookup tables.
    match kind {
        TaskKind::ResumeSummary => {
            slots.insert("length_qualifier", resume_length_qualifier(values.get("length")));
        }
        TaskKind::CoverLetter => {
            slots.insert(
                "length_qualifier",
                cover_letter_length_qualifier(values.get("length")),
            );
        }
        _ => {}
    }

    PromptOutcome::Prompt(render_template(template, &slots))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::generation::tasks::descriptors;

    fn prompt(kind: TaskKind, values: &FieldValues) -> String {
        match build_prompt(kind, values) {
            PromptOutcome::Prompt(p) => p,
            PromptOutcome::Rejected(s) => panic!("unexpected rejection: {s}"),
        }
    }

    fn resume_values(length: &str) -> FieldValues {
        FieldValues::from([
            ("name", "Jane Doe"),
            ("title", "Engineer"),
            ("skills", "Go, SQL"),
            ("experience", "5 years backend work"),
            ("tone", "Formal"),
            ("language", "English"),
            ("length", length),
        ])
    }

    #[test]
    fn test_resume_summary_scenario() {
        let p = prompt(TaskKind::ResumeSummary, &resume_values("Standard"));
        assert!(p.contains("Candidate Name: Jane Doe"));
        assert!(p.contains("Target Job Title: Engineer"));
        assert!(p.contains("Key Skills: Go, SQL"));
        assert!(p.contains("Professional Experience Summary: 5 years backend work"));
        assert!(p.contains("Focus solely on the summary section (5-8 sentences), avoid"));
        assert!(p.contains("written in a Formal tone and in English"));
        assert!(p.starts_with("As an expert resume writer using VMD AI"));
    }

    #[test]
    fn test_resume_length_qualifier_in_prompt() {
        for (bucket, qualifier) in [
            ("Concise", "(3-5 sentences)"),
            ("Standard", "(5-8 sentences)"),
            ("Detailed", "(8-12 sentences)"),
        ] {
            let p = prompt(TaskKind::ResumeSummary, &resume_values(bucket));
            assert!(p.contains(qualifier), "{bucket} → {qualifier}");
        }
    }

    #[test]
    fn test_unrecognized_resume_length_renders_no_qualifier() {
        let p = prompt(TaskKind::ResumeSummary, &resume_values("Epic"));
        assert!(p.contains("Focus solely on the summary section, avoid"));
        assert!(!p.contains("sentences)"));
    }

    #[test]
    fn test_cover_letter_uses_paragraph_table() {
        let values = FieldValues::from([
            ("name", "Jane Doe"),
            ("title", "Engineer"),
            ("company", "Acme"),
            ("skills", "Go"),
            ("experience", "5 years"),
            ("tone", "Friendly"),
            ("language", "French"),
            ("length", "Brief"),
        ]);
        let p = prompt(TaskKind::CoverLetter, &values);
        assert!(p.contains("write a Friendly cover letter in French (2-3 paragraphs) for a job application"));
        assert!(p.contains("Target Company: Acme"));
        assert!(p.contains("Professional Experience Summary: 5 years\n"));
    }

    #[test]
    fn test_cover_letter_unknown_length_is_empty() {
        let values = FieldValues::from([("tone", "Formal"), ("language", "English"), ("length", "Concise")]);
        let p = prompt(TaskKind::CoverLetter, &values);
        assert!(p.contains("cover letter in English for a job application"));
    }

    #[test]
    fn test_prompt_is_deterministic_for_every_task() {
        for d in descriptors() {
            let raw: HashMap<String, String> = d
                .fields
                .iter()
                .map(|f| (f.name.to_string(), format!("value-of-{}", f.name)))
                .collect();
            let mut values = FieldValues::resolve(d, &raw);
            if d.kind == TaskKind::AnalyzeJobDescription {
                let mut raw = raw.clone();
                raw.insert("analysis_type".to_string(), "Skill Gap Analysis".to_string());
                values = FieldValues::resolve(d, &raw);
            }
            let first = build_prompt(d.kind, &values);
            let second = build_prompt(d.kind, &values);
            assert_eq!(first, second, "{} is not deterministic", d.id);
            assert!(matches!(first, PromptOutcome::Prompt(_)), "{} rejected", d.id);
        }
    }

    #[test]
    fn test_every_task_interpolates_all_its_fields() {
        for d in descriptors() {
            if d.kind == TaskKind::AnalyzeJobDescription {
                continue; // branch templates use field subsets; covered below
            }
            let raw: HashMap<String, String> = d
                .fields
                .iter()
                .map(|f| (f.name.to_string(), format!("<{}>", f.name)))
                .collect();
            let p = prompt(d.kind, &FieldValues::resolve(d, &raw));
            for f in d.fields {
                if f.name == "length" {
                    continue; // only the resume template echoes the bucket; cover letter maps it
                }
                assert!(p.contains(&format!("<{}>", f.name)), "{} missing {}", d.id, f.name);
            }
            assert!(!p.contains("{brand}"), "{} left brand unfilled", d.id);
        }
    }

    #[test]
    fn test_skill_gap_scenario() {
        let values = FieldValues::from([
            ("jd_content", "Kubernetes, Terraform"),
            ("analysis_type", "Skill Gap Analysis"),
            ("job_title_context", ""),
            ("user_experience_summary", ""),
            ("user_skills", "Docker"),
        ]);
        let p = prompt(TaskKind::AnalyzeJobDescription, &values);
        assert!(p.contains("Job Description Skills/Requirements:\n---\nKubernetes, Terraform\n---"));
        assert!(p.contains("Candidate's Skills:\n---\nDocker\n---"));
    }

    #[test]
    fn test_analysis_branches_render_their_markers() {
        let base = |analysis: &str| {
            FieldValues::from([
                ("jd_content", "JD-TEXT"),
                ("analysis_type", analysis),
                ("job_title_context", "Data Engineer"),
                ("user_experience_summary", "8 years ETL"),
                ("user_skills", "Spark"),
            ])
        };

        let p = prompt(TaskKind::AnalyzeJobDescription, &base("Key Skills and Requirements"));
        assert!(p.contains("'Data Engineer' role"));
        assert!(p.contains("Extracted Keywords and Skills:"));
        assert!(!p.contains("Spark"));

        let p = prompt(TaskKind::AnalyzeJobDescription, &base("Potential Interview Questions"));
        assert!(p.contains("experience summary: \"8 years ETL\""));
        assert!(p.contains("Potential Interview Questions:"));

        let p = prompt(TaskKind::AnalyzeJobDescription, &base("ATS Alignment Advice"));
        assert!(p.contains("ATS Alignment Advice:"));
        assert!(!p.contains("8 years ETL"));

        let p = prompt(TaskKind::AnalyzeJobDescription, &base("Skill Gap Analysis"));
        assert!(p.contains("Skill Gap Analysis and Learning Suggestions:"));

        for analysis in AnalysisType::ALL {
            let p = prompt(TaskKind::AnalyzeJobDescription, &base(analysis.label()));
            assert!(p.contains("JD-TEXT"));
        }
    }

    #[test]
    fn test_unknown_analysis_type_is_rejected_with_sentinel() {
        let values = FieldValues::from([("jd_content", "JD"), ("analysis_type", "Culture Fit")]);
        assert_eq!(
            build_prompt(TaskKind::AnalyzeJobDescription, &values),
            PromptOutcome::Rejected("Invalid analysis type specified for job description.")
        );
    }

    #[test]
    fn test_blank_fields_are_interpolated_not_rejected() {
        let values = FieldValues::from([("job_title", "")]);
        let p = prompt(TaskKind::PowerVerbs, &values);
        assert!(p.contains("relevant for a '' role"));
    }

    #[test]
    fn test_user_text_with_braces_is_literal() {
        let values = FieldValues::from([("job_title", "{brand} engineer")]);
        let p = prompt(TaskKind::PowerVerbs, &values);
        assert!(p.contains("'{brand} engineer' role"));
    }
}
