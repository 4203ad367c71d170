// All LLM prompt templates for the Generation module.
// Placeholders are `{slot}` names resolved by `render_template`; `{brand}` is
// filled from llm_client::prompts::BRAND.

use std::collections::HashMap;

/// Returned by the job-description analysis dispatch for an unrecognized analysis type.
pub const INVALID_ANALYSIS_TYPE: &str = "Invalid analysis type specified for job description.";

pub const RESUME_SUMMARY_TEMPLATE: &str = r#"As an expert resume writer using {brand}, generate a professional, {length} and ATS-optimized resume summary section.
The summary should be written in a {tone} tone and in {language}.
It should highlight the candidate's core competencies, achievements, and career goals relevant to the target job.

Candidate Name: {name}
Target Job Title: {title}
Key Skills: {skills}
Professional Experience Summary: {experience}

Ensure the summary is impactful, uses strong action verbs, and is tailored to common resume best practices.
Focus solely on the summary section{length_qualifier}, avoid adding sections like "Education", "Work Experience", etc."#;

pub const COVER_LETTER_TEMPLATE: &str = r#"As an expert professional writer using {brand}, write a {tone} cover letter in {language}{length_qualifier} for a job application.
The cover letter should clearly state the applicant's interest in the position and the company, highlight relevant skills and experience,
and explain how their qualifications align with the job requirements.

Candidate Name: {name}
Target Job Title: {title}
Target Company: {company}
Key Skills: {skills}
Professional Experience Summary: {experience}

Start with a formal salutation (e.g., "Dear Hiring Manager,").
Conclude with a professional closing.
Ensure the tone is persuasive and enthusiastic, tailored to attract the attention of the hiring committee.
Focus only on the body of the cover letter, do not include placeholder for date or address."#;

pub const KEYWORD_EXTRACTION_TEMPLATE: &str = r#"As an ATS (Applicant Tracking System) expert using {brand}, extract and list the most important keywords from the following text,
relevant to a {context}. Provide them as a comma-separated list.
Text:
---
{text}
---
Keywords:"#;

pub const INTERVIEW_QUESTIONS_TEMPLATE: &str = r#"As an interview preparation expert using {brand}, generate 5-7 potential {question_type} interview questions for a candidate with the following resume summary:
"{resume_summary}"
and applying for a role described by these keywords: "{job_keywords}".
Focus on questions that bridge the candidate's experience with the job requirements.
List them numerically."#;

pub const SECTION_CRITIQUE_TEMPLATE: &str = r#"As a professional resume reviewer using {brand}, provide a constructive critique of the following "{section_type}" section for a "{job_title}" role.
Focus on clarity, impact, relevance, ATS-optimization, and overall effectiveness.
Suggest specific improvements.

Section Content:
---
{section_text}
---
Critique and Suggestions:"#;

pub const BULLET_POINTS_TEMPLATE: &str = r#"As an expert resume writer using {brand}, transform the following experience description into {num_bullets} concise,
action-oriented bullet points suitable for a resume for a '{job_title}' role.
Each bullet point should start with a strong action verb and highlight quantifiable achievements where possible.

Experience Description:
---
{experience_description}
---
Bullet Points:"#;

pub const ACHIEVEMENT_STATEMENT_TEMPLATE: &str = r#"As an expert resume writer using {brand}, convert the following responsibility and its impact into a concise,
action-oriented achievement statement (1-2 sentences). Start with a strong action verb and quantify results where possible.

Responsibility: {responsibility}
Impact/Result: {impact_details}

Achievement Statement:"#;

pub const LINKEDIN_SUMMARY_TEMPLATE: &str = r#"As a LinkedIn profile expert using {brand}, generate a compelling 3-5 sentence professional summary for a LinkedIn profile.
Incorporate the following keywords and career overview. Focus on impact, professional brand, and future aspirations.

Keywords: {keywords}
Career Overview: {career_overview}

LinkedIn Summary:"#;

pub const JD_KEY_SKILLS_TEMPLATE: &str = r#"As an ATS expert using {brand}, extract and list the most important keywords and required skills from the following job description.
These should be directly relevant to a '{job_title_context}' role. Provide them as a comma-separated list.

Job Description:
---
{jd_content}
---
Extracted Keywords and Skills:"#;

pub const JD_INTERVIEW_QUESTIONS_TEMPLATE: &str = r#"As an interview preparation expert using {brand}, generate 5-7 potential interview questions based on the following job description
and considering a candidate with this experience summary: "{user_experience_summary}".
Focus on behavioral, technical, and situational questions that test alignment with the job requirements.
List them numerically.

Job Description:
---
{jd_content}
---
Potential Interview Questions:"#;

pub const JD_ATS_ADVICE_TEMPLATE: &str = r#"As an ATS expert and career advisor using {brand}, analyze the following job description and provide actionable advice on how to tailor a resume and cover letter for optimal ATS alignment.
Focus on identifying critical keywords, recommended formatting, common pitfalls to avoid, and strategic content integration.

Job Description:
---
{jd_content}
---
ATS Alignment Advice:"#;

pub const JD_SKILL_GAP_TEMPLATE: &str = r#"As a career development expert using {brand}, compare the required skills in the job description below with the candidate's existing skills.
Identify any significant skill gaps and suggest 3-5 relevant learning resources or areas of focus to bridge those gaps.

Job Description Skills/Requirements:
---
{jd_content}
---
Candidate's Skills:
---
{user_skills}
---
Skill Gap Analysis and Learning Suggestions:"#;

pub const POWER_VERBS_TEMPLATE: &str = r#"As a resume expert using {brand}, generate a list of 15-20 powerful action verbs (power verbs)
that are highly relevant for a '{job_title}' role.
List them as a comma-separated list or short bullet points."#;

pub const SECTION_EXPANSION_TEMPLATE: &str = r#"As an expert resume writer using {brand}, expand the following brief description into a more detailed and impactful
'{section_type}' section for a '{job_title}' resume. Aim for 3-5 sentences/bullet points,
incorporating strong action verbs and quantifying achievements where possible.

Brief Description:
---
{brief_text}
---
Expanded Section:"#;

pub const SECTION_SUMMARY_TEMPLATE: &str = r#"As an expert resume writer using {brand}, summarize the following detailed '{section_type}' section into approximately {target_sentences}
concise and impactful sentences/bullet points suitable for a resume.

Detailed Section:
---
{detailed_text}
---
Summarized Section:"#;

pub const THANK_YOU_NOTE_TEMPLATE: &str = r#"As a professional career coach using {brand}, draft a personalized thank-you email after an interview.
It should be concise, reiterate interest, and reference specific discussion points.

Candidate Name: {name}
Company: {company}
Job Title: {job_title}
Interview Date: {interview_date}
Key Discussion Points (comma-separated): {discussion_points}

Thank You Note (Email Body Only):"#;

pub const NETWORKING_MESSAGE_TEMPLATE: &str = r#"As a networking expert using {brand}, draft a concise and professional networking message.

Your Role/Background: {my_role}
Target Person's Role/Background: {target_role}
Purpose of message: {purpose}
Common Ground/Specific Connection (optional): {common_ground}

Networking Message:"#;

pub const CAREER_PATHS_TEMPLATE: &str = r#"As a career counselor using {brand}, suggest 3-5 potential career paths for someone with the following profile.
Focus on paths that leverage their existing skills and experience.

Current Role (optional): {current_role}
Skills: {skills}
Experience Summary: {experience}

Suggested Career Paths:"#;

pub const LEARNING_RESOURCES_TEMPLATE: &str = r#"As a learning and development expert using {brand}, recommend 3-5 types of learning resources (e.g., online courses, books, certifications, projects)
to acquire or strengthen the following skill, relevant for a '{current_role}' role.

Skill to learn/improve: {skill_gap}

Recommended Learning Resources:"#;

pub const SALARY_NEGOTIATION_TEMPLATE: &str = r#"As a salary negotiation coach using {brand}, create a concise script for a candidate to negotiate a job offer.
The script should be professional, confident, and highlight the candidate's value.

Job Title: {job_title}
Company: {company}
Initial Offer: {initial_offer}
Desired Salary Range: {desired_range}
Key Achievements (to highlight value): {key_achievements}

Salary Negotiation Script:"#;

pub const ANSWER_CRITIQUE_TEMPLATE: &str = r#"As an expert interview coach using {brand}, provide constructive feedback and suggest improvements for the following interview answer.
Consider its relevance to a '{job_title}' role, clarity, completeness, and adherence to best practices (e.g., STAR method if applicable).

Interview Question: "{question}"
Candidate's Answer: "{answer}"

Critique and Improvement Suggestions:"#;

pub const COVER_LETTER_PARTS_TEMPLATE: &str = r#"As an expert cover letter writer using {brand}, generate a professional opening paragraph (2-3 sentences)
and a closing paragraph (2-3 sentences) for a cover letter with the following purpose and tone.

Purpose: {purpose}
Tone: {tone}

---
Opening Suggestion:
---
Closing Suggestion:"#;

pub const STAR_PROMPT_TEMPLATE: &str = r#"As an interview coach using {brand}, create a behavioral interview question focused on '{skill}'.
Then, provide a brief outline using the STAR method (Situation, Task, Action, Result) for how a candidate might answer it,
incorporating the context: "{context}".

Behavioral Question:
STAR Method Outline:"#;

/// Sentence-count qualifier for a resume summary length bucket.
/// Unrecognized buckets yield an empty qualifier.
pub fn resume_length_qualifier(length: &str) -> &'static str {
    match length {
        "Concise" => " (3-5 sentences)",
        "Standard" => " (5-8 sentences)",
        "Detailed" => " (8-12 sentences)",
        _ => "",
    }
}

/// Paragraph-count qualifier for a cover letter length bucket.
/// Unrecognized buckets yield an empty qualifier.
pub fn cover_letter_length_qualifier(length: &str) -> &'static str {
    match length {
        "Brief" => " (2-3 paragraphs)",
        "Standard" => " (3-4 paragraphs)",
        "Detailed" => " (4-5 paragraphs)",
        _ => "",
    }
}

/// Single-pass `{slot}` substitution.
///
/// Slot values are inserted literally and never re-scanned, so user text that
/// happens to contain `{name}` stays as written. Placeholders without a slot
/// are left untouched.
pub fn render_template(template: &str, slots: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_slot_name(&after[..close]) => {
                let name = &after[..close];
                match slots.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_slot_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase() || c == '_')
}
