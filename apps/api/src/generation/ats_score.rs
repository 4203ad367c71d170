//! ATS score estimate: keyword overlap between the user's skills and a job's keywords.
//!
//! Pure-Rust, deterministic, no LLM call. Both inputs are comma-separated lists;
//! entries are trimmed, lowercased and de-duplicated before matching.
//!
//! score = |user ∩ job| / |job| × 100, rounded to two decimals.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    /// < 50
    NeedsWork,
    /// 50 – 74.99
    Good,
    /// ≥ 75
    Excellent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: f64, // 0.0 – 100.0
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub total_job_keywords: usize,
    pub band: MatchBand,
    pub recommendation: String,
}

/// Splits a comma-separated list into its distinct, lowercased, non-empty entries.
fn keyword_set(list: &str) -> BTreeSet<String> {
    list.split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

pub fn score_keywords(user_skills: &str, job_keywords: &str) -> Result<AtsReport, AppError> {
    if user_skills.trim().is_empty() || job_keywords.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide both your skills and job keywords for ATS estimation.".to_string(),
        ));
    }

    let user = keyword_set(user_skills);
    let job = keyword_set(job_keywords);

    if job.is_empty() {
        return Err(AppError::Validation(
            "Please provide job keywords to estimate ATS score.".to_string(),
        ));
    }

    let (matched, missing): (Vec<String>, Vec<String>) =
        job.iter().cloned().partition(|k| user.contains(k));

    let raw = matched.len() as f64 / job.len() as f64 * 100.0;
    let score = (raw * 100.0).round() / 100.0;
    let band = band_for(score);

    Ok(AtsReport {
        score,
        recommendation: build_recommendation(band).to_string(),
        matched_keywords: matched,
        missing_keywords: missing,
        total_job_keywords: job.len(),
        band,
    })
}

fn band_for(score: f64) -> MatchBand {
    if score < 50.0 {
        MatchBand::NeedsWork
    } else if score < 75.0 {
        MatchBand::Good
    } else {
        MatchBand::Excellent
    }
}

fn build_recommendation(band: MatchBand) -> &'static str {
    match band {
        MatchBand::NeedsWork => {
            "Consider adding more relevant keywords from the job description to improve your score."
        }
        MatchBand::Good => "Good match! Aim for higher by integrating more specific terms.",
        MatchBand::Excellent => {
            "Excellent match! Your document is highly optimized for this job."
        }
    }
}
