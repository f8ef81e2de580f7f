use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::core::{filters::passes_hard_constraints, scoring::calculate_match_score};
use crate::models::{InternshipRecord, ScoreBreakdown, ScoredCandidate, ScoringWeights, StudentProfile};

/// Number of listings returned when the caller does not ask for a specific count
pub const DEFAULT_TOP_K: usize = 5;

/// Errors surfaced by the recommendation engine
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(#[from] ValidationErrors),
}

/// Result of one recommendation run
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub internships: Vec<InternshipRecord>,
    pub total_records: usize,
    pub eligible_records: usize,
    pub scored_records: usize,
}

/// Recommendation orchestrator - filter, score, rank
///
/// # Pipeline Stages
/// 1. Hard constraints (stipend floor, duration ceiling)
/// 2. Scoring (skills, location, internship type)
/// 3. Zero-score removal, stable sort by score, top-K cut
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank listings for a student profile
    ///
    /// # Arguments
    /// * `profile` - The student's preferences
    /// * `records` - All candidate listings, in storage order
    /// * `top_k` - Maximum number of listings to return
    ///
    /// # Returns
    /// The best listings, highest score first. Listings with equal scores
    /// keep their input order.
    pub fn recommend(
        &self,
        profile: &StudentProfile,
        records: &[InternshipRecord],
        top_k: usize,
    ) -> Result<Recommendation, RecommendError> {
        profile.validate()?;

        let total_records = records.len();

        // Stage 1: hard constraints
        let eligible: Vec<&InternshipRecord> = records
            .iter()
            .filter(|record| passes_hard_constraints(record, profile))
            .collect();
        let eligible_records = eligible.len();

        // Stage 2: scoring, keeping only listings that match on something
        let mut scored: Vec<ScoredCandidate<'_>> = eligible
            .into_iter()
            .filter_map(|record| {
                let score = calculate_match_score(record, profile, &self.weights).total();
                (score > 0).then_some(ScoredCandidate { record, score })
            })
            .collect();
        let scored_records = scored.len();

        // Stage 3: rank. sort_by is stable, so ties keep input order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(top_k);

        tracing::debug!(
            "Recommendation pipeline: {} records, {} eligible, {} scored, {} returned",
            total_records,
            eligible_records,
            scored_records,
            scored.len()
        );

        Ok(Recommendation {
            internships: scored.into_iter().map(|c| c.record.clone()).collect(),
            total_records,
            eligible_records,
            scored_records,
        })
    }

    /// Score breakdown for a single listing, without the hard filter
    pub fn score_breakdown(&self, profile: &StudentProfile, record: &InternshipRecord) -> ScoreBreakdown {
        calculate_match_score(record, profile, &self.weights)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
