use std::collections::HashSet;

use crate::models::{InternshipRecord, ScoreBreakdown, ScoringWeights, StudentProfile};

/// Calculate a listing's score against a profile
///
/// Scoring formula:
/// score = (
///     shared_skills * weights.skill +   # comma-separated skills, case-insensitive set overlap
///     location_hit * weights.location + # any preferred location is a substring
///     type_hit * weights.intern_type    # any preferred type is a substring
/// )
///
/// Preferred perks do not contribute.
pub fn calculate_match_score(
    record: &InternshipRecord,
    profile: &StudentProfile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    ScoreBreakdown {
        skills: count_shared_skills(record.skills_text(), &profile.skills) * weights.skill,
        location: if any_preference_matches(record.location_text(), &profile.preferred_locations) {
            weights.location
        } else {
            0
        },
        intern_type: if any_preference_matches(
            record.intern_type_text(),
            &profile.preferred_intern_types,
        ) {
            weights.intern_type
        } else {
            0
        },
    }
}

/// Count distinct skills shared between a listing's skill text and a profile
#[inline]
pub fn count_shared_skills(listing_skills: Option<&str>, profile_skills: &[String]) -> u32 {
    let listing: HashSet<String> = listing_skills
        .unwrap_or("")
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .collect();

    let profile: HashSet<String> = profile_skills.iter().map(|s| s.to_lowercase()).collect();

    listing.intersection(&profile).count() as u32
}

/// True when any preference appears, case-insensitively, inside the field text
#[inline]
pub fn any_preference_matches(field: Option<&str>, preferences: &[String]) -> bool {
    let haystack = field.unwrap_or("").to_lowercase();
    preferences
        .iter()
        .any(|p| haystack.contains(&p.to_lowercase()))
}
