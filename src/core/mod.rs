// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod normalizer;
pub mod scoring;

pub use filters::passes_hard_constraints;
pub use matcher::{Recommender, Recommendation, RecommendError, DEFAULT_TOP_K};
pub use normalizer::{extract_stipend, extract_duration_months};
pub use scoring::{calculate_match_score, count_shared_skills, any_preference_matches};
