// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{InternTypeColumn, InternshipRecord, StudentProfile, ScoredCandidate, ScoreBreakdown, ScoringWeights};
pub use requests::{RecommendRequest, RandomInternshipsQuery, TopKQuery};
pub use responses::{RecommendResponse, HealthResponse, ErrorResponse};
