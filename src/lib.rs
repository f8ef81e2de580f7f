//! Internship Match - recommendation service for student internships
//!
//! This library provides the core recommendation engine: free-text field
//! normalization, hard-constraint filtering, and weighted scoring of
//! internship listings against a student profile.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Recommender, Recommendation, RecommendError, extract_stipend, extract_duration_months};
pub use crate::models::{InternshipRecord, StudentProfile, ScoringWeights, RecommendRequest, RecommendResponse};
