use crate::models::{InternshipRecord, StudentProfile};
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur when loading or querying the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),
}

/// In-memory listing and profile store
///
/// Built once at startup from JSON files and shared across workers.
/// Listings are read-only; student profiles can be replaced or removed
/// at runtime. The recommendation core never sees this type, only the
/// slices and profiles it hands out.
#[derive(Debug, Default)]
pub struct DatasetStore {
    internships: Vec<InternshipRecord>,
    students: RwLock<HashMap<String, StudentProfile>>,
}

impl DatasetStore {
    /// Create a store from already materialised data
    ///
    /// Listings without a role or company are dropped. Profiles without
    /// an id cannot be looked up and are skipped.
    pub fn new(internships: Vec<InternshipRecord>, students: Vec<StudentProfile>) -> Self {
        let before = internships.len();
        let internships: Vec<InternshipRecord> =
            internships.into_iter().filter(InternshipRecord::is_eligible).collect();

        if internships.len() < before {
            tracing::warn!(
                "Dropped {} listings missing role or company",
                before - internships.len()
            );
        }

        let mut by_id = HashMap::with_capacity(students.len());
        for student in students {
            match student.id.clone() {
                Some(id) => {
                    by_id.insert(id, student);
                }
                None => tracing::warn!("Skipping student profile without an id"),
            }
        }

        Self {
            internships,
            students: RwLock::new(by_id),
        }
    }

    /// Load listings (and optionally profiles) from JSON array files
    pub async fn load(
        internships_path: &Path,
        students_path: Option<&Path>,
    ) -> Result<Self, DatasetError> {
        let internships: Vec<InternshipRecord> = read_json_array(internships_path).await?;

        let students: Vec<StudentProfile> = match students_path {
            Some(path) => read_json_array(path).await?,
            None => Vec::new(),
        };

        let mut store = Self::new(internships, students);

        tracing::info!(
            "Loaded {} listings and {} student profiles",
            store.internships.len(),
            store.students.get_mut().len()
        );

        Ok(store)
    }

    /// All loaded listings, in file order
    pub fn internships(&self) -> &[InternshipRecord] {
        &self.internships
    }

    pub fn internship_count(&self) -> usize {
        self.internships.len()
    }

    /// Look up a stored student profile by id
    pub async fn get_student(&self, student_id: &str) -> Result<StudentProfile, DatasetError> {
        self.students
            .read()
            .await
            .get(student_id)
            .cloned()
            .ok_or_else(|| student_not_found(student_id))
    }

    /// Replace a stored profile, keeping its id
    pub async fn update_student(
        &self,
        student_id: &str,
        mut profile: StudentProfile,
    ) -> Result<StudentProfile, DatasetError> {
        let mut students = self.students.write().await;
        let slot = students
            .get_mut(student_id)
            .ok_or_else(|| student_not_found(student_id))?;

        profile.id = Some(student_id.to_string());
        *slot = profile.clone();

        tracing::debug!("Updated student profile {}", student_id);
        Ok(profile)
    }

    /// Remove a stored profile, returning it
    pub async fn delete_student(&self, student_id: &str) -> Result<StudentProfile, DatasetError> {
        let removed = self
            .students
            .write()
            .await
            .remove(student_id)
            .ok_or_else(|| student_not_found(student_id))?;

        tracing::debug!("Deleted student profile {}", student_id);
        Ok(removed)
    }

    pub async fn student_count(&self) -> usize {
        self.students.read().await.len()
    }

    /// Random sample of listings, at most `count`
    pub fn random_internships(&self, count: usize) -> Vec<InternshipRecord> {
        let mut rng = rand::thread_rng();
        self.internships
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect()
    }
}

fn student_not_found(student_id: &str) -> DatasetError {
    DatasetError::NotFound(format!("Student with id {} not found", student_id))
}

async fn read_json_array<T>(path: &Path) -> Result<Vec<T>, DatasetError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let display = path.display().to_string();

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DatasetError::ReadError {
            path: display.clone(),
            source,
        })?;

    serde_json::from_str(&raw).map_err(|source| DatasetError::ParseError {
        path: display,
        source,
    })
}
