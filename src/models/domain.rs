use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Internship listing as stored in the dataset
///
/// Each known column keeps the raw JSON value it was supplied with, so a
/// record serializes back to exactly the object it was read from. Keys
/// the service does not interpret (such as `_id`) are kept in `extra`.
/// `None` means the column was absent; `Some(Value::Null)` means it was
/// present but null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct InternshipRecord {
    pub role: Option<Value>,
    pub company_name: Option<Value>,
    pub location: Option<Value>,
    pub duration: Option<Value>,
    pub stipend: Option<Value>,
    pub intern_type: Option<Value>,
    /// Column the internship type was read from, reused on write
    pub intern_type_column: InternTypeColumn,
    pub skills: Option<Value>,
    pub perks: Option<Value>,
    pub extra: Map<String, Value>,
}

/// The two spellings of the internship type column found in datasets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InternTypeColumn {
    #[default]
    InternType,
    InternshipType,
}

impl InternTypeColumn {
    pub fn key(&self) -> &'static str {
        match self {
            InternTypeColumn::InternType => "Intern Type",
            InternTypeColumn::InternshipType => "Internship Type",
        }
    }
}

const ROLE: &str = "Role";
const COMPANY_NAME: &str = "Company Name";
const LOCATION: &str = "Location";
const DURATION: &str = "Duration";
const STIPEND: &str = "Stipend";
const SKILLS: &str = "Skills";
const PERKS: &str = "Perks";

impl From<Map<String, Value>> for InternshipRecord {
    fn from(mut map: Map<String, Value>) -> Self {
        let (intern_type_column, intern_type) =
            if let Some(value) = map.remove(InternTypeColumn::InternType.key()) {
                (InternTypeColumn::InternType, Some(value))
            } else if let Some(value) = map.remove(InternTypeColumn::InternshipType.key()) {
                (InternTypeColumn::InternshipType, Some(value))
            } else {
                (InternTypeColumn::default(), None)
            };

        Self {
            role: map.remove(ROLE),
            company_name: map.remove(COMPANY_NAME),
            location: map.remove(LOCATION),
            duration: map.remove(DURATION),
            stipend: map.remove(STIPEND),
            intern_type,
            intern_type_column,
            skills: map.remove(SKILLS),
            perks: map.remove(PERKS),
            extra: map,
        }
    }
}

impl From<InternshipRecord> for Map<String, Value> {
    fn from(record: InternshipRecord) -> Self {
        let mut map = record.extra;
        let columns = [
            (ROLE, record.role),
            (COMPANY_NAME, record.company_name),
            (LOCATION, record.location),
            (DURATION, record.duration),
            (STIPEND, record.stipend),
            (record.intern_type_column.key(), record.intern_type),
            (SKILLS, record.skills),
            (PERKS, record.perks),
        ];
        for (key, value) in columns {
            if let Some(value) = value {
                map.insert(key.to_string(), value);
            }
        }
        map
    }
}

impl InternshipRecord {
    /// A listing can only be recommended when both role and company are known
    pub fn is_eligible(&self) -> bool {
        has_text(&self.role) && has_text(&self.company_name)
    }

    pub fn role_text(&self) -> &str {
        as_text(&self.role).unwrap_or("")
    }

    pub fn location_text(&self) -> Option<&str> {
        as_text(&self.location)
    }

    pub fn duration_text(&self) -> Option<&str> {
        as_text(&self.duration)
    }

    pub fn stipend_text(&self) -> Option<&str> {
        as_text(&self.stipend)
    }

    pub fn intern_type_text(&self) -> Option<&str> {
        as_text(&self.intern_type)
    }

    pub fn skills_text(&self) -> Option<&str> {
        as_text(&self.skills)
    }
}

/// Only string values count as text; numbers, booleans and nulls read as absent
fn as_text(field: &Option<Value>) -> Option<&str> {
    field.as_ref().and_then(Value::as_str)
}

fn has_text(field: &Option<Value>) -> bool {
    as_text(field).is_some_and(|s| !s.trim().is_empty())
}

/// Student profile with matching preferences
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StudentProfile {
    #[serde(alias = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub min_expected_stipend: u64,
    #[serde(default = "default_max_duration_months")]
    #[validate(range(min = 1, message = "max_duration_months must be at least 1"))]
    pub max_duration_months: u32,
    #[serde(default)]
    pub preferred_intern_types: Vec<String>,
    /// Stored with the profile but not used for ranking yet
    #[serde(default)]
    pub preferred_perks: Vec<String>,
}

pub fn default_max_duration_months() -> u32 {
    12
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            major: None,
            skills: Vec::new(),
            preferred_locations: Vec::new(),
            min_expected_stipend: 0,
            max_duration_months: default_max_duration_months(),
            preferred_intern_types: Vec::new(),
            preferred_perks: Vec::new(),
        }
    }
}

/// A listing paired with its score for the duration of one recommendation run
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub record: &'a InternshipRecord,
    pub score: u32,
}

/// Per-dimension score contributions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub location: u32,
    pub intern_type: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.skills + self.location + self.intern_type
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Points per shared skill
    pub skill: u32,
    /// Flat bonus when any preferred location matches
    pub location: u32,
    /// Flat bonus when any preferred internship type matches
    pub intern_type: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 10,
            location: 50,
            intern_type: 20,
        }
    }
}
