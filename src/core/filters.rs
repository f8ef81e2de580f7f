use crate::core::normalizer::{extract_duration_months, extract_stipend};
use crate::models::{InternshipRecord, StudentProfile};

/// Check a listing against the profile's hard constraints
///
/// This is stage 1 of the recommendation pipeline. A listing is dropped
/// when its stipend falls below the profile minimum or its duration runs
/// past the profile maximum. Text that cannot be parsed counts as `0`,
/// so an unparsable stipend only passes a zero minimum and an unparsable
/// duration always passes.
#[inline]
pub fn passes_hard_constraints(record: &InternshipRecord, profile: &StudentProfile) -> bool {
    let stipend = extract_stipend(record.stipend_text());
    if stipend < profile.min_expected_stipend {
        return false;
    }

    let duration = extract_duration_months(record.duration_text());
    if duration > profile.max_duration_months {
        return false;
    }

    true
}
