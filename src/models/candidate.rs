// src/models/candidate.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One skill attached to a candidate profile. Owned by external storage;
/// read-only input to the search module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub skill_name: String,

    /// "technical" or "soft".
    #[serde(default)]
    pub skill_type: String,

    /// Latest assessment score, 0-100.
    #[serde(default)]
    pub score: i64,

    #[serde(default)]
    pub is_verified: bool,
}

/// Candidate profile attributes as fetched from external storage, with the
/// candidate's skills already attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub user_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub professional_headline: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub major_specialization: String,
    #[serde(default)]
    pub graduation_year: Option<i32>,

    /// Stored as free text; filtered by exact raw match.
    #[serde(default)]
    pub years_of_experience: String,

    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Employer search filters. AND semantics across supplied attribute
/// filters, OR semantics within `skills`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SearchFilters {
    /// Case-insensitive substring match on major/specialization.
    pub major: Option<String>,

    /// Case-insensitive substring match on location.
    pub location: Option<String>,

    /// Raw query value; non-integer input is ignored with a warning.
    pub graduation_year: Option<String>,

    /// Exact match on the raw years-of-experience value.
    pub experience: Option<String>,

    /// Skill names; a candidate needs at least one matching skill.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Candidates whose verified-skill average falls below this are dropped.
    #[serde(default)]
    #[validate(range(min = 0, max = 100))]
    pub min_skill_score: i64,
}

/// Which skills survive the per-candidate display cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillRetention {
    /// First entries in storage order. Matches the behavior of the system
    /// this replaces, so stored output stays comparable.
    #[default]
    StorageOrder,

    /// Highest-scoring entries.
    TopScore,
}

/// Output ordering of the search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ranking {
    /// Preserve the order candidates were supplied in.
    #[default]
    InputOrder,

    /// Sort by verified-skill average, descending. Stable, so ties keep
    /// input order.
    AverageScoreDesc,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub skill_retention: SkillRetention,
    pub ranking: Ranking,
}

/// One retained candidate in the search result.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateMatch {
    pub user_id: String,
    pub full_name: String,
    pub professional_headline: String,
    pub location: String,
    pub years_of_experience: String,

    /// At most `SKILL_DISPLAY_LIMIT` entries.
    pub skills: Vec<Skill>,

    /// Truncated average over verified skills only; 0 when none.
    pub average_score: i64,
}
