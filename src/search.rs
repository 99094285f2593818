// src/search.rs

use crate::{
    config::SKILL_DISPLAY_LIMIT,
    models::candidate::{
        CandidateMatch, CandidateProfile, Ranking, SearchFilters, SearchOptions, Skill,
        SkillRetention,
    },
};

/// Case-insensitive substring match, used for the major and location filters.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Parses the raw graduation-year filter. Non-integer input makes the
/// filter drop out rather than failing the whole search, with a warning so
/// the bad input stays visible in logs.
fn parse_graduation_year(raw: &str) -> Option<i32> {
    match raw.trim().parse::<i32>() {
        Ok(year) => Some(year),
        Err(_) => {
            tracing::warn!("Ignoring unparseable graduation_year filter: {:?}", raw);
            None
        }
    }
}

/// AND semantics: any supplied attribute filter that does not match
/// excludes the candidate.
fn matches_filters(candidate: &CandidateProfile, filters: &SearchFilters) -> bool {
    if let Some(major) = &filters.major {
        if !contains_ci(&candidate.major_specialization, major) {
            return false;
        }
    }

    if let Some(location) = &filters.location {
        if !contains_ci(&candidate.location, location) {
            return false;
        }
    }

    if let Some(raw) = &filters.graduation_year {
        if let Some(year) = parse_graduation_year(raw) {
            if candidate.graduation_year != Some(year) {
                return false;
            }
        }
    }

    if let Some(experience) = &filters.experience {
        if &candidate.years_of_experience != experience {
            return false;
        }
    }

    true
}

/// OR semantics: at least one of the candidate's skill names must equal at
/// least one requested name, case-insensitive and trimmed. An empty filter
/// list matches everyone.
fn matches_skill_filters(skills: &[Skill], requested: &[String]) -> bool {
    if requested.is_empty() {
        return true;
    }

    skills.iter().any(|skill| {
        let name = skill.skill_name.trim().to_lowercase();
        requested.iter().any(|r| r.trim().to_lowercase() == name)
    })
}

/// Truncated average over verified skills only. Unverified skills are
/// excluded from the denominator too; zero verified skills average 0.
fn average_verified_score(skills: &[Skill]) -> i64 {
    let verified: Vec<&Skill> = skills.iter().filter(|s| s.is_verified).collect();
    if verified.is_empty() {
        return 0;
    }
    verified.iter().map(|s| s.score).sum::<i64>() / verified.len() as i64
}

fn retained_skills(skills: &[Skill], retention: SkillRetention) -> Vec<Skill> {
    match retention {
        SkillRetention::StorageOrder => skills.iter().take(SKILL_DISPLAY_LIMIT).cloned().collect(),
        SkillRetention::TopScore => {
            let mut sorted = skills.to_vec();
            sorted.sort_by(|a, b| b.score.cmp(&a.score));
            sorted.truncate(SKILL_DISPLAY_LIMIT);
            sorted
        }
    }
}

/// Applies attribute and skill filters, computes the verified-skill
/// average, drops candidates below `min_skill_score`, and shapes the
/// survivors for display.
///
/// With default options the output preserves input order and the skill cap
/// keeps the first five skills in storage order, matching the system this
/// replaces.
pub fn filter_and_rank(
    candidates: &[CandidateProfile],
    filters: &SearchFilters,
    options: SearchOptions,
) -> Vec<CandidateMatch> {
    let mut matches = Vec::new();

    for candidate in candidates {
        if !matches_filters(candidate, filters) {
            continue;
        }
        if !matches_skill_filters(&candidate.skills, &filters.skills) {
            continue;
        }

        let average_score = average_verified_score(&candidate.skills);
        if average_score < filters.min_skill_score {
            tracing::debug!(
                "Candidate {} below minimum score: {} < {}",
                candidate.user_id,
                average_score,
                filters.min_skill_score
            );
            continue;
        }

        matches.push(CandidateMatch {
            user_id: candidate.user_id.clone(),
            full_name: candidate.full_name.clone(),
            professional_headline: candidate.professional_headline.clone(),
            location: candidate.location.clone(),
            years_of_experience: candidate.years_of_experience.clone(),
            skills: retained_skills(&candidate.skills, options.skill_retention),
            average_score,
        });
    }

    if options.ranking == Ranking::AverageScoreDesc {
        matches.sort_by(|a, b| b.average_score.cmp(&a.average_score));
    }

    matches
}
