//! Ingestion boundary for persona records.
//!
//! The backend sends snake_case records (`salary_min`, `avatar_url`,
//! `confidence_score`, ...) while local seed data uses camelCase with nested
//! objects (`salaryRange`, `resume.fileName`). Both deserialize into
//! [`RawPersonaRecord`]; [`normalize`] turns that into a [`PersonaProfile`] with
//! neutral defaults for anything missing.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::models::{MarketDemand, PersonaProfile, ResumeMeta, SalaryRange, WorkHistoryItem};

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("persona record has no id")]
    MissingId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSalaryRange {
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResume {
    #[serde(default, alias = "fileName")]
    pub file_name: Option<String>,
    #[serde(default, alias = "uploadedAt", deserialize_with = "deserialize_timestamp")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWorkHistoryItem {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, alias = "title")]
    pub position: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

/// Loosely-typed persona record as it arrives from either source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPersonaRecord {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "avatar_url", alias = "avatarUrl")]
    pub avatar: Option<String>,
    #[serde(default, alias = "experience_level", alias = "experienceLevel")]
    pub experience: Option<String>,
    #[serde(default, alias = "salaryRange")]
    pub salary_range: Option<RawSalaryRange>,
    #[serde(default, alias = "salaryMin")]
    pub salary_min: Option<i64>,
    #[serde(default, alias = "salaryMax")]
    pub salary_max: Option<i64>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub resume: Option<RawResume>,
    #[serde(default, alias = "cvFileName")]
    pub cv_file_name: Option<String>,
    #[serde(default, alias = "createdAt", deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "marketDemand")]
    pub market_demand: Option<String>,
    #[serde(default, alias = "globalMatches")]
    pub global_matches: Option<i64>,
    #[serde(default, alias = "confidence_score", alias = "confidenceScore")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    #[serde(default, alias = "jobSearchLocation")]
    pub job_search_location: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default, alias = "workHistory")]
    pub work_history: Option<Vec<RawWorkHistoryItem>>,
}

/// Accepts string or numeric ids; blank strings count as missing.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// RFC 3339 timestamps; naive `YYYY-MM-DDTHH:MM:SS[.f]` values are read as UTC.
/// Anything else is dropped rather than failing the whole record.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc())
            })
            .ok()
    }))
}

fn to_u32(value: Option<i64>) -> u32 {
    value
        .map(|v| u32::try_from(v.max(0)).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

pub fn normalize(raw: RawPersonaRecord) -> Result<PersonaProfile, NormalizeError> {
    let id = raw.id.ok_or(NormalizeError::MissingId)?;

    let salary_range = match raw.salary_range {
        Some(range) => SalaryRange {
            min: to_u32(range.min),
            max: to_u32(range.max),
        },
        None => SalaryRange {
            min: to_u32(raw.salary_min),
            max: to_u32(raw.salary_max),
        },
    };

    // Nested resume metadata wins; otherwise the server's cv_file_name + created_at.
    let resume = match raw.resume {
        Some(RawResume {
            file_name: Some(file_name),
            uploaded_at,
        }) => Some(ResumeMeta {
            file_name,
            uploaded_at: uploaded_at.or(raw.created_at).unwrap_or_default(),
        }),
        _ => non_blank(raw.cv_file_name).map(|file_name| ResumeMeta {
            file_name,
            uploaded_at: raw.created_at.unwrap_or_default(),
        }),
    };

    let confidence = raw
        .confidence
        .filter(|c| c.is_finite())
        .map(|c| c.clamp(0.0, 100.0))
        .unwrap_or(0.0);

    let work_history = raw
        .work_history
        .unwrap_or_default()
        .into_iter()
        .map(|item| WorkHistoryItem {
            company: item.company.unwrap_or_default(),
            position: item.position.unwrap_or_default(),
            duration: non_blank(item.duration),
            description: non_blank(item.description),
            achievements: item.achievements.unwrap_or_default(),
            start_date: non_blank(item.start_date),
            end_date: non_blank(item.end_date),
            skills: item.skills.unwrap_or_default(),
        })
        .collect();

    Ok(PersonaProfile {
        id,
        name: raw.name.unwrap_or_default(),
        title: raw.title.unwrap_or_default(),
        location: raw.location.unwrap_or_default(),
        avatar: raw.avatar.unwrap_or_default(),
        experience: raw.experience.unwrap_or_default(),
        salary_range,
        skills: raw.skills.unwrap_or_default(),
        resume,
        market_demand: raw
            .market_demand
            .as_deref()
            .map(MarketDemand::from_label)
            .unwrap_or_default(),
        global_matches: raw.global_matches.map(|m| m.max(0) as u64).unwrap_or(0),
        confidence,
        email: non_blank(raw.email),
        phone: non_blank(raw.phone),
        summary: non_blank(raw.summary),
        roles: raw.roles.unwrap_or_default(),
        job_search_location: non_blank(raw.job_search_location),
        education: non_blank(raw.education),
        work_history,
    })
}

/// Decodes each element of a JSON array on its own, so one record with a
/// malformed field is skipped instead of failing the whole list.
pub fn parse_records(values: Vec<Value>) -> Vec<RawPersonaRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index = idx, "Skipping undecodable persona record: {e}");
                None
            }
        })
        .collect()
}

/// Normalizes a batch, skipping records without an id and keeping the first
/// record for any repeated id.
pub fn normalize_records(records: Vec<RawPersonaRecord>) -> Vec<PersonaProfile> {
    let mut profiles: Vec<PersonaProfile> = Vec::with_capacity(records.len());
    for record in records {
        match normalize(record) {
            Ok(profile) if profiles.iter().any(|p| p.id == profile.id) => {
                warn!(persona_id = %profile.id, "Dropping duplicate persona record");
            }
            Ok(profile) => profiles.push(profile),
            Err(e) => warn!("Skipping persona record: {e}"),
        }
    }
    profiles
}
