//! Deterministic demo data: the two offline personas and a small job feed.
//!
//! Personas are written in the local (camelCase, minimal) record shape and go
//! through the same normalization boundary as server records.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use tracing::warn;

use crate::models::{JobCandidate, PersonaProfile, Salary};
use crate::persona::normalize::{normalize_records, RawPersonaRecord};

fn seed_records() -> Vec<serde_json::Value> {
    vec![
        json!({
            "id": "1",
            "name": "Jason Mitchell",
            "title": "Product Manager",
            "location": "NYC",
            "avatar": "https://i.pravatar.cc/300?img=12",
            "experience": "Senior",
            "salaryRange": { "min": 110000, "max": 140000 },
            "skills": ["Product Strategy", "Agile", "SQL", "User Growth"],
            "resume": {
                "fileName": "Jason_Mitchell_Resume.pdf",
                "uploadedAt": "2026-01-15T00:00:00Z"
            },
            "marketDemand": "high",
            "globalMatches": 12400,
            "confidence": 98.2,
            "email": "jason.mitchell@email.com",
            "phone": "+1 (555) 123-4567",
            "summary": "Product Manager with 8+ years leading cross-functional teams and driving user growth through data-driven decisions.",
            "roles": ["Product Manager", "Senior Product Manager", "Lead Product Manager", "Director of Product"],
            "jobSearchLocation": "New York, NY",
            "education": "MBA in Business Administration, Stanford University",
            "workHistory": [
                {
                    "company": "TechCorp Inc",
                    "position": "Senior Product Manager",
                    "startDate": "2020-06",
                    "endDate": "Present",
                    "duration": "3.5 years",
                    "achievements": [
                        "Led product development for a SaaS platform serving 100K+ users",
                        "Increased user engagement by 45% through feature optimization"
                    ],
                    "skills": ["Product Strategy", "Agile", "SQL", "A/B Testing"]
                },
                {
                    "company": "StartupHub",
                    "position": "Product Manager",
                    "startDate": "2018-03",
                    "endDate": "2020-05",
                    "duration": "2 years",
                    "achievements": [
                        "Built an MVP that reached product-market fit within 6 months"
                    ],
                    "skills": ["Product Development", "User Research", "Jira"]
                }
            ]
        }),
        json!({
            "id": "2",
            "name": "Sarah Chen",
            "title": "UX Designer",
            "location": "NYC",
            "avatar": "https://i.pravatar.cc/300?img=47",
            "experience": "Mid-Level",
            "salaryRange": { "min": 90000, "max": 120000 },
            "skills": ["UI/UX", "Figma", "User Research", "Prototyping"],
            "marketDemand": "high",
            "globalMatches": 8200,
            "confidence": 94.5
        }),
    ]
}

/// The two offline personas, normalized. The first is the account owner.
pub fn demo_personas() -> Vec<PersonaProfile> {
    let records: Vec<RawPersonaRecord> = seed_records()
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed seed persona: {e}");
                None
            }
        })
        .collect();
    normalize_records(records)
}

fn posted(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    remote: bool,
    salary: (u32, u32),
    match_score: u8,
    tags: &[&str],
    experience: &str,
    industry: &str,
    posted_at: DateTime<Utc>,
) -> JobCandidate {
    JobCandidate {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        logo: String::new(),
        location: location.to_string(),
        remote,
        salary: Salary {
            min: salary.0,
            max: salary.1,
            currency: "USD".to_string(),
        },
        visa_sponsored: remote,
        match_score,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        description: format!("{title} at {company}."),
        requirements: vec![format!("{experience} experience in {industry}")],
        benefits: vec!["Health insurance".to_string(), "401(k)".to_string()],
        posted: posted_at,
        experience: experience.to_string(),
        industry: industry.to_string(),
    }
}

/// Demo job feed shown while the backend has no job endpoint.
pub fn demo_jobs() -> Vec<JobCandidate> {
    vec![
        job(
            "job-1",
            "Senior Product Manager",
            "Linear",
            "San Francisco, CA",
            true,
            (150_000, 190_000),
            96,
            &["Product Strategy", "B2B SaaS"],
            "Senior",
            "Software",
            posted(2026, 9, 28),
        ),
        job(
            "job-2",
            "Product Lead, Growth",
            "Duolingo",
            "Pittsburgh, PA",
            false,
            (140_000, 175_000),
            91,
            &["User Growth", "Experimentation"],
            "Senior",
            "Education",
            posted(2026, 10, 2),
        ),
        job(
            "job-3",
            "Product Designer",
            "Figma",
            "New York, NY",
            true,
            (120_000, 160_000),
            84,
            &["Figma", "Prototyping"],
            "Mid-Level",
            "Design Tools",
            posted(2026, 10, 6),
        ),
        job(
            "job-4",
            "Technical Product Manager",
            "Stripe",
            "Remote",
            true,
            (160_000, 210_000),
            78,
            &["SQL", "Payments"],
            "Senior",
            "Fintech",
            posted(2026, 10, 9),
        ),
        job(
            "job-5",
            "Associate Product Manager",
            "Notion",
            "New York, NY",
            false,
            (95_000, 120_000),
            63,
            &["Agile"],
            "Entry",
            "Productivity",
            posted(2026, 10, 12),
        ),
    ]
}
