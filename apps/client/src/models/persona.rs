use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarketDemand {
    Low,
    #[default]
    Medium,
    High,
}

impl MarketDemand {
    /// Lenient parse used at the ingestion boundary; unknown labels map to `Medium`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => MarketDemand::Low,
            "high" => MarketDemand::High,
            _ => MarketDemand::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeMeta {
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WorkHistoryItem {
    pub company: String,
    pub position: String,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub achievements: Vec<String>,
    pub start_date: Option<String>, // YYYY-MM
    pub end_date: Option<String>,   // YYYY-MM or "Present"
    pub skills: Vec<String>,
}

/// Canonical persona shape. Everything that crosses the backend boundary is
/// normalized into this before it reaches the session store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonaProfile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub location: String,
    pub avatar: String,
    pub experience: String,
    pub salary_range: SalaryRange,
    pub skills: Vec<String>,
    pub resume: Option<ResumeMeta>,
    pub market_demand: MarketDemand,
    pub global_matches: u64,
    pub confidence: f64, // 0.0 – 100.0
    pub email: Option<String>,
    pub phone: Option<String>,
    pub summary: Option<String>,
    pub roles: Vec<String>,
    pub job_search_location: Option<String>,
    pub education: Option<String>,
    pub work_history: Vec<WorkHistoryItem>,
}

/// Field-wise merge into an existing [`PersonaProfile`]. The id is never patched.
#[derive(Debug, Clone, Default)]
pub struct PersonaPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
    pub experience: Option<String>,
    pub salary_range: Option<SalaryRange>,
    pub skills: Option<Vec<String>>,
    pub resume: Option<ResumeMeta>,
    pub market_demand: Option<MarketDemand>,
    pub global_matches: Option<u64>,
    pub confidence: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub summary: Option<String>,
    pub roles: Option<Vec<String>>,
    pub job_search_location: Option<String>,
    pub education: Option<String>,
    pub work_history: Option<Vec<WorkHistoryItem>>,
}

impl PersonaPatch {
    pub fn apply_to(self, profile: &mut PersonaProfile) {
        let PersonaPatch {
            name,
            title,
            location,
            avatar,
            experience,
            salary_range,
            skills,
            resume,
            market_demand,
            global_matches,
            confidence,
            email,
            phone,
            summary,
            roles,
            job_search_location,
            education,
            work_history,
        } = self;

        if let Some(v) = name {
            profile.name = v;
        }
        if let Some(v) = title {
            profile.title = v;
        }
        if let Some(v) = location {
            profile.location = v;
        }
        if let Some(v) = avatar {
            profile.avatar = v;
        }
        if let Some(v) = experience {
            profile.experience = v;
        }
        if let Some(v) = salary_range {
            profile.salary_range = v;
        }
        if let Some(v) = skills {
            profile.skills = v;
        }
        if let Some(v) = resume {
            profile.resume = Some(v);
        }
        if let Some(v) = market_demand {
            profile.market_demand = v;
        }
        if let Some(v) = global_matches {
            profile.global_matches = v;
        }
        if let Some(v) = confidence.filter(|v| v.is_finite()) {
            profile.confidence = v.clamp(0.0, 100.0);
        }
        if let Some(v) = email {
            profile.email = Some(v);
        }
        if let Some(v) = phone {
            profile.phone = Some(v);
        }
        if let Some(v) = summary {
            profile.summary = Some(v);
        }
        if let Some(v) = roles {
            profile.roles = v;
        }
        if let Some(v) = job_search_location {
            profile.job_search_location = Some(v);
        }
        if let Some(v) = education {
            profile.education = Some(v);
        }
        if let Some(v) = work_history {
            profile.work_history = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_demand_from_label_is_lenient() {
        assert_eq!(MarketDemand::from_label("HIGH"), MarketDemand::High);
        assert_eq!(MarketDemand::from_label(" low "), MarketDemand::Low);
        assert_eq!(MarketDemand::from_label("booming"), MarketDemand::Medium);
    }

    #[test]
    fn test_patch_clamps_confidence() {
        let mut profile = crate::seed::demo_personas().remove(0);
        PersonaPatch {
            confidence: Some(140.0),
            ..Default::default()
        }
        .apply_to(&mut profile);
        assert_eq!(profile.confidence, 100.0);
    }

    #[test]
    fn test_patch_ignores_non_finite_confidence() {
        let mut profile = crate::seed::demo_personas().remove(0);
        let before = profile.confidence;
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            PersonaPatch {
                confidence: Some(bad),
                ..Default::default()
            }
            .apply_to(&mut profile);
            assert_eq!(profile.confidence, before);
        }
    }

    #[test]
    fn test_patch_leaves_unset_fields() {
        let mut profile = crate::seed::demo_personas().remove(0);
        let before = profile.clone();
        PersonaPatch {
            title: Some("Head of Product".to_string()),
            ..Default::default()
        }
        .apply_to(&mut profile);
        assert_eq!(profile.title, "Head of Product");
        assert_eq!(profile.id, before.id);
        assert_eq!(profile.skills, before.skills);
        assert_eq!(profile.work_history, before.work_history);
    }
}
