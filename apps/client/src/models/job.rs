use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Salary {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

/// A job listing presented for a like/skip decision. Never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobCandidate {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub logo: String,
    pub location: String,
    pub remote: bool,
    pub salary: Salary,
    pub visa_sponsored: bool,
    pub match_score: u8, // 0 – 100
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub posted: DateTime<Utc>,
    pub experience: String,
    pub industry: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Swipe,
    List,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Processing,
    Applied,
    Interview,
    Review,
    Rejected,
    Queued,
}

/// An application recorded from a liked candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub job_id: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub ai_score: u8,
    pub progress: Option<u8>, // 0 – 100
}

/// Partial update for an [`Application`]. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ApplicationPatch {
    pub status: Option<ApplicationStatus>,
    pub progress: Option<u8>,
}

impl ApplicationPatch {
    pub fn apply_to(&self, application: &mut Application) {
        if let Some(status) = self.status {
            application.status = status;
        }
        if let Some(progress) = self.progress {
            application.progress = Some(progress.min(100));
        }
    }
}
