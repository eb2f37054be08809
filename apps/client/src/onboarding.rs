//! CV onboarding: upload a CV, get a persona back, or fall back to demo data.
//!
//! A failed upload never leaves the flow waiting. It moves to
//! `AwaitingDecision` and the caller must pick `continue_in_demo` or `cancel`.

use tracing::{info, warn};

use crate::api::{CvUpload, PersonaBackend};
use crate::errors::CoreError;
use crate::models::PersonaProfile;
use crate::persona::{normalize, PersonaSessionStore};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OnboardingPhase {
    #[default]
    Idle,
    Uploading,
    AwaitingDecision {
        message: String,
    },
    Complete {
        persona_id: String,
        demo: bool,
    },
    Cancelled,
}

#[derive(Debug)]
pub enum CvOutcome {
    Created(PersonaProfile),
    /// Upload failed; the caller must choose demo mode or cancel.
    NeedsDecision { error: CoreError },
}

#[derive(Debug, Default)]
pub struct CvOnboarding {
    phase: OnboardingPhase,
}

impl CvOnboarding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &OnboardingPhase {
        &self.phase
    }

    fn fail(&mut self, message: String) -> CvOutcome {
        warn!("CV upload failed: {message}");
        self.phase = OnboardingPhase::AwaitingDecision {
            message: message.clone(),
        };
        CvOutcome::NeedsDecision {
            error: CoreError::UploadFailed(message),
        }
    }

    /// Uploads the CV. On success the created persona is added to the store
    /// (and becomes active if nothing is).
    pub async fn submit(
        &mut self,
        backend: &dyn PersonaBackend,
        store: &mut PersonaSessionStore,
        upload: &CvUpload,
    ) -> CvOutcome {
        if upload.bytes.is_empty() {
            return self.fail(format!("'{}' is empty", upload.file_name));
        }

        self.phase = OnboardingPhase::Uploading;
        info!(
            file_name = %upload.file_name,
            size = upload.bytes.len(),
            "Uploading CV"
        );

        let raw = match backend.upload_cv(upload).await {
            Ok(raw) => raw,
            Err(e) => return self.fail(e.to_string()),
        };
        let profile = match normalize(raw) {
            Ok(profile) => profile,
            Err(e) => return self.fail(format!("Backend returned an unusable persona: {e}")),
        };

        info!(persona_id = %profile.id, "Persona created from CV");
        store.add_persona(profile.clone());
        self.phase = OnboardingPhase::Complete {
            persona_id: profile.id.clone(),
            demo: false,
        };
        CvOutcome::Created(profile)
    }

    /// Onboarding without a file goes straight to demo data.
    pub fn submit_demo(&mut self, store: &mut PersonaSessionStore) -> Result<PersonaProfile, CoreError> {
        self.continue_in_demo(store)
    }

    /// Seeds the demo personas (if the store is empty) and completes with the
    /// active persona.
    pub fn continue_in_demo(
        &mut self,
        store: &mut PersonaSessionStore,
    ) -> Result<PersonaProfile, CoreError> {
        store.seed_demo();
        let active = store
            .active_persona()
            .cloned()
            .ok_or_else(|| CoreError::NotFound("active persona".to_string()))?;
        info!(persona_id = %active.id, "Continuing in demo mode");
        self.phase = OnboardingPhase::Complete {
            persona_id: active.id.clone(),
            demo: true,
        };
        Ok(active)
    }

    pub fn cancel(&mut self) {
        info!("CV onboarding cancelled");
        self.phase = OnboardingPhase::Cancelled;
    }
}
