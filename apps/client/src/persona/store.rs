use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::{ApiError, PersonaBackend};
use crate::errors::CoreError;
use crate::models::{AuthEvent, AuthEventKind, PersonaPatch, PersonaProfile};
use crate::persona::normalize::{normalize, normalize_records, RawPersonaRecord};
use crate::seed::demo_personas;

/// Where the current persona collection came from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Empty,
    Server,
    Demo,
}

/// Snapshot of the session, published to subscribers after every mutation.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct PersonaSession {
    pub master: Option<PersonaProfile>,
    pub personas: Vec<PersonaProfile>,
    pub active_persona_id: Option<String>,
    pub is_onboarded: bool,
    pub source: DataSource,
}

/// Issued by [`PersonaSessionStore::begin_hydrate`]. Carries the request sequence
/// number used to discard superseded results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrateTicket {
    seq: u64,
}

impl HydrateTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HydrateOutcome {
    /// Server records replaced the collection.
    Applied { count: usize },
    /// Backend failed; demo data was seeded if the collection was empty.
    Fallback { reason: String },
    /// A newer hydration already completed; this result was discarded.
    Stale { seq: u64 },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillCount {
    pub skill: String,
    pub personas: usize,
}

/// Single source of truth for the persona collection and the active persona.
///
/// Owned by one logical task; every mutation takes `&mut self` and is
/// synchronous, so the active pointer is observable as soon as a call returns.
pub struct PersonaSessionStore {
    session: PersonaSession,
    next_seq: u64,
    applied_seq: u64,
    /// The master came from the demo seed, not the backend.
    demo_master: bool,
    tx: watch::Sender<PersonaSession>,
}

impl Default for PersonaSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonaSessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(PersonaSession::default());
        Self {
            session: PersonaSession::default(),
            next_seq: 0,
            applied_seq: 0,
            demo_master: false,
            tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PersonaSession> {
        self.tx.subscribe()
    }

    pub fn session(&self) -> &PersonaSession {
        &self.session
    }

    pub fn personas(&self) -> &[PersonaProfile] {
        &self.session.personas
    }

    pub fn master(&self) -> Option<&PersonaProfile> {
        self.session.master.as_ref()
    }

    pub fn is_onboarded(&self) -> bool {
        self.session.is_onboarded
    }

    pub fn source(&self) -> DataSource {
        self.session.source
    }

    pub fn active_persona(&self) -> Option<&PersonaProfile> {
        let id = self.session.active_persona_id.as_deref()?;
        self.session.personas.iter().find(|p| p.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.session.personas.iter().position(|p| p.id == id)
    }

    /// Re-derives the active pointer and onboarded flag, then notifies subscribers.
    fn publish(&mut self) {
        let active_valid = self
            .session
            .active_persona_id
            .as_deref()
            .is_some_and(|id| self.session.personas.iter().any(|p| p.id == id));
        if !active_valid {
            self.session.active_persona_id = self.session.personas.first().map(|p| p.id.clone());
        }
        self.session.is_onboarded = !self.session.personas.is_empty();
        if self.session.personas.is_empty() && self.session.source != DataSource::Empty {
            self.session.source = DataSource::Empty;
        }
        self.tx.send_replace(self.session.clone());
    }

    /// Sets the account owner's canonical profile. A later call replaces it;
    /// callers pass only profiles from the backend.
    pub fn set_master(&mut self, profile: PersonaProfile) {
        info!(persona_id = %profile.id, "Master persona set");
        self.session.master = Some(profile);
        self.demo_master = false;
        self.tx.send_replace(self.session.clone());
    }

    /// Appends a persona; it becomes active if nothing is active yet.
    /// An entry with the same id is replaced in place instead.
    pub fn add_persona(&mut self, profile: PersonaProfile) {
        if let Some(idx) = self.position(&profile.id) {
            debug!(persona_id = %profile.id, "add_persona on existing id, replacing");
            self.session.personas[idx] = profile;
        } else {
            info!(persona_id = %profile.id, "Persona added");
            if self.session.active_persona_id.is_none() {
                self.session.active_persona_id = Some(profile.id.clone());
            }
            self.session.personas.push(profile);
        }
        self.publish();
    }

    pub fn set_active(&mut self, id: &str) -> Result<(), CoreError> {
        if self.position(id).is_none() {
            warn!(persona_id = %id, "set_active on unknown persona");
            return Err(CoreError::NotFound(id.to_string()));
        }
        self.session.active_persona_id = Some(id.to_string());
        info!(persona_id = %id, "Active persona switched");
        self.publish();
        Ok(())
    }

    pub fn update_persona(&mut self, id: &str, patch: PersonaPatch) -> Result<(), CoreError> {
        let idx = self
            .position(id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        patch.apply_to(&mut self.session.personas[idx]);
        debug!(persona_id = %id, "Persona updated");
        self.publish();
        Ok(())
    }

    /// Replaces the entry with the same id, leaving every other entry and the
    /// active pointer alone. Appends when the id is new.
    pub fn replace_persona(&mut self, profile: PersonaProfile) {
        self.add_persona(profile);
    }

    /// Seeds the two demo personas when the collection is empty. Existing data
    /// is never overwritten. Returns whether anything was seeded.
    pub fn seed_demo(&mut self) -> bool {
        if !self.session.personas.is_empty() {
            debug!("Demo seed skipped, collection already populated");
            return false;
        }
        let personas = demo_personas();
        if self.session.master.is_none() {
            self.session.master = personas.first().cloned();
            self.demo_master = self.session.master.is_some();
        }
        self.session.personas = personas;
        self.session.active_persona_id = None;
        self.session.source = DataSource::Demo;
        self.publish();
        info!(count = self.session.personas.len(), "Seeded demo personas");
        true
    }

    pub fn begin_hydrate(&mut self) -> HydrateTicket {
        self.next_seq += 1;
        debug!(seq = self.next_seq, "Hydration started");
        HydrateTicket { seq: self.next_seq }
    }

    /// Applies the result of a fetch started with [`begin_hydrate`](Self::begin_hydrate).
    /// Results older than the last applied one are discarded.
    pub fn complete_hydrate(
        &mut self,
        ticket: HydrateTicket,
        result: Result<Vec<RawPersonaRecord>, ApiError>,
    ) -> HydrateOutcome {
        if ticket.seq <= self.applied_seq {
            debug!(
                seq = ticket.seq,
                applied = self.applied_seq,
                "Discarding superseded hydration result"
            );
            return HydrateOutcome::Stale { seq: ticket.seq };
        }
        self.applied_seq = ticket.seq;

        match result {
            Ok(records) => {
                let personas = normalize_records(records);
                let count = personas.len();
                if self.demo_master {
                    debug!("Dropping demo master persona after server hydration");
                    self.session.master = None;
                    self.demo_master = false;
                }
                self.session.personas = personas;
                self.session.source = DataSource::Server;
                self.publish();
                info!(
                    count,
                    active = ?self.session.active_persona_id,
                    "Hydrated personas from backend"
                );
                HydrateOutcome::Applied { count }
            }
            Err(e) => {
                let reason = CoreError::FetchFailed(e.to_string()).to_string();
                warn!("Persona hydration failed, falling back to local data: {reason}");
                self.seed_demo();
                HydrateOutcome::Fallback { reason }
            }
        }
    }

    pub async fn hydrate(&mut self, backend: &dyn PersonaBackend) -> HydrateOutcome {
        let ticket = self.begin_hydrate();
        let result = backend.list_personas().await;
        self.complete_hydrate(ticket, result)
    }

    /// Re-fetches one persona (richer shape) and replaces it in place.
    pub async fn refresh_persona(
        &mut self,
        backend: &dyn PersonaBackend,
        id: &str,
    ) -> Result<&PersonaProfile, CoreError> {
        let raw = backend
            .get_persona(id)
            .await
            .map_err(|e| CoreError::FetchFailed(e.to_string()))?;
        let profile = normalize(raw).map_err(|e| CoreError::FetchFailed(e.to_string()))?;
        if profile.id != id {
            return Err(CoreError::FetchFailed(format!(
                "requested persona '{id}', backend returned '{}'",
                profile.id
            )));
        }
        self.replace_persona(profile);
        let idx = self
            .position(id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        Ok(&self.session.personas[idx])
    }

    /// Clears everything. Used on logout. Hydrations still in flight are
    /// invalidated and will complete as `Stale`.
    pub fn reset(&mut self) {
        info!("Persona session reset");
        self.applied_seq = self.next_seq;
        self.demo_master = false;
        self.session = PersonaSession::default();
        self.tx.send_replace(self.session.clone());
    }

    /// Integration seam for identity-provider events. Returns whether the
    /// session was reset.
    pub fn on_external_auth_change(&mut self, event: &AuthEvent) -> bool {
        match event.kind {
            AuthEventKind::SignedOut => {
                self.reset();
                true
            }
            AuthEventKind::SignedIn | AuthEventKind::InitialSession => false,
        }
    }

    /// Case-insensitive skill counts across personas, most common first.
    /// Stored skill lists are not modified.
    pub fn skill_summary(&self) -> Vec<SkillCount> {
        let mut counts: Vec<(String, String, usize)> = Vec::new(); // (key, display, count)
        for persona in &self.session.personas {
            let mut seen: Vec<String> = Vec::new();
            for skill in &persona.skills {
                let key = skill.trim().to_lowercase();
                if key.is_empty() || seen.contains(&key) {
                    continue;
                }
                match counts.iter_mut().find(|(k, _, _)| *k == key) {
                    Some(entry) => entry.2 += 1,
                    None => counts.push((key.clone(), skill.trim().to_string(), 1)),
                }
                seen.push(key);
            }
        }
        counts.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));
        counts
            .into_iter()
            .map(|(_, skill, personas)| SkillCount { skill, personas })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CvUpload, NewPersona};
    use crate::models::AuthUser;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    fn record(value: serde_json::Value) -> RawPersonaRecord {
        serde_json::from_value(value).unwrap()
    }

    fn profile(id: &str, name: &str) -> PersonaProfile {
        normalize(record(json!({"id": id, "name": name}))).unwrap()
    }

    /// Backend whose `list_personas` / `get_persona` answers are queued by the test.
    #[derive(Default)]
    struct FakeBackend {
        lists: Mutex<Vec<Result<Vec<RawPersonaRecord>, ApiError>>>,
        single: Mutex<Option<RawPersonaRecord>>,
    }

    impl FakeBackend {
        fn with_list(records: Vec<serde_json::Value>) -> Self {
            let backend = Self::default();
            backend
                .lists
                .lock()
                .unwrap()
                .push(Ok(records.into_iter().map(record).collect()));
            backend
        }

        fn failing() -> Self {
            let backend = Self::default();
            backend.lists.lock().unwrap().push(Err(ApiError::Status {
                status: 503,
                message: "unavailable".to_string(),
            }));
            backend
        }
    }

    #[async_trait]
    impl PersonaBackend for FakeBackend {
        async fn list_personas(&self) -> Result<Vec<RawPersonaRecord>, ApiError> {
            self.lists.lock().unwrap().remove(0)
        }

        async fn get_persona(&self, id: &str) -> Result<RawPersonaRecord, ApiError> {
            self.single.lock().unwrap().clone().ok_or(ApiError::Status {
                status: 404,
                message: format!("Persona {id} not found"),
            })
        }

        async fn create_persona(&self, _p: &NewPersona) -> Result<RawPersonaRecord, ApiError> {
            Err(ApiError::Unauthorized)
        }

        async fn activate_persona(&self, _id: &str) -> Result<RawPersonaRecord, ApiError> {
            Err(ApiError::Unauthorized)
        }

        async fn upload_cv(&self, _u: &CvUpload) -> Result<RawPersonaRecord, ApiError> {
            Err(ApiError::Unauthorized)
        }
    }

    fn assert_active_invariant(store: &PersonaSessionStore) {
        if store.personas().is_empty() {
            assert!(store.active_persona().is_none());
            assert!(!store.is_onboarded());
        } else {
            let active = store.active_persona().expect("non-empty collection has an active persona");
            assert!(store.personas().iter().any(|p| p.id == active.id));
            assert!(store.is_onboarded());
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = PersonaSessionStore::new();
        assert!(store.active_persona().is_none());
        assert_eq!(store.source(), DataSource::Empty);
        assert_active_invariant(&store);
    }

    #[test]
    fn test_first_added_persona_becomes_active() {
        let mut store = PersonaSessionStore::new();
        store.add_persona(profile("a", "A"));
        store.add_persona(profile("b", "B"));
        assert_eq!(store.active_persona().unwrap().id, "a");
        assert_eq!(store.personas().len(), 2);
        assert_active_invariant(&store);
    }

    #[test]
    fn test_set_active_unknown_id_is_not_found() {
        let mut store = PersonaSessionStore::new();
        store.add_persona(profile("a", "A"));
        let err = store.set_active("zzz").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(ref id) if id == "zzz"));
        assert_eq!(store.active_persona().unwrap().id, "a");
    }

    #[test]
    fn test_set_active_is_immediately_observable() {
        let mut store = PersonaSessionStore::new();
        let rx = store.subscribe();
        store.add_persona(profile("a", "A"));
        store.add_persona(profile("b", "B"));
        store.set_active("b").unwrap();
        assert_eq!(store.active_persona().unwrap().id, "b");
        assert_eq!(rx.borrow().active_persona_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_update_persona_merges_fields() {
        let mut store = PersonaSessionStore::new();
        store.add_persona(profile("a", "A"));
        store
            .update_persona(
                "a",
                PersonaPatch {
                    skills: Some(vec!["Rust".to_string()]),
                    ..Default::default()
                },
            )
            .unwrap();
        let persona = store.active_persona().unwrap();
        assert_eq!(persona.skills, vec!["Rust".to_string()]);
        assert_eq!(persona.name, "A");
    }

    #[test]
    fn test_update_unknown_persona_is_not_found() {
        let mut store = PersonaSessionStore::new();
        store.add_persona(profile("a", "A"));
        let result = store.update_persona("b", PersonaPatch::default());
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[test]
    fn test_replace_persona_keeps_position_and_active() {
        let mut store = PersonaSessionStore::new();
        store.add_persona(profile("a", "A"));
        store.add_persona(profile("b", "B"));
        store.set_active("b").unwrap();
        store.replace_persona(profile("a", "A (re-parsed)"));
        assert_eq!(store.personas()[0].name, "A (re-parsed)");
        assert_eq!(store.personas().len(), 2);
        assert_eq!(store.active_persona().unwrap().id, "b");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = PersonaSessionStore::new();
        store.seed_demo();
        store.reset();
        assert!(store.personas().is_empty());
        assert!(store.master().is_none());
        assert_eq!(store.source(), DataSource::Empty);
        assert_active_invariant(&store);
    }

    #[test]
    fn test_seed_demo_only_when_empty() {
        let mut store = PersonaSessionStore::new();
        store.add_persona(profile("x", "Real"));
        assert!(!store.seed_demo());
        assert_eq!(store.personas().len(), 1);

        let mut empty = PersonaSessionStore::new();
        assert!(empty.seed_demo());
        assert_eq!(empty.source(), DataSource::Demo);
        assert_eq!(empty.master().unwrap().id, "1");
        assert_eq!(empty.active_persona().unwrap().id, "1");
    }

    #[tokio::test]
    async fn test_hydrate_replaces_collection() {
        let mut store = PersonaSessionStore::new();
        let backend = FakeBackend::with_list(vec![
            json!({"id": "s1", "name": "Server One", "salary_min": 1}),
            json!({"id": "s2", "name": "Server Two"}),
        ]);
        let outcome = store.hydrate(&backend).await;
        assert_eq!(outcome, HydrateOutcome::Applied { count: 2 });
        assert_eq!(store.source(), DataSource::Server);
        assert_eq!(store.active_persona().unwrap().id, "s1");
        assert_active_invariant(&store);
    }

    #[tokio::test]
    async fn test_hydrate_preserves_active_persona() {
        let mut store = PersonaSessionStore::new();
        store.seed_demo();
        store.set_active("2").unwrap();

        let backend = FakeBackend::with_list(vec![
            json!({"id": "1", "name": "Jason"}),
            json!({"id": "2", "name": "Sarah"}),
            json!({"id": "3", "name": "New"}),
        ]);
        store.hydrate(&backend).await;
        assert_eq!(store.active_persona().unwrap().id, "2");
    }

    #[tokio::test]
    async fn test_hydrate_active_missing_defaults_to_first() {
        let mut store = PersonaSessionStore::new();
        store.seed_demo();
        store.set_active("2").unwrap();

        let backend = FakeBackend::with_list(vec![json!({"id": "9"}), json!({"id": "1"})]);
        store.hydrate(&backend).await;
        assert_eq!(store.active_persona().unwrap().id, "9");
    }

    #[tokio::test]
    async fn test_hydrate_failure_falls_back_to_demo() {
        let mut store = PersonaSessionStore::new();
        let outcome = store.hydrate(&FakeBackend::failing()).await;
        assert!(matches!(outcome, HydrateOutcome::Fallback { ref reason } if reason.contains("unavailable")));
        assert_eq!(store.source(), DataSource::Demo);
        assert_eq!(store.personas().len(), 2);
        assert_active_invariant(&store);
    }

    #[tokio::test]
    async fn test_hydrate_failure_keeps_existing_server_data() {
        let mut store = PersonaSessionStore::new();
        store
            .hydrate(&FakeBackend::with_list(vec![json!({"id": "s1"})]))
            .await;
        let outcome = store.hydrate(&FakeBackend::failing()).await;
        assert!(matches!(outcome, HydrateOutcome::Fallback { .. }));
        assert_eq!(store.source(), DataSource::Server);
        assert_eq!(store.personas()[0].id, "s1");
    }

    #[tokio::test]
    async fn test_hydrate_empty_server_list_clears_session() {
        let mut store = PersonaSessionStore::new();
        store.add_persona(profile("a", "A"));
        store.hydrate(&FakeBackend::with_list(vec![])).await;
        assert!(store.personas().is_empty());
        assert_active_invariant(&store);
    }

    #[tokio::test]
    async fn test_server_hydration_replaces_demo_master() {
        let mut store = PersonaSessionStore::new();
        store.hydrate(&FakeBackend::failing()).await;
        assert_eq!(store.master().unwrap().id, "1");

        let outcome = store
            .hydrate(&FakeBackend::with_list(vec![json!({"id": "s1"})]))
            .await;
        assert_eq!(outcome, HydrateOutcome::Applied { count: 1 });
        assert_eq!(store.source(), DataSource::Server);
        assert!(store.master().is_none());
    }

    #[tokio::test]
    async fn test_server_hydration_keeps_backend_master() {
        let mut store = PersonaSessionStore::new();
        store.set_master(profile("owner", "Account Owner"));
        store.hydrate(&FakeBackend::failing()).await;
        assert_eq!(store.master().unwrap().id, "owner");

        store
            .hydrate(&FakeBackend::with_list(vec![json!({"id": "s1"})]))
            .await;
        assert_eq!(store.master().unwrap().id, "owner");
    }

    #[test]
    fn test_set_master_publishes_and_replaces() {
        let mut store = PersonaSessionStore::new();
        let rx = store.subscribe();

        store.set_master(profile("m1", "First"));
        assert_eq!(rx.borrow().master.as_ref().unwrap().id, "m1");
        assert!(store.personas().is_empty());
        assert!(!store.is_onboarded());

        store.set_master(profile("m2", "Second"));
        assert_eq!(store.master().unwrap().name, "Second");
    }

    #[test]
    fn test_reset_invalidates_in_flight_hydration() {
        let mut store = PersonaSessionStore::new();
        store.seed_demo();
        let ticket = store.begin_hydrate();
        store.reset();

        let outcome = store.complete_hydrate(ticket, Ok(vec![record(json!({"id": "prev-user"}))]));
        assert_eq!(outcome, HydrateOutcome::Stale { seq: ticket.seq() });
        assert!(store.personas().is_empty());
        assert!(store.master().is_none());
        assert_eq!(store.source(), DataSource::Empty);

        let next = store.begin_hydrate();
        let applied = store.complete_hydrate(next, Ok(vec![record(json!({"id": "new-user"}))]));
        assert_eq!(applied, HydrateOutcome::Applied { count: 1 });
    }

    #[test]
    fn test_superseded_hydration_is_discarded() {
        let mut store = PersonaSessionStore::new();
        let first = store.begin_hydrate();
        let second = store.begin_hydrate();

        let newer = store.complete_hydrate(second, Ok(vec![record(json!({"id": "new"}))]));
        assert_eq!(newer, HydrateOutcome::Applied { count: 1 });

        let older = store.complete_hydrate(first, Ok(vec![record(json!({"id": "old"}))]));
        assert_eq!(older, HydrateOutcome::Stale { seq: first.seq() });
        assert_eq!(store.personas()[0].id, "new");
    }

    #[test]
    fn test_older_result_applies_when_newer_still_pending() {
        let mut store = PersonaSessionStore::new();
        let first = store.begin_hydrate();
        let second = store.begin_hydrate();

        store.complete_hydrate(first, Ok(vec![record(json!({"id": "old"}))]));
        assert_eq!(store.personas()[0].id, "old");

        store.complete_hydrate(second, Ok(vec![record(json!({"id": "new"}))]));
        assert_eq!(store.personas()[0].id, "new");
    }

    #[tokio::test]
    async fn test_refresh_persona_replaces_in_place() {
        let mut store = PersonaSessionStore::new();
        store.seed_demo();
        let backend = FakeBackend::default();
        *backend.single.lock().unwrap() = Some(record(json!({
            "id": "2",
            "name": "Sarah Chen",
            "summary": "Designer focused on research",
            "work_history": [{"company": "Figma", "position": "Designer"}]
        })));

        let refreshed = store.refresh_persona(&backend, "2").await.unwrap();
        assert_eq!(refreshed.work_history.len(), 1);
        assert_eq!(store.personas()[1].summary.as_deref(), Some("Designer focused on research"));
        assert_eq!(store.active_persona().unwrap().id, "1");
    }

    #[tokio::test]
    async fn test_refresh_persona_failure_is_fetch_failed() {
        let mut store = PersonaSessionStore::new();
        let result = store.refresh_persona(&FakeBackend::default(), "2").await;
        assert!(matches!(result, Err(CoreError::FetchFailed(_))));
    }

    #[test]
    fn test_sign_out_event_resets() {
        let mut store = PersonaSessionStore::new();
        store.seed_demo();
        let user = AuthUser {
            id: "u".to_string(),
            email: "u@x.dev".to_string(),
            name: None,
        };
        assert!(!store.on_external_auth_change(&AuthEvent::signed_in("t", user)));
        assert_eq!(store.personas().len(), 2);
        assert!(store.on_external_auth_change(&AuthEvent::signed_out()));
        assert!(store.personas().is_empty());
    }

    #[test]
    fn test_skill_summary_dedupes_case_insensitively() {
        let mut store = PersonaSessionStore::new();
        let mut a = profile("a", "A");
        a.skills = vec!["SQL".to_string(), "sql".to_string(), "Figma".to_string()];
        let mut b = profile("b", "B");
        b.skills = vec!["Sql".to_string()];
        store.add_persona(a);
        store.add_persona(b);

        let summary = store.skill_summary();
        assert_eq!(
            summary[0],
            SkillCount {
                skill: "SQL".to_string(),
                personas: 2
            }
        );
        assert_eq!(summary[1].skill, "Figma");
        assert_eq!(store.personas()[0].skills.len(), 3);
    }
}
