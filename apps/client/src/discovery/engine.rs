use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::gesture::{classify_gesture, SwipeClass};
use crate::errors::CoreError;
use crate::models::{
    Application, ApplicationPatch, ApplicationStatus, JobCandidate, ViewMode,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DecisionTag {
    Like,
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub tag: DecisionTag,
    pub candidate_id: String,
    pub decided_at: DateTime<Utc>,
}

impl Decision {
    pub fn new(tag: DecisionTag, candidate_id: impl Into<String>) -> Self {
        Self {
            tag,
            candidate_id: candidate_id.into(),
            decided_at: Utc::now(),
        }
    }

    pub fn like(candidate_id: impl Into<String>) -> Self {
        Self::new(DecisionTag::Like, candidate_id)
    }

    pub fn skip(candidate_id: impl Into<String>) -> Self {
        Self::new(DecisionTag::Skip, candidate_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Advanced { cursor: usize },
    Exhausted,
}

/// Snapshot published to the presentation layer after every mutation.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryState {
    pub total: usize,
    pub cursor: usize,
    pub exhausted: bool,
    pub view_mode: ViewMode,
    pub current_id: Option<String>,
    pub drag_offset: Option<f64>,
    pub decisions: usize,
}

/// Ordered candidate feed driven by classified swipe gestures.
///
/// Invariants:
/// - `cursor < candidates.len()` whenever the list is non-empty, else 0
/// - the cursor never decreases within one loaded list
/// - committing at the last index sets `exhausted` instead of advancing
pub struct DiscoveryEngine {
    candidates: Vec<JobCandidate>,
    cursor: usize,
    exhausted: bool,
    view_mode: ViewMode,
    drag_offset: Option<f64>,
    decisions: Vec<Decision>,
    applications: Vec<Application>,
    tx: watch::Sender<DiscoveryState>,
}

impl Default for DiscoveryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscoveryEngine {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(DiscoveryState {
            exhausted: true,
            ..Default::default()
        });
        Self {
            candidates: Vec::new(),
            cursor: 0,
            exhausted: true,
            view_mode: ViewMode::Swipe,
            drag_offset: None,
            decisions: Vec::new(),
            applications: Vec::new(),
            tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DiscoveryState> {
        self.tx.subscribe()
    }

    pub fn state(&self) -> DiscoveryState {
        DiscoveryState {
            total: self.candidates.len(),
            cursor: self.cursor,
            exhausted: self.exhausted,
            view_mode: self.view_mode,
            current_id: self.current_candidate().map(|c| c.id.clone()),
            drag_offset: self.drag_offset,
            decisions: self.decisions.len(),
        }
    }

    fn publish(&self) {
        self.tx.send_replace(self.state());
    }

    /// Replaces the feed and rewinds to the first candidate. An empty list
    /// leaves the engine exhausted.
    pub fn load_candidates(&mut self, candidates: Vec<JobCandidate>) {
        self.exhausted = candidates.is_empty();
        self.candidates = candidates;
        self.cursor = 0;
        self.drag_offset = None;
        info!(
            count = self.candidates.len(),
            "Loaded discovery candidates"
        );
        self.publish();
    }

    pub fn candidates(&self) -> &[JobCandidate] {
        &self.candidates
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn current_candidate(&self) -> Option<&JobCandidate> {
        if self.exhausted {
            return None;
        }
        self.candidates.get(self.cursor)
    }

    /// The card rendered underneath the current one.
    pub fn peek_next(&self) -> Option<&JobCandidate> {
        if self.exhausted {
            return None;
        }
        self.candidates.get(self.cursor + 1)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switches between swipe and list presentation. The cursor is untouched.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            debug!(?mode, "View mode changed");
            self.view_mode = mode;
            self.publish();
        }
    }

    pub fn drag_offset(&self) -> Option<f64> {
        self.drag_offset
    }

    /// Records the in-flight horizontal displacement. Ignored when there is
    /// no current candidate.
    pub fn drag(&mut self, displacement: f64) {
        if self.current_candidate().is_none() {
            return;
        }
        self.drag_offset = Some(displacement);
        self.publish();
    }

    /// Ends the in-flight drag and classifies it. Does not commit anything.
    pub fn release(&mut self, screen_width: f64) -> SwipeClass {
        let displacement = self.drag_offset.take().unwrap_or(0.0);
        let class = classify_gesture(displacement, screen_width);
        debug!(displacement, screen_width, ?class, "Drag released");
        self.publish();
        class
    }

    /// Records a decision against the current candidate and advances.
    ///
    /// Fails with [`CoreError::Desync`] when the decision targets anything but
    /// the current candidate, and with [`CoreError::Exhausted`] once the feed
    /// is finished. Neither failure changes state.
    pub fn commit_decision(&mut self, decision: Decision) -> Result<CommitOutcome, CoreError> {
        if self.exhausted {
            warn!(
                candidate_id = %decision.candidate_id,
                "Decision committed after discovery was exhausted"
            );
            return Err(CoreError::Exhausted);
        }

        let current = &self.candidates[self.cursor];
        if current.id != decision.candidate_id {
            let err = CoreError::Desync {
                expected: Some(current.id.clone()),
                actual: decision.candidate_id.clone(),
            };
            error!(code = err.code(), cursor = self.cursor, "{err}");
            return Err(err);
        }

        if decision.tag == DecisionTag::Like {
            let application = Application {
                id: Uuid::new_v4(),
                job_id: current.id.clone(),
                status: ApplicationStatus::Queued,
                applied_at: decision.decided_at,
                ai_score: current.match_score.min(100),
                progress: None,
            };
            info!(job_id = %application.job_id, "Queued application");
            self.applications.push(application);
        }

        debug!(
            candidate_id = %decision.candidate_id,
            tag = ?decision.tag,
            cursor = self.cursor,
            "Decision committed"
        );
        self.decisions.push(decision);
        self.drag_offset = None;

        let outcome = if self.cursor + 1 < self.candidates.len() {
            self.cursor += 1;
            CommitOutcome::Advanced {
                cursor: self.cursor,
            }
        } else {
            self.exhausted = true;
            info!(
                decisions = self.decisions.len(),
                "Discovery exhausted"
            );
            CommitOutcome::Exhausted
        };
        self.publish();
        Ok(outcome)
    }

    /// Classifies a completed swipe and, unless it is neutral, commits it
    /// against the current candidate. Returns `None` for a snap-back.
    pub fn swipe(
        &mut self,
        displacement: f64,
        screen_width: f64,
    ) -> Result<Option<CommitOutcome>, CoreError> {
        self.drag_offset = None;
        let Some(tag) = classify_gesture(displacement, screen_width).decision_tag() else {
            self.publish();
            return Ok(None);
        };
        let candidate_id = self
            .current_candidate()
            .map(|c| c.id.clone())
            .ok_or(CoreError::Exhausted)?;
        self.commit_decision(Decision::new(tag, candidate_id))
            .map(Some)
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn update_application(
        &mut self,
        id: Uuid,
        patch: ApplicationPatch,
    ) -> Result<&Application, CoreError> {
        let application = self
            .applications
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        patch.apply_to(application);
        debug!(application_id = %id, status = ?application.status, "Application updated");
        Ok(&*application)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_jobs;

    fn candidates(ids: &[&str]) -> Vec<JobCandidate> {
        let template = demo_jobs().remove(0);
        ids.iter()
            .map(|id| JobCandidate {
                id: id.to_string(),
                ..template.clone()
            })
            .collect()
    }

    fn engine_with(ids: &[&str]) -> DiscoveryEngine {
        let mut engine = DiscoveryEngine::new();
        engine.load_candidates(candidates(ids));
        engine
    }

    #[test]
    fn test_load_starts_at_first_candidate() {
        let engine = engine_with(&["a", "b", "c"]);
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.current_candidate().unwrap().id, "a");
        assert_eq!(engine.peek_next().unwrap().id, "b");
        assert!(!engine.is_exhausted());
    }

    #[test]
    fn test_empty_load_is_exhausted() {
        let engine = engine_with(&[]);
        assert!(engine.current_candidate().is_none());
        assert!(engine.is_exhausted());
        assert_eq!(engine.cursor(), 0);
    }

    #[test]
    fn test_like_scenario_advances_to_next() {
        let mut engine = engine_with(&["a", "b", "c"]);
        assert_eq!(classify_gesture(400.0, 1000.0), SwipeClass::Like);
        let outcome = engine.commit_decision(Decision::like("a")).unwrap();
        assert_eq!(outcome, CommitOutcome::Advanced { cursor: 1 });
        assert_eq!(engine.current_candidate().unwrap().id, "b");
    }

    #[test]
    fn test_committing_past_last_exhausts() {
        let mut engine = engine_with(&["a", "b", "c"]);
        engine.commit_decision(Decision::like("a")).unwrap();
        engine.commit_decision(Decision::like("b")).unwrap();
        assert_eq!(engine.current_candidate().unwrap().id, "c");

        let outcome = engine.commit_decision(Decision::like("c")).unwrap();
        assert_eq!(outcome, CommitOutcome::Exhausted);
        assert!(engine.is_exhausted());
        assert_eq!(engine.cursor(), 2);
        assert!(engine.current_candidate().is_none());
        assert!(engine.peek_next().is_none());
    }

    #[test]
    fn test_commit_after_exhaustion_fails() {
        let mut engine = engine_with(&["a"]);
        engine.commit_decision(Decision::skip("a")).unwrap();
        let err = engine.commit_decision(Decision::skip("a")).unwrap_err();
        assert!(matches!(err, CoreError::Exhausted));
        assert_eq!(engine.decisions().len(), 1);
    }

    #[test]
    fn test_mismatched_decision_is_desync() {
        let mut engine = engine_with(&["a", "b"]);
        let err = engine.commit_decision(Decision::like("b")).unwrap_err();
        match err {
            CoreError::Desync { expected, actual } => {
                assert_eq!(expected.as_deref(), Some("a"));
                assert_eq!(actual, "b");
            }
            other => panic!("expected desync, got {other:?}"),
        }
        assert_eq!(engine.cursor(), 0);
        assert!(engine.decisions().is_empty());
        assert!(engine.applications().is_empty());
    }

    #[test]
    fn test_cursor_is_monotonic_and_bounded() {
        let ids = ["a", "b", "c", "d"];
        let mut engine = engine_with(&ids);
        let mut last = engine.cursor();
        for (i, id) in ids.iter().enumerate() {
            let decision = if i % 2 == 0 {
                Decision::like(*id)
            } else {
                Decision::skip(*id)
            };
            engine.commit_decision(decision).unwrap();
            assert!(engine.cursor() >= last);
            assert!(engine.cursor() <= ids.len() - 1);
            last = engine.cursor();
        }
        assert!(engine.is_exhausted());
    }

    #[test]
    fn test_likes_queue_applications() {
        let mut engine = engine_with(&["a", "b"]);
        engine.commit_decision(Decision::like("a")).unwrap();
        engine.commit_decision(Decision::skip("b")).unwrap();

        assert_eq!(engine.decisions().len(), 2);
        assert_eq!(engine.applications().len(), 1);
        let application = &engine.applications()[0];
        assert_eq!(application.job_id, "a");
        assert_eq!(application.status, ApplicationStatus::Queued);
        assert_eq!(application.ai_score, demo_jobs()[0].match_score);
    }

    #[test]
    fn test_update_application() {
        let mut engine = engine_with(&["a"]);
        engine.commit_decision(Decision::like("a")).unwrap();
        let id = engine.applications()[0].id;

        let updated = engine
            .update_application(
                id,
                ApplicationPatch {
                    status: Some(ApplicationStatus::Applied),
                    progress: Some(150),
                },
            )
            .unwrap();
        assert_eq!(updated.status, ApplicationStatus::Applied);
        assert_eq!(updated.progress, Some(100));

        let missing = engine.update_application(Uuid::new_v4(), ApplicationPatch::default());
        assert!(matches!(missing, Err(CoreError::NotFound(_))));
    }

    #[test]
    fn test_view_mode_does_not_touch_cursor() {
        let mut engine = engine_with(&["a", "b", "c"]);
        engine.commit_decision(Decision::skip("a")).unwrap();
        engine.set_view_mode(ViewMode::List);
        assert_eq!(engine.cursor(), 1);
        assert_eq!(engine.candidates().len(), 3);
        engine.set_view_mode(ViewMode::Swipe);
        assert_eq!(engine.current_candidate().unwrap().id, "b");
    }

    #[test]
    fn test_neutral_release_changes_nothing() {
        let mut engine = engine_with(&["a", "b"]);
        for _ in 0..3 {
            engine.drag(90.0);
            assert_eq!(engine.drag_offset(), Some(90.0));
            assert_eq!(engine.release(1000.0), SwipeClass::Neutral);
        }
        assert_eq!(engine.drag_offset(), None);
        assert_eq!(engine.cursor(), 0);
        assert!(engine.decisions().is_empty());
    }

    #[test]
    fn test_swipe_commits_classified_gesture() {
        let mut engine = engine_with(&["a", "b", "c"]);
        assert_eq!(engine.swipe(100.0, 1000.0).unwrap(), None);
        assert_eq!(
            engine.swipe(-500.0, 1000.0).unwrap(),
            Some(CommitOutcome::Advanced { cursor: 1 })
        );
        assert_eq!(engine.decisions()[0].tag, DecisionTag::Skip);
        assert_eq!(engine.decisions()[0].candidate_id, "a");
    }

    #[test]
    fn test_swipe_on_exhausted_feed_fails() {
        let mut engine = engine_with(&[]);
        assert!(matches!(
            engine.swipe(900.0, 1000.0),
            Err(CoreError::Exhausted)
        ));
    }

    #[test]
    fn test_reload_rewinds_and_keeps_decision_log() {
        let mut engine = engine_with(&["a"]);
        engine.commit_decision(Decision::like("a")).unwrap();
        engine.load_candidates(candidates(&["x", "y"]));
        assert!(!engine.is_exhausted());
        assert_eq!(engine.current_candidate().unwrap().id, "x");
        assert_eq!(engine.decisions().len(), 1);
    }

    #[test]
    fn test_subscribers_see_snapshots() {
        let mut engine = DiscoveryEngine::new();
        let rx = engine.subscribe();
        engine.load_candidates(candidates(&["a", "b"]));
        engine.commit_decision(Decision::skip("a")).unwrap();
        let state = rx.borrow().clone();
        assert_eq!(state.cursor, 1);
        assert_eq!(state.current_id.as_deref(), Some("b"));
        assert_eq!(state.decisions, 1);
        assert_eq!(state.total, 2);
    }
}
