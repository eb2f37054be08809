// Swipe-driven job discovery.
// Gesture classification is pure; only `DiscoveryEngine::commit_decision` mutates.

pub mod engine;
pub mod gesture;

pub use engine::{CommitOutcome, Decision, DecisionTag, DiscoveryEngine, DiscoveryState};
pub use gesture::{classify_gesture, swipe_threshold, SwipeClass, SWIPE_THRESHOLD_RATIO};
