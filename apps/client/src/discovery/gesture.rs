use serde::{Deserialize, Serialize};

use super::engine::DecisionTag;

/// Fraction of the viewport width a card must travel to count as a decision.
pub const SWIPE_THRESHOLD_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SwipeClass {
    Like,
    Skip,
    /// Inconclusive drag; the card snaps back and nothing changes.
    Neutral,
}

impl SwipeClass {
    pub fn decision_tag(self) -> Option<DecisionTag> {
        match self {
            SwipeClass::Like => Some(DecisionTag::Like),
            SwipeClass::Skip => Some(DecisionTag::Skip),
            SwipeClass::Neutral => None,
        }
    }
}

pub fn swipe_threshold(screen_width: f64) -> f64 {
    screen_width * SWIPE_THRESHOLD_RATIO
}

/// Classifies a released drag by its horizontal displacement alone.
///
/// `Like` iff `displacement > 0.3 * width`, `Skip` iff `displacement < -0.3 * width`.
/// A displacement exactly on the threshold is `Neutral`. Unusable widths
/// (zero, negative, NaN) and non-finite displacements are always `Neutral`.
pub fn classify_gesture(displacement: f64, screen_width: f64) -> SwipeClass {
    if !screen_width.is_finite() || screen_width <= 0.0 || !displacement.is_finite() {
        return SwipeClass::Neutral;
    }
    let threshold = swipe_threshold(screen_width);
    if displacement > threshold {
        SwipeClass::Like
    } else if displacement < -threshold {
        SwipeClass::Skip
    } else {
        SwipeClass::Neutral
    }
}
