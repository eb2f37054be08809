//! Client core for Astra Apply: swipe-driven job discovery, the persona
//! session store, and the backend plumbing they depend on.
//!
//! The presentation layer owns one [`DiscoveryEngine`] and one
//! [`PersonaSessionStore`], passes them where they are needed, and renders
//! the snapshots they publish.

pub mod api;
pub mod auth;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod models;
pub mod onboarding;
pub mod persona;
pub mod seed;
pub mod storage;

pub use api::{ApiClient, ApiError, CvUpload, PersonaBackend};
pub use auth::AuthSession;
pub use config::Config;
pub use discovery::{classify_gesture, Decision, DecisionTag, DiscoveryEngine, SwipeClass};
pub use errors::CoreError;
pub use onboarding::{CvOnboarding, CvOutcome};
pub use persona::{HydrateOutcome, PersonaSessionStore};
