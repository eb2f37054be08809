use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use astra_client::discovery::{CommitOutcome, DiscoveryEngine};
use astra_client::persona::{HydrateOutcome, PersonaSessionStore};
use astra_client::seed::demo_jobs;
use astra_client::storage::{FileStore, KeyValueStore};
use astra_client::{ApiClient, AuthSession, Config};

/// Scripted drags, as fractions of the screen width, replayed against the demo feed.
const DEMO_DRAGS: &[f64] = &[0.45, -0.12, -0.62, 0.31, 0.2, 0.8, -0.4];

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Astra client v{}", env!("CARGO_PKG_VERSION"));

    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.storage_dir));
    info!("Key-value storage at {}", config.storage_dir.display());

    let api = ApiClient::new(&config.api_base_url, config.http_timeout, storage.clone())
        .context("Failed to build HTTP client")?;
    info!("Backend: {}", api.base_url());

    let mut auth = AuthSession::new(storage);
    auth.restore().await;
    match auth.verify(&api).await {
        Some(user) => info!("Signed in as {}", user.email),
        None => info!("No stored session, continuing anonymously"),
    }

    // Resolve the active persona: server first, demo seed on failure
    let mut personas = PersonaSessionStore::new();
    match personas.hydrate(&api).await {
        HydrateOutcome::Applied { count } => info!("Loaded {count} personas from backend"),
        HydrateOutcome::Fallback { reason } => warn!("Offline demo mode: {reason}"),
        HydrateOutcome::Stale { seq } => warn!("Hydration {seq} superseded"),
    }
    match personas.active_persona() {
        Some(p) => info!(
            "Active persona: {} ({}, {} global matches)",
            p.name, p.title, p.global_matches
        ),
        None => warn!("No persona available; onboarding required"),
    }

    let mut discovery = DiscoveryEngine::new();
    discovery.load_candidates(demo_jobs());

    for fraction in DEMO_DRAGS {
        let Some(current) = discovery.current_candidate() else {
            break;
        };
        let title = format!("{} at {}", current.title, current.company);
        let displacement = fraction * config.screen_width;

        discovery.drag(displacement);
        let class = discovery.release(config.screen_width);
        match discovery.swipe(displacement, config.screen_width)? {
            None => info!("{title}: {class:?}, card snaps back"),
            Some(CommitOutcome::Advanced { cursor }) => {
                info!("{title}: {class:?}, next card #{cursor}")
            }
            Some(CommitOutcome::Exhausted) => info!("{title}: {class:?}, feed exhausted"),
        }
    }

    info!(
        "Session summary: {} decisions, {} queued applications, exhausted = {}",
        discovery.decisions().len(),
        discovery.applications().len(),
        discovery.is_exhausted()
    );
    for skill in personas.skill_summary().iter().take(5) {
        info!("Skill '{}' across {} persona(s)", skill.skill, skill.personas);
    }

    Ok(())
}
