// Persona session: the active-persona source of truth and the ingestion
// boundary that normalizes server and seed records into one shape.

pub mod normalize;
pub mod store;

pub use normalize::{normalize, normalize_records, parse_records, NormalizeError, RawPersonaRecord};
pub use store::{
    DataSource, HydrateOutcome, HydrateTicket, PersonaSession, PersonaSessionStore, SkillCount,
};
